pub mod ast;
pub mod calls;
pub mod errors;

pub use ast::{JsLanguageVariant, TypeScriptAst};
pub use calls::{Argument, CallKind, CallSite, ClassifiedCall, TestCase, TestDeclaration};
pub use errors::{Error, Result, ResultExt};
