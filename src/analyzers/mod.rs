//! Source analyzers. Only TypeScript/JavaScript test files are supported.

pub mod typescript;
