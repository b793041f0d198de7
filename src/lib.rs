// Export modules for library usage
pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod generation;
pub mod io;
pub mod observability;
pub mod scenarios;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::{
    Argument, CallKind, CallSite, ClassifiedCall, JsLanguageVariant, TestCase, TestDeclaration,
    TypeScriptAst,
};

pub use crate::config::{BddgenConfig, DocumentationConfig, ExtractionConfig, OutputFormat};

pub use crate::generation::{DocumentationGenerator, GenerationReport, ProjectInfo, SuiteStats};

pub use crate::scenarios::{
    extract_scenarios, CodeAnalysisExtractor, HybridExtractor, Scenario, ScenarioMetadata,
    TestType,
};
