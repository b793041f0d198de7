//! TypeScript/JavaScript test source analysis
//!
//! Parses Playwright-style test files with tree-sitter and extracts:
//!
//! - Test declarations (`test("title", async () => { ... })`) with their line
//! - The innermost enclosing `describe` title
//! - Every call site in each test body, with its dotted callee name and arguments
//!
//! # Example
//!
//! ```ignore
//! use bddgen::analyzers::typescript::analyze_test_source;
//!
//! let tests = analyze_test_source(path, source, &["test".to_string()], false)?;
//! for test in tests {
//!     println!("{} ({} calls)", test.title, test.calls.len());
//! }
//! ```

pub mod orchestration;
pub mod parser;
pub mod visitor;

// Re-export main entry points
pub use orchestration::{analyze_test_source, discover_tests};
pub use parser::{detect_variant, parse_source};
