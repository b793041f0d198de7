//! Call-site data flowing from the syntax-tree visitor into scenario synthesis.
//!
//! Everything here is tree-agnostic: the visitor normalizes tree-sitter nodes into
//! these types at the boundary, so classification and synthesis never touch a node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A call argument, normalized into a closed set of shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Argument {
    /// String literal, quotes removed and escapes decoded
    String(String),
    /// Numeric literal as written
    Number(String),
    /// Any other expression, verbatim source text
    Raw(String),
}

impl Argument {
    /// Textual form used by the sentence templates
    pub fn text(&self) -> &str {
        match self {
            Argument::String(s) | Argument::Number(s) | Argument::Raw(s) => s,
        }
    }

    pub fn is_literal(&self) -> bool {
        !matches!(self, Argument::Raw(_))
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A resolved call expression inside a test body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Dot-joined callee chain, e.g. `loginPage.fillCredentialsPhone`
    pub qualified_name: String,
    pub arguments: Vec<Argument>,
    /// 1-based
    pub line: usize,
}

impl CallSite {
    pub fn new(qualified_name: impl Into<String>, arguments: Vec<Argument>, line: usize) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            arguments,
            line,
        }
    }
}

/// Whether a call performs an interaction or asserts on state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    Action,
    Expectation,
}

/// A call site tagged with its kind and synthesized sentence.
///
/// An expectation whose description is empty was deliberately suppressed and
/// must not become a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCall {
    pub call: CallSite,
    pub kind: CallKind,
    pub description: String,
}

impl ClassifiedCall {
    pub fn name(&self) -> &str {
        &self.call.qualified_name
    }

    pub fn is_suppressed(&self) -> bool {
        self.description.trim().is_empty()
    }
}

/// A test declaration found by the visitor, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDeclaration {
    pub title: String,
    pub line: usize,
    /// Title of the innermost enclosing `describe` block, if any
    pub suite: Option<String>,
    pub calls: Vec<CallSite>,
}

/// A classified test declaration, ready for scenario assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub title: String,
    pub line: usize,
    pub suite: Option<String>,
    pub actions: Vec<ClassifiedCall>,
    pub expectations: Vec<ClassifiedCall>,
}

impl TestCase {
    pub fn call_count(&self) -> usize {
        self.actions.len() + self.expectations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_text() {
        assert_eq!(Argument::String("987654321".into()).text(), "987654321");
        assert_eq!(Argument::Number("42".into()).text(), "42");
        assert_eq!(Argument::Raw("{ page }".into()).to_string(), "{ page }");
        assert!(!Argument::Raw("x".into()).is_literal());
        assert!(Argument::Number("1".into()).is_literal());
    }

    #[test]
    fn test_suppressed_description() {
        let call = ClassifiedCall {
            call: CallSite::new("expect(generator).toBeDefined", vec![], 3),
            kind: CallKind::Expectation,
            description: String::new(),
        };
        assert!(call.is_suppressed());
        assert_eq!(call.name(), "expect(generator).toBeDefined");
    }

    #[test]
    fn test_argument_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Argument::Number("7".into())).unwrap();
        assert_eq!(json, r#"{"kind":"number","value":"7"}"#);
    }
}
