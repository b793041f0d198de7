//! Tree-sitter parser integration for JavaScript/TypeScript
//!
//! Provides parsing using tree-sitter grammars for JS/TS/JSX/TSX.

use crate::core::errors::{Error, Result};
use crate::core::{JsLanguageVariant, TypeScriptAst};
use std::path::Path;
use tree_sitter::{Language as TsLanguage, Node, Parser, Tree};

/// Get the tree-sitter language for a JS variant
fn get_language(variant: JsLanguageVariant) -> TsLanguage {
    match variant {
        JsLanguageVariant::JavaScript | JsLanguageVariant::Jsx => {
            tree_sitter_javascript::LANGUAGE.into()
        }
        JsLanguageVariant::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        JsLanguageVariant::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parse JavaScript/TypeScript source code into a tree-sitter AST
pub fn parse_source(
    content: &str,
    path: &Path,
    variant: JsLanguageVariant,
) -> Result<TypeScriptAst> {
    let mut parser = Parser::new();
    let language = get_language(variant);

    parser
        .set_language(&language)
        .map_err(|e| Error::parse(path, 0, 0, format!("Failed to set tree-sitter language: {e}")))?;

    let tree = parser
        .parse(content, None)
        .ok_or_else(|| Error::parse(path, 0, 0, "Failed to parse source code"))?;

    Ok(TypeScriptAst {
        tree,
        path: path.to_path_buf(),
        source: content.to_string(),
        language_variant: variant,
    })
}

/// Parse and reject trees that contain recovered syntax errors
pub fn parse_source_strict(
    content: &str,
    path: &Path,
    variant: JsLanguageVariant,
) -> Result<TypeScriptAst> {
    let ast = parse_source(content, path, variant)?;
    match first_error_position(&ast.tree) {
        Some((line, column)) => Err(Error::parse(path, line, column, "syntax error")),
        None => Ok(ast),
    }
}

/// Determine language variant from file path
pub fn detect_variant(path: &Path) -> JsLanguageVariant {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(JsLanguageVariant::from_extension)
        .unwrap_or(JsLanguageVariant::JavaScript)
}

/// Check if a parse tree has errors
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// 1-based line and column of the first ERROR or MISSING node, if any
pub fn first_error_position(tree: &Tree) -> Option<(usize, usize)> {
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }
    super::visitor::descendants(root)
        .find(|node| node.is_error() || node.is_missing())
        .map(|node| (node_line(&node), node_column(&node)))
}

/// Get text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    &source[start..end]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detect_variant() {
        assert_eq!(
            detect_variant(Path::new("login.spec.js")),
            JsLanguageVariant::JavaScript
        );
        assert_eq!(
            detect_variant(Path::new("tests/rules/login-rules.spec.ts")),
            JsLanguageVariant::TypeScript
        );
        assert_eq!(
            detect_variant(Path::new("widget.test.tsx")),
            JsLanguageVariant::Tsx
        );
        assert_eq!(
            detect_variant(Path::new("no_extension")),
            JsLanguageVariant::JavaScript
        );
    }

    #[test]
    fn test_parse_typescript_test_file() {
        let source = r#"
import { test } from "@playwright/test";
test("abre la página", async ({ page }) => {
    await page.goto("/login");
});
"#;
        let path = PathBuf::from("login.spec.ts");
        let ast = parse_source(source, &path, JsLanguageVariant::TypeScript).unwrap();

        assert!(!has_parse_errors(&ast.tree));
        assert_eq!(ast.language_variant, JsLanguageVariant::TypeScript);
        assert_eq!(ast.path, path);
    }

    #[test]
    fn test_lenient_parse_keeps_broken_tree() {
        let source = "test('roto', async () => { await page.click( });";
        let path = PathBuf::from("broken.spec.ts");
        let ast = parse_source(source, &path, JsLanguageVariant::TypeScript).unwrap();

        assert!(has_parse_errors(&ast.tree));
        assert!(first_error_position(&ast.tree).is_some());
    }

    #[test]
    fn test_strict_parse_rejects_broken_tree() {
        let source = "test('roto', async () => { await page.click( });";
        let path = PathBuf::from("broken.spec.ts");
        let err = parse_source_strict(source, &path, JsLanguageVariant::TypeScript).unwrap_err();

        assert!(err.is_parse());
        assert!(err.to_string().contains("broken.spec.ts"));
    }

    #[test]
    fn test_node_text_and_line() {
        let source = "const x = 42;\nconst y = 24;";
        let path = PathBuf::from("test.js");
        let ast = parse_source(source, &path, JsLanguageVariant::JavaScript).unwrap();

        let root = ast.tree.root_node();
        assert_eq!(node_text(&root, &ast.source), source);
        assert_eq!(node_line(&root), 1);
        assert_eq!(node_column(&root), 1);
    }
}
