//! AST visitor for TypeScript/JavaScript test files
//!
//! Traverses the tree-sitter AST to find test declarations and the call sites in
//! their bodies. Traversal is an explicit worklist, so the language-specific shape
//! of the tree stays inside this module.

pub mod calls;
pub mod test_cases;

use tree_sitter::Node;

pub use calls::{call_arguments, collect_call_sites, resolve_callee, string_literal_value};
pub use test_cases::find_test_declarations;

/// Pre-order, left-to-right iterator over a node and all of its descendants
pub struct Descendants<'tree> {
    stack: Vec<Node<'tree>>,
}

impl<'tree> Iterator for Descendants<'tree> {
    type Item = Node<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack
            .extend((0..node.child_count()).rev().filter_map(|i| node.child(i)));
        Some(node)
    }
}

/// Walk `root` and everything below it in source order
pub fn descendants(root: Node<'_>) -> Descendants<'_> {
    Descendants { stack: vec![root] }
}

/// Named children that are not comments
pub(crate) fn significant_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    (0..node.named_child_count())
        .filter_map(|i| node.named_child(i))
        .filter(|child| child.kind() != "comment")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::typescript::parser::{node_text, parse_source};
    use crate::core::JsLanguageVariant;
    use std::path::PathBuf;

    #[test]
    fn test_descendants_preorder() {
        let source = "a(b(), c());";
        let path = PathBuf::from("test.ts");
        let ast = parse_source(source, &path, JsLanguageVariant::TypeScript).unwrap();

        let calls: Vec<&str> = descendants(ast.tree.root_node())
            .filter(|n| n.kind() == "call_expression")
            .map(|n| node_text(&n, &ast.source))
            .collect();

        assert_eq!(calls, vec!["a(b(), c())", "b()", "c()"]);
    }

    #[test]
    fn test_significant_children_skip_comments() {
        let source = "f(/* first */ 1, 2);";
        let path = PathBuf::from("test.ts");
        let ast = parse_source(source, &path, JsLanguageVariant::TypeScript).unwrap();

        let args = descendants(ast.tree.root_node())
            .find(|n| n.kind() == "arguments")
            .unwrap();
        assert_eq!(significant_children(args).len(), 2);
    }
}
