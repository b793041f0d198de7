//! Test declaration discovery
//!
//! Finds `test("title", async () => { ... })` calls, remembering the innermost
//! enclosing `describe` title, and collects the call sites of each body.

use super::calls::{collect_call_sites, resolve_callee, string_literal_value};
use super::significant_children;
use crate::analyzers::typescript::parser::{node_line, node_text};
use crate::core::{TestDeclaration, TypeScriptAst};
use tree_sitter::Node;

const FUNCTION_KINDS: &[&str] = &["arrow_function", "function_expression", "function"];
const SUITE_MODIFIERS: &[&str] = &["parallel", "serial", "only", "skip", "fixme"];

/// Find every test declaration in the file, in source order.
///
/// `test_functions` names the bare identifiers that declare a test (`test`, `it`, ...).
/// Calls with the wrong arity or argument kinds are skipped silently.
pub fn find_test_declarations(ast: &TypeScriptAst, test_functions: &[String]) -> Vec<TestDeclaration> {
    let source = ast.source.as_str();
    let mut declarations = Vec::new();
    let mut worklist: Vec<(Node<'_>, Option<String>)> = vec![(ast.tree.root_node(), None)];

    while let Some((node, suite)) = worklist.pop() {
        let mut child_suite = suite.clone();

        if node.kind() == "call_expression" {
            if is_test_call(node, source, test_functions) {
                if let Some(declaration) = parse_test_call(node, source, suite.clone()) {
                    tracing::debug!(
                        title = %declaration.title,
                        line = declaration.line,
                        calls = declaration.calls.len(),
                        "found test declaration"
                    );
                    declarations.push(declaration);
                }
            } else if let Some(title) = suite_title(node, source, test_functions) {
                child_suite = Some(title);
            }
        }

        worklist.extend(
            (0..node.child_count())
                .rev()
                .filter_map(|i| node.child(i))
                .map(|child| (child, child_suite.clone())),
        );
    }

    declarations
}

fn is_test_call(node: Node<'_>, source: &str, test_functions: &[String]) -> bool {
    node.child_by_field_name("function")
        .filter(|callee| callee.kind() == "identifier")
        .map(|callee| {
            let name = node_text(&callee, source);
            test_functions.iter().any(|f| f == name)
        })
        .unwrap_or(false)
}

fn parse_test_call(node: Node<'_>, source: &str, suite: Option<String>) -> Option<TestDeclaration> {
    let arguments = node.child_by_field_name("arguments")?;
    let args = significant_children(arguments);
    if args.len() < 2 {
        return None;
    }

    let (title_node, function_node) = (args[0], args[1]);
    if title_node.kind() != "string" || !FUNCTION_KINDS.contains(&function_node.kind()) {
        return None;
    }

    let calls = function_node
        .child_by_field_name("body")
        .filter(|body| body.kind() == "statement_block")
        .map(|body| collect_call_sites(body, source))
        .unwrap_or_default();

    Some(TestDeclaration {
        title: string_literal_value(title_node, source),
        line: node_line(&node),
        suite,
        calls,
    })
}

/// Title of a `describe(...)` / `test.describe.parallel(...)` grouping call
fn suite_title(node: Node<'_>, source: &str, test_functions: &[String]) -> Option<String> {
    let callee = node.child_by_field_name("function")?;
    let resolved = resolve_callee(callee, source)?;
    if resolved.receiver.is_some() || !is_suite_name(&resolved.name, test_functions) {
        return None;
    }

    let arguments = node.child_by_field_name("arguments")?;
    let first = significant_children(arguments).into_iter().next()?;
    (first.kind() == "string").then(|| string_literal_value(first, source))
}

fn is_suite_name(name: &str, test_functions: &[String]) -> bool {
    let mut segments = name.split('.');
    let head = segments.next().unwrap_or_default();
    let rest: Vec<&str> = segments.collect();

    match rest.as_slice() {
        [] => head == "describe",
        ["describe", modifiers @ ..] => {
            test_functions.iter().any(|f| f == head)
                && modifiers.iter().all(|m| SUITE_MODIFIERS.contains(m))
        }
        [modifier] => head == "describe" && SUITE_MODIFIERS.contains(modifier),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::typescript::parser::parse_source;
    use crate::core::JsLanguageVariant;
    use std::path::PathBuf;

    fn find(source: &str) -> Vec<TestDeclaration> {
        let ast = parse_source(
            source,
            &PathBuf::from("login.spec.ts"),
            JsLanguageVariant::TypeScript,
        )
        .unwrap();
        find_test_declarations(&ast, &["test".to_string()])
    }

    #[test]
    fn test_finds_declarations_with_suite() {
        let source = r#"
test.describe.parallel("Reglas de negocio de la página de login", () => {
  test.afterEach(async ({ page }) => {
    await page.close();
  });

  test("Verificar el foco", async ({ page }) => {
    const { loginPage } = await CommonTestSteps.setupRulesTest(page);
    await loginPage.expectCredentialsPhoneFocused();
  });
});
"#;
        let found = find(source);

        assert_eq!(found.len(), 1);
        let decl = &found[0];
        assert_eq!(decl.title, "Verificar el foco");
        assert_eq!(decl.line, 7);
        assert_eq!(
            decl.suite.as_deref(),
            Some("Reglas de negocio de la página de login")
        );
        let names: Vec<&str> = decl.calls.iter().map(|c| c.qualified_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "CommonTestSteps.setupRulesTest",
                "loginPage.expectCredentialsPhoneFocused"
            ]
        );
    }

    #[test]
    fn test_top_level_test_has_no_suite() {
        let found = find("test('solo', function () { foo(); });");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].suite, None);
        assert_eq!(found[0].calls.len(), 1);
    }

    #[test]
    fn test_rejects_wrong_shapes() {
        assert!(find("test('sin cuerpo');").is_empty());
        assert!(find("test(title, async () => {});").is_empty());
        assert!(find("test('no es función', handler);").is_empty());
        assert!(find("test.skip('miembro', async () => {});").is_empty());
    }

    #[test]
    fn test_expression_body_yields_no_calls() {
        let found = find("test('flecha', async () => page.goto('/'));");
        assert_eq!(found.len(), 1);
        assert!(found[0].calls.is_empty());
    }

    #[test]
    fn test_nested_describe_uses_innermost_title() {
        let source = r#"
describe("Externo", () => {
  describe("Interno", () => {
    test("caso", async () => {});
  });
  test("otro", async () => {});
});
"#;
        let found = find(source);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].suite.as_deref(), Some("Interno"));
        assert_eq!(found[1].suite.as_deref(), Some("Externo"));
    }

    #[test]
    fn test_is_suite_name() {
        let fns = vec!["test".to_string()];
        assert!(is_suite_name("describe", &fns));
        assert!(is_suite_name("test.describe", &fns));
        assert!(is_suite_name("test.describe.parallel", &fns));
        assert!(is_suite_name("describe.only", &fns));
        assert!(!is_suite_name("test.step", &fns));
        assert!(!is_suite_name("page.describe", &fns));
    }
}
