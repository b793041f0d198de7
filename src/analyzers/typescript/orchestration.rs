//! Analysis orchestration
//!
//! Top-level entry for turning test source text into test declarations.

use super::parser::{detect_variant, has_parse_errors, parse_source, parse_source_strict};
use super::visitor::find_test_declarations;
use crate::core::errors::Result;
use crate::core::{TestDeclaration, TypeScriptAst};
use std::path::Path;

/// Parse a test file and discover its test declarations
pub fn analyze_test_source(
    path: &Path,
    source: &str,
    test_functions: &[String],
    strict_parsing: bool,
) -> Result<Vec<TestDeclaration>> {
    let start = std::time::Instant::now();

    // Phase 1: Parse
    let variant = detect_variant(path);
    let ast = if strict_parsing {
        parse_source_strict(source, path, variant)?
    } else {
        parse_source(source, path, variant)?
    };
    let parse_time = start.elapsed();

    if has_parse_errors(&ast.tree) {
        tracing::debug!(
            file = %path.display(),
            "parse tree contains recovered syntax errors, continuing"
        );
    }

    // Phase 2: Discover tests and their call sites
    let declarations = discover_tests(&ast, test_functions);

    tracing::debug!(
        file = %path.display(),
        tests = declarations.len(),
        parse_ms = parse_time.as_secs_f64() * 1000.0,
        total_ms = start.elapsed().as_secs_f64() * 1000.0,
        "analyzed test source"
    );

    Ok(declarations)
}

/// Discover test declarations in an already parsed file
pub fn discover_tests(ast: &TypeScriptAst, test_functions: &[String]) -> Vec<TestDeclaration> {
    find_test_declarations(ast, test_functions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fns() -> Vec<String> {
        vec!["test".to_string()]
    }

    #[test]
    fn test_analyze_two_tests() {
        let source = r#"
test("uno", async ({ page }) => {
    await page.goto("/");
});

test("dos", async ({ page }) => {
    await loginPage.fillCredentialsPhone("987654321");
});
"#;
        let found =
            analyze_test_source(Path::new("tests/login.spec.ts"), source, &test_fns(), false)
                .unwrap();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].title, "uno");
        assert_eq!(found[1].calls[0].qualified_name, "loginPage.fillCredentialsPhone");
    }

    #[test]
    fn test_no_tests_is_not_an_error() {
        let found = analyze_test_source(
            Path::new("tests/helpers.spec.ts"),
            "export const x = 1;",
            &test_fns(),
            false,
        )
        .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_strict_mode_surfaces_parse_error() {
        let result = analyze_test_source(
            Path::new("tests/broken.spec.ts"),
            "test('x', async () => { foo( });",
            &test_fns(),
            true,
        );
        assert!(result.unwrap_err().is_parse());
    }

    #[test]
    fn test_javascript_file_uses_javascript_grammar() {
        let found = analyze_test_source(
            Path::new("tests/e2e/flow.test.js"),
            "test('js', async () => { await page.goto('/home'); });",
            &test_fns(),
            false,
        )
        .unwrap();
        assert_eq!(found.len(), 1);
    }
}
