//! Call-site classification
//!
//! A call is an expectation iff its qualified name contains one of a fixed set of
//! markers. This is a naming heuristic: an action helper such as
//! `clickErrorDismissButton` is classified as an expectation.

use super::synthesis::{synthesize_action, synthesize_expectation};
use crate::core::{CallKind, CallSite, ClassifiedCall, TestCase, TestDeclaration};

/// Case-sensitive substrings marking an assertion
pub const EXPECTATION_MARKERS: &[&str] = &[
    "expect", "toHave", "toBe", "Visible", "Disabled", "Enabled", "Error", "Message",
];

pub fn classify_name(qualified_name: &str) -> CallKind {
    if EXPECTATION_MARKERS
        .iter()
        .any(|marker| qualified_name.contains(marker))
    {
        CallKind::Expectation
    } else {
        CallKind::Action
    }
}

/// Tag a call and synthesize its sentence
pub fn classify_call(call: CallSite) -> ClassifiedCall {
    let kind = classify_name(&call.qualified_name);
    let description = match kind {
        CallKind::Action => synthesize_action(&call.qualified_name, &call.arguments),
        CallKind::Expectation => synthesize_expectation(&call.qualified_name, &call.arguments),
    };

    ClassifiedCall {
        call,
        kind,
        description,
    }
}

/// Split a declaration's calls into actions and expectations, keeping source order
pub fn classify_test_case(declaration: TestDeclaration) -> TestCase {
    let (actions, expectations): (Vec<_>, Vec<_>) = declaration
        .calls
        .into_iter()
        .map(classify_call)
        .partition(|call| call.kind == CallKind::Action);

    TestCase {
        title: declaration.title,
        line: declaration.line,
        suite: declaration.suite,
        actions,
        expectations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Argument;

    #[test]
    fn test_markers() {
        assert_eq!(classify_name("loginPage.fillCredentialsPhone"), CallKind::Action);
        assert_eq!(
            classify_name("loginPage.expectCredentialsPhoneFocused"),
            CallKind::Expectation
        );
        assert_eq!(classify_name("expect(x).toBe"), CallKind::Expectation);
        assert_eq!(classify_name("registerPage.isDateVisible"), CallKind::Expectation);
        // Markers are case-sensitive
        assert_eq!(classify_name("page.visibleCount"), CallKind::Action);
    }

    #[test]
    fn test_known_misclassification() {
        assert_eq!(
            classify_name("loginPage.clickErrorDismissButton"),
            CallKind::Expectation
        );
    }

    #[test]
    fn test_classify_test_case_preserves_order() {
        let declaration = TestDeclaration {
            title: "Caso".into(),
            line: 4,
            suite: None,
            calls: vec![
                CallSite::new("CommonTestSteps.setupRulesTest", vec![], 5),
                CallSite::new("loginPage.expectCredentialsSignInButtonDisabled", vec![], 6),
                CallSite::new(
                    "loginPage.fillCredentialsPhone",
                    vec![Argument::String("9".into())],
                    7,
                ),
                CallSite::new("loginPage.expectCredentialsSignInButtonEnabled", vec![], 8),
            ],
        };

        let case = classify_test_case(declaration);
        let lines = |calls: &[ClassifiedCall]| calls.iter().map(|c| c.call.line).collect::<Vec<_>>();

        assert_eq!(lines(&case.actions[..]), vec![5, 7]);
        assert_eq!(lines(&case.expectations[..]), vec![6, 8]);
        assert_eq!(case.call_count(), 4);
    }

    #[test]
    fn test_descriptions_are_filled_in() {
        let call = classify_call(CallSite::new("homePage.goto", vec![], 1));
        assert_eq!(call.kind, CallKind::Action);
        assert_eq!(call.description, "el usuario navega a la página de inicio");
    }
}
