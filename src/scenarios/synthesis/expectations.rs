//! Expectation rules ("Then" steps), in priority order.
//!
//! Predicates match the qualified name case-sensitively, except the tooling
//! suppression rule which looks at the lower-cased name.

use super::{CallContext, Rule};

const TOOLING_SUBJECTS: &[&str] = &["generator", "extractor", "formatter"];

/// Sentence for assertions no rule recognizes
pub fn describe_generic_expectation(c: &CallContext<'_>) -> String {
    if c.exact("expect") {
        "se verifica el resultado esperado".into()
    } else {
        "el resultado debe ser correcto".into()
    }
}

fn quoted(c: &CallContext<'_>, prefix: &str, default: &str) -> String {
    let text = c.literal().filter(|t| !t.is_empty()).unwrap_or(default);
    format!("{prefix}: \"{text}\"")
}

pub fn rules() -> Vec<Rule> {
    vec![
        // Assertions on the documentation tooling are not user-facing behavior
        Rule::fixed(
            "suppress-tooling",
            |c| c.has("expect") && c.has_any(TOOLING_SUBJECTS),
            "",
        ),
        // Phone field messages
        Rule::render(
            "phone-error-text",
            |c| c.exact("expectCredentialsPhoneErrorMessageToHaveText"),
            |c| quoted(c, "se muestra el mensaje de error", "mensaje de error"),
        ),
        Rule::fixed(
            "phone-error-visible",
            |c| c.exact("expectCredentialsPhoneErrorMessageVisible"),
            "se muestra un mensaje de error en el campo número de celular",
        ),
        Rule::fixed(
            "phone-min-length-visible",
            |c| c.exact("expectCredentialsPhoneMinLengthMessageVisible"),
            "se muestra el mensaje de longitud mínima",
        ),
        Rule::render(
            "phone-min-length-text",
            |c| c.exact("expectCredentialsPhoneMinLengthMessageToHaveText"),
            |c| quoted(c, "se muestra el mensaje", "mensaje de longitud"),
        ),
        Rule::fixed(
            "phone-required-visible",
            |c| c.exact("expectCredentialsPhoneRequiredMessageVisible"),
            "se muestra el mensaje de campo requerido",
        ),
        Rule::render(
            "phone-required-text",
            |c| c.exact("expectCredentialsPhoneRequiredMessageToHaveText"),
            |c| quoted(c, "se muestra el mensaje", "campo requerido"),
        ),
        Rule::fixed(
            "phone-focused",
            |c| c.exact("expectCredentialsPhoneFocused"),
            "el campo número de celular debe tener el foco",
        ),
        // Buttons
        Rule::fixed(
            "sign-in-disabled",
            |c| c.exact("expectCredentialsSignInButtonDisabled"),
            "el botón de iniciar sesión debe estar deshabilitado",
        ),
        Rule::fixed(
            "sign-in-enabled",
            |c| c.exact("expectCredentialsSignInButtonEnabled"),
            "el botón de iniciar sesión debe estar habilitado",
        ),
        Rule::fixed(
            "register-enabled",
            |c| c.exact("expectAlternativeAccessRegisterButtonEnabled"),
            "el botón de registrarse debe estar habilitado",
        ),
        Rule::fixed(
            "guest-enabled",
            |c| c.exact("expectAlternativeAccessGuestButtonEnabled"),
            "el botón de ingresar como invitado debe estar habilitado",
        ),
        // Help popup
        Rule::fixed(
            "popup-heading-visible",
            |c| c.exact("expectChangePhonePopupHeadingVisible"),
            "se muestra el encabezado del popup de ayuda",
        ),
        Rule::fixed(
            "popup-message-visible",
            |c| c.exact("expectChangePhonePopupMessageVisible"),
            "se muestra el mensaje del popup de ayuda",
        ),
        Rule::fixed(
            "popup-button-visible",
            |c| c.exact("expectChangePhonePopupButtonVisible"),
            "se muestra el botón del popup de ayuda",
        ),
        Rule::render(
            "popup-heading-text",
            |c| c.exact("expectChangePhonePopupHeadingToHaveText"),
            |c| quoted(c, "el popup muestra el título", "título del popup"),
        ),
        // Calendar
        Rule::fixed(
            "calendar-visible",
            |c| c.exact("expectCalendarVisible"),
            "el calendario debe estar visible",
        ),
        Rule::fixed(
            "calendar-hidden",
            |c| c.exact("expectCalendarHidden"),
            "el calendario debe estar oculto",
        ),
        Rule::fixed(
            "date-selected",
            |c| c.exact("expectDateSelected"),
            "la fecha debe estar seleccionada correctamente",
        ),
        // Date-of-birth validation helpers
        Rule::fixed(
            "validate-enabled-days",
            |c| c.exact("validateEnabledDays"),
            "se validan los días habilitados para mayor de edad",
        ),
        Rule::fixed(
            "validate-month-restrictions",
            |c| c.exact("validateMonthRestrictions"),
            "se validan las restricciones de navegación entre meses",
        ),
        Rule::fixed(
            "validate-valid-date",
            |c| c.exact("validateValidDateSelection"),
            "se valida que la fecha seleccionada cumple con mayoría de edad",
        ),
        Rule::fixed(
            "validate-invalid-date",
            |c| c.exact("validateInvalidDateRestriction"),
            "se valida que no se puede seleccionar fecha de menor de edad",
        ),
        // Generic element states, page-object and matcher forms
        Rule::fixed(
            "visible",
            |c| c.exact("expectVisible") || c.exact("toBeVisible"),
            "el elemento debe estar visible",
        ),
        Rule::fixed(
            "hidden",
            |c| c.exact("expectHidden") || c.exact("toBeHidden"),
            "el elemento debe estar oculto",
        ),
        Rule::fixed(
            "disabled",
            |c| c.exact("expectDisabled") || c.exact("toBeDisabled"),
            "el elemento debe estar deshabilitado",
        ),
        Rule::fixed(
            "enabled",
            |c| c.exact("expectEnabled") || c.exact("toBeEnabled"),
            "el elemento debe estar habilitado",
        ),
        Rule::fixed(
            "focused",
            |c| c.exact("expectFocused") || c.exact("toBeFocused"),
            "el elemento debe tener el foco",
        ),
        Rule::render(
            "has-text",
            |c| c.exact("toHaveText") || c.exact("ToHaveText"),
            |c| quoted(c, "debe mostrar el texto", "texto esperado"),
        ),
        // Playwright/Jest value matchers
        Rule::fixed(
            "resolves",
            |c| c.exact("resolves.toBe"),
            "la promesa debe resolverse con el valor esperado",
        ),
        Rule::fixed(
            "defined",
            |c| c.exact("toBeDefined"),
            "el elemento debe estar definido",
        ),
        Rule::render("to-be", |c| c.exact("toBe"), |c| {
            match c.literal().filter(|t| !t.is_empty()) {
                Some(value) => format!("el valor debe ser: \"{value}\""),
                None => "se debe verificar el resultado esperado".into(),
            }
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::{expectation_cascade, synthesize_expectation};
    use super::*;
    use crate::core::Argument;

    fn s(value: &str) -> Vec<Argument> {
        vec![Argument::String(value.to_string())]
    }

    fn rule_for(name: &str) -> Option<&'static str> {
        expectation_cascade().matching_rule(&CallContext::new(name, &[]))
    }

    #[test]
    fn test_error_message_quotes_literal() {
        assert_eq!(
            synthesize_expectation(
                "loginPage.expectCredentialsPhoneErrorMessageToHaveText",
                &s("Número de celular debe iniciar en 9"),
            ),
            "se muestra el mensaje de error: \"Número de celular debe iniciar en 9\""
        );
    }

    #[test]
    fn test_text_defaults_without_argument() {
        assert_eq!(
            synthesize_expectation("loginPage.expectCredentialsPhoneRequiredMessageToHaveText", &[]),
            "se muestra el mensaje: \"campo requerido\""
        );
        assert_eq!(
            synthesize_expectation("expect(locator).toHaveText", &[]),
            "debe mostrar el texto: \"texto esperado\""
        );
    }

    #[test]
    fn test_button_states() {
        assert_eq!(
            synthesize_expectation("loginPage.expectCredentialsSignInButtonDisabled", &[]),
            "el botón de iniciar sesión debe estar deshabilitado"
        );
        assert_eq!(
            synthesize_expectation("loginPage.expectAlternativeAccessGuestButtonEnabled", &[]),
            "el botón de ingresar como invitado debe estar habilitado"
        );
    }

    #[test]
    fn test_tooling_assertions_are_suppressed() {
        assert_eq!(synthesize_expectation("expect(generator).toBeDefined", &[]), "");
        assert_eq!(
            synthesize_expectation("expect(formatter.getFileExtension()).toBe", &s(".md")),
            ""
        );
    }

    #[test]
    fn test_matcher_forms_share_rules() {
        assert_eq!(
            synthesize_expectation("expect(page.locator(…)).toBeVisible", &[]),
            "el elemento debe estar visible"
        );
        assert_eq!(
            synthesize_expectation("homePage.expectVisible", &[]),
            "el elemento debe estar visible"
        );
        assert_eq!(rule_for("expect(x).toBeFocused"), Some("focused"));
    }

    #[test]
    fn test_value_matchers_are_reachable() {
        assert_eq!(rule_for("expect(promise).resolves.toBe"), Some("resolves"));
        assert_eq!(rule_for("expect(value).toBeDefined"), Some("defined"));
        assert_eq!(
            synthesize_expectation("expect(total).toBe", &[Argument::Number("3".into())]),
            "el valor debe ser: \"3\""
        );
        assert_eq!(
            synthesize_expectation("expect(total).toBe", &[]),
            "se debe verificar el resultado esperado"
        );
    }

    #[test]
    fn test_generic_fallbacks() {
        assert_eq!(
            synthesize_expectation("loginPage.expectSomethingNew", &[]),
            "se verifica el resultado esperado"
        );
        assert_eq!(
            synthesize_expectation("loginPage.showErrorBanner", &[]),
            "el resultado debe ser correcto"
        );
    }

    #[test]
    fn test_specific_rule_outranks_generic_state() {
        assert_eq!(
            rule_for("registerPage.expectCalendarVisible"),
            Some("calendar-visible")
        );
    }
}
