//! Action rules ("Given"/"When" steps), in priority order.

use super::{CallContext, Rule};

/// Field kinds recognized in fill helpers, with the phrase naming the field
const FIELD_PHRASES: &[(&str, &str)] = &[
    ("phone", "número de celular"),
    ("email", "de email"),
    ("password", "de contraseña"),
    ("name", "de nombre"),
];

/// Page sections checked by `verify*` helpers
const SECTION_PHRASES: &[(&str, &str)] = &[
    ("verifymenu", "los elementos del menú"),
    ("verifycarousel", "los elementos del carrusel"),
    ("verifyexpert", "la sección de expertos"),
    ("verifybenefits", "la sección de beneficios"),
    ("verifycourses", "la sección de cursos"),
    ("verifynews", "la sección de noticias"),
    ("verifyprefooter", "la sección antes del pie de página"),
    ("verifyfooter", "el pie de página"),
];

pub fn rules() -> Vec<Rule> {
    vec![
        // Setup helpers
        Rule::render(
            "setup-rules",
            |c| c.has_any(&["setuprulestest", "setupregisterrulestest"]),
            |c| {
                if c.has("register") {
                    "el usuario se encuentra en la página de registro".into()
                } else {
                    "el usuario se encuentra en la página de login".into()
                }
            },
        ),
        Rule::render(
            "setup-validation",
            |c| c.has_any(&["setupvalidationtest", "setupregistervalidationtest"]),
            |c| {
                if c.has("register") {
                    "el usuario se encuentra en la página de registro".into()
                } else {
                    "el usuario se encuentra en la página".into()
                }
            },
        ),
        Rule::fixed(
            "documentation-config",
            |c| c.has("documentationconfig.createdefault"),
            "el usuario configura el generador de documentación",
        ),
        Rule::fixed(
            "extractor-can-process",
            |c| c.has("extractor.canprocess"),
            "el usuario verifica que se pueden procesar archivos de test",
        ),
        Rule::fixed(
            "formatter-extension",
            |c| c.has("formatter.getfileextension"),
            "el usuario verifica el formato de salida de documentación",
        ),
        // Navigation
        Rule::render("navigate", |c| c.has_any(&["goto", "navigate"]), describe_navigation),
        // Fields
        Rule::render("fill", |c| c.has("fill"), describe_fill),
        Rule::render(
            "get-value",
            |c| {
                c.has("getcredentialsphonevalue")
                    || c.has("getvalue")
                    || (c.has("get") && c.has("value"))
            },
            |c| {
                if c.has("phone") {
                    "el usuario verifica el valor del campo número de celular".into()
                } else {
                    "el usuario verifica el valor del campo".into()
                }
            },
        ),
        // Clicks and selections
        Rule::render("click", |c| c.has("click"), describe_click),
        Rule::render("select", |c| c.has("select"), |c| {
            let value = c.value();
            if c.has("date") {
                format!("el usuario selecciona la fecha \"{value}\"")
            } else {
                format!("el usuario selecciona \"{value}\"")
            }
        }),
        // Element validation
        Rule::fixed(
            "validate-login-elements",
            |c| c.has("validateloginpageelements"),
            "el usuario verifica que todos los elementos de login están presentes",
        ),
        Rule::fixed(
            "validate-register-elements",
            |c| c.has("validateregisterpageelements"),
            "el usuario verifica que todos los elementos de registro están presentes",
        ),
        Rule::fixed(
            "validate-elements",
            |c| c.has("validate") && c.has("elements"),
            "el usuario verifica que todos los elementos están presentes",
        ),
        // Page sections
        Rule::render("verify-section", |c| c.has("verify"), |c| {
            match SECTION_PHRASES.iter().find(|(key, _)| c.has(key)) {
                Some((_, section)) => format!("el usuario verifica {section}"),
                None => "el usuario verifica los elementos correspondientes".into(),
            }
        }),
        // Console output
        Rule::render("console-log", |c| c.has("console.log"), |c| {
            let message = c.value();
            if message.contains('✅') {
                "el sistema confirma que está listo para usar".into()
            } else if message.contains('💡') {
                "el sistema muestra información sobre cómo generar documentación".into()
            } else {
                "el sistema muestra un mensaje informativo".into()
            }
        }),
        // Calendar
        Rule::fixed(
            "open-date-picker",
            |c| c.has("opendate"),
            "el usuario abre el calendario",
        ),
        Rule::render("calendar", |c| c.has("calendar"), |c| {
            if c.has_any(&["open", "show"]) {
                "el usuario abre el calendario".into()
            } else if c.has("close") {
                "el usuario cierra el calendario".into()
            } else if c.has("navigate") {
                "el usuario navega en el calendario".into()
            } else {
                "el usuario interactúa con el calendario".into()
            }
        }),
        // Date-of-birth validation helpers
        Rule::fixed(
            "validate-enabled-days",
            |c| c.has("validateenableddays") || (c.has("validate") && c.has("enabled") && c.has("days")),
            "se verifican los días habilitados para mayor de edad",
        ),
        Rule::fixed(
            "validate-month-restrictions",
            |c| c.has("validatemonthrestrictions"),
            "se verifica que no se puede navegar a meses restringidos",
        ),
        Rule::fixed(
            "validate-valid-date",
            |c| c.has("validatevaliddateselection"),
            "se verifica que se puede seleccionar una fecha válida",
        ),
        Rule::fixed(
            "validate-invalid-date",
            |c| c.has_any(&["validateinvaliddaterestriction", "validateinvalidfecharestriction"]),
            "se verifica que no se puede seleccionar una fecha inválida",
        ),
        // Generic verbs
        Rule::fixed("create", |c| c.has("create"), "el usuario crea un elemento"),
        Rule::fixed("open", |c| c.has("open"), "el usuario abre un elemento"),
        Rule::fixed("close", |c| c.has("close"), "el usuario cierra un elemento"),
        Rule::fixed("clear", |c| c.has("clear"), "el usuario limpia el campo"),
        Rule::render("press", |c| c.has("press"), |c| {
            format!("el usuario presiona la tecla {}", c.value())
                .trim_end()
                .to_string()
        }),
        Rule::fixed(
            "wait",
            |c| c.has("wait"),
            "el usuario espera a que se complete la acción",
        ),
    ]
}

fn describe_navigation(c: &CallContext<'_>) -> String {
    let destination = if c.has("home") {
        "de inicio"
    } else if c.has("login") {
        "de login"
    } else if c.has("register") {
        "de registro"
    } else {
        "correspondiente"
    };
    format!("el usuario navega a la página {destination}")
}

fn describe_fill(c: &CallContext<'_>) -> String {
    let value = c.value();
    let field = FIELD_PHRASES
        .iter()
        .find(|(key, _)| c.has(key))
        .map(|(_, phrase)| *phrase);

    match (field, value.is_empty()) {
        (Some(phrase), true) => format!("el usuario borra la entrada del campo {phrase}"),
        (Some(phrase), false) => format!("el usuario ingresa \"{value}\" en el campo {phrase}"),
        (None, true) => "el usuario limpia el campo".into(),
        (None, false) => format!("el usuario completa el campo con \"{value}\""),
    }
}

fn describe_click(c: &CallContext<'_>) -> String {
    if c.has("button") {
        "el usuario hace clic en el botón".into()
    } else if c.has("calendar") {
        "el usuario hace clic en el calendario".into()
    } else if c.has("date") {
        "el usuario selecciona una fecha".into()
    } else {
        format!("el usuario hace clic en {}", c.value_or("el elemento"))
    }
}
