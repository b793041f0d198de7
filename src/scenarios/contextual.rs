//! Contextual "Then" sentence inferred from the test title.
//!
//! Used when no expectation call yields a step. The title is lower-cased and
//! matched against themes in priority order; when nothing matches, the actions
//! decide between the validation sentence and the generic closing sentence.

use crate::core::ClassifiedCall;

/// Closing sentence when neither the title nor the actions say anything specific
pub const GENERIC_OUTCOME: &str = "el comportamiento del sistema debe ser el correcto";
pub const VALIDATION_OUTCOME: &str = "las validaciones deben ejecutarse correctamente";

type TitleRule = fn(&str) -> Option<&'static str>;

const TITLE_RULES: &[TitleRule] = &[
    documentation_demo,
    ignored_letters,
    focus,
    disabled_button,
    enabled_button,
    error_message,
    ignored_characters,
    calendar,
    date_selection,
    popup,
    element_presence,
];

pub fn contextual_expectation(title: &str, actions: &[ClassifiedCall]) -> String {
    let title = title.to_lowercase();

    if let Some(sentence) = TITLE_RULES.iter().find_map(|rule| rule(&title)) {
        return sentence.to_string();
    }

    let validates = actions
        .iter()
        .any(|action| action.name().contains("validate") || action.name().contains("verify"));
    if validates {
        VALIDATION_OUTCOME.to_string()
    } else {
        GENERIC_OUTCOME.to_string()
    }
}

fn documentation_demo(t: &str) -> Option<&'static str> {
    t.contains("demostrar generación de documentación")
        .then_some("el generador de documentación debe estar configurado correctamente")
}

fn ignored_letters(t: &str) -> Option<&'static str> {
    if t.contains("letras en el campo de número") && t.contains("ignoren") {
        Some("las letras deben ser ignoradas y el campo debe permanecer vacío")
    } else if t.contains("número de celular que contenga letras") && t.contains("ignoradas") {
        Some("las letras deben ser ignoradas y solo deben mantenerse los números")
    } else {
        None
    }
}

fn focus(t: &str) -> Option<&'static str> {
    t.contains("foco")
        .then_some("el campo número de celular debe tener el foco")
}

fn disabled_button(t: &str) -> Option<&'static str> {
    if !(t.contains("deshabilitado") && t.contains("botón")) {
        return None;
    }
    Some(if t.contains("iniciar sesión") {
        "el botón de iniciar sesión debe estar deshabilitado"
    } else {
        "el botón correspondiente debe estar deshabilitado"
    })
}

fn enabled_button(t: &str) -> Option<&'static str> {
    if !(t.contains("habilitado") && t.contains("botón")) {
        return None;
    }
    Some(if t.contains("iniciar sesión") {
        "el botón de iniciar sesión debe estar habilitado"
    } else if t.contains("registrarse") {
        "el botón de registrarse debe estar habilitado"
    } else if t.contains("invitado") {
        "el botón de ingresar como invitado debe estar habilitado"
    } else {
        "el botón correspondiente debe estar habilitado"
    })
}

fn error_message(t: &str) -> Option<&'static str> {
    if !(t.contains("mensaje de error") || t.contains("muestre un mensaje")) {
        return None;
    }
    Some(if t.contains("longitud") {
        "se debe mostrar un mensaje de error sobre la longitud mínima"
    } else if t.contains("formato") {
        "se debe mostrar un mensaje de error sobre el formato"
    } else {
        "se debe mostrar el mensaje de error correspondiente"
    })
}

fn ignored_characters(t: &str) -> Option<&'static str> {
    if !(t.contains("ignoren") || t.contains("ignoradas")) {
        return None;
    }
    Some(if t.contains("letras") {
        "las letras deben ser ignoradas y no aparecer en el campo"
    } else if t.contains("caracteres especiales") {
        "los caracteres especiales deben ser ignorados"
    } else {
        "los caracteres no válidos deben ser ignorados"
    })
}

/// Falls through to the later rules when no calendar sub-theme matches
fn calendar(t: &str) -> Option<&'static str> {
    if !t.contains("calendario") {
        return None;
    }
    if t.contains("muestre") && t.contains("defecto") {
        Some("el calendario debe mostrar el año y mes correcto para usuarios de mayoría de edad")
    } else if t.contains("navegar") && t.contains("meses futuros") {
        Some("no se debe permitir navegar a meses que resultarían en menor de edad")
    } else if t.contains("navegar") && t.contains("flechas") {
        Some("se debe poder navegar entre meses usando las flechas de navegación")
    } else if t.contains("cerrar") && t.contains("sin seleccionar") {
        Some("el calendario debe cerrarse correctamente sin seleccionar fecha")
    } else {
        None
    }
}

fn date_selection(t: &str) -> Option<&'static str> {
    if !(t.contains("seleccionar") && t.contains("fecha")) {
        return None;
    }
    Some(if t.contains("válida") && t.contains("más de 18") {
        "se debe poder seleccionar una fecha que haga al usuario mayor de edad"
    } else if t.contains("no se puede") && t.contains("17 años") {
        "no se debe permitir seleccionar fechas que resulten en menor de edad"
    } else {
        "la selección de fecha debe funcionar correctamente"
    })
}

fn popup(t: &str) -> Option<&'static str> {
    (t.contains("popup") || t.contains("ayuda"))
        .then_some("se debe mostrar el popup de ayuda con la información correcta")
}

fn element_presence(t: &str) -> Option<&'static str> {
    (t.contains("presencia") || t.contains("elementos"))
        .then_some("todos los elementos de la página deben estar presentes y visibles")
}
