//! Generic action fallback: derive a sentence from the identifier itself.

use super::CallContext;

const PAGE_OBJECT_PREFIXES: &[&str] = &["homePage.", "loginPage.", "registerPage.", "page."];
const HELPER_PREFIXES: &[&str] = &["CommonTestSteps.", "DateHelper."];

/// Common method names with a hand-written phrase
const KNOWN_METHODS: &[(&str, &str)] = &[
    ("openDatePicker", "abre el calendario"),
    (
        "validateEnabledDays",
        "verifica los días habilitados para mayor de edad",
    ),
    (
        "validateMonthRestrictions",
        "verifica que no se puede navegar a meses restringidos",
    ),
    (
        "validateValidDateSelection",
        "verifica que se puede seleccionar una fecha válida",
    ),
    (
        "validateInvalidDateRestriction",
        "verifica que no se puede seleccionar una fecha inválida",
    ),
    ("expectCalendarVisible", "verifica que el calendario está visible"),
    ("expectCalendarHidden", "verifica que el calendario está oculto"),
    ("clickDate", "selecciona una fecha"),
    ("clickNextMonth", "navega al mes siguiente"),
    ("clickPrevMonth", "navega al mes anterior"),
    (
        "clickCurrentDateHeader",
        "hace clic en el encabezado de fecha actual",
    ),
    ("clearDate", "limpia la fecha seleccionada"),
    ("selectDate", "selecciona una fecha"),
];

const WORD_TRANSLATIONS: &[(&str, &str)] = &[
    ("get", "obtiene"),
    ("set", "establece"),
    ("check", "verifica"),
    ("verify", "verifica"),
    ("validate", "valida"),
    ("ensure", "asegura"),
    ("test", "prueba"),
    ("assert", "confirma"),
    ("expect", "verifica que"),
    ("click", "hace clic en"),
    ("fill", "completa"),
    ("type", "escribe en"),
    ("select", "selecciona"),
    ("choose", "elige"),
    ("toggle", "alterna"),
    ("enable", "habilita"),
    ("disable", "deshabilita"),
    ("show", "muestra"),
    ("hide", "oculta"),
    ("open", "abre"),
    ("close", "cierra"),
    ("submit", "envía"),
    ("cancel", "cancela"),
    ("confirm", "confirma"),
    ("accept", "acepta"),
    ("reject", "rechaza"),
    ("date", "fecha"),
    ("picker", "selector"),
    ("calendar", "calendario"),
    ("enabled", "habilitados"),
    ("disabled", "deshabilitados"),
    ("days", "días"),
    ("months", "meses"),
    ("years", "años"),
];

/// Last tier of the action cascade. Never returns an empty string.
pub fn describe_generic_action(c: &CallContext<'_>) -> String {
    let method = strip_known_prefixes(c.name);

    if let Some((_, phrase)) = KNOWN_METHODS.iter().find(|(name, _)| *name == method) {
        return format!("el usuario {phrase}");
    }

    let phrase = split_identifier(method)
        .iter()
        .map(|word| translate(word))
        .collect::<Vec<_>>()
        .join(" ");

    if phrase.is_empty() {
        return "el usuario realiza una acción".to_string();
    }

    match c.first_arg().filter(|arg| !arg.is_empty()) {
        Some(arg) => format!("el usuario {phrase} con \"{arg}\""),
        None => format!("el usuario {phrase}"),
    }
}

/// Remove at most one page-object prefix, then one helper prefix of each kind
fn strip_known_prefixes(name: &str) -> &str {
    let mut method = PAGE_OBJECT_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name);
    for prefix in HELPER_PREFIXES {
        method = method.strip_prefix(prefix).unwrap_or(method);
    }
    method
}

/// Split on camel-case boundaries, `.` and `_`; words come back lower-cased
pub fn split_identifier(identifier: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in identifier.chars() {
        if ch == '.' || ch == '_' || ch.is_whitespace() {
            flush(&mut words, &mut current);
        } else if ch.is_uppercase() {
            flush(&mut words, &mut current);
            current.extend(ch.to_lowercase());
        } else {
            current.push(ch);
        }
    }
    flush(&mut words, &mut current);

    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn translate(word: &str) -> String {
    WORD_TRANSLATIONS
        .iter()
        .find(|(english, _)| *english == word)
        .map(|(_, spanish)| (*spanish).to_string())
        .unwrap_or_else(|| word.to_string())
}
