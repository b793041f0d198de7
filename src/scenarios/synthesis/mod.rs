//! Description synthesis
//!
//! Turns a classified call into a Spanish sentence. Actions and expectations each
//! have their own ordered [`Cascade`] of rules; the first rule whose predicate
//! matches renders the sentence. Both cascades end in a catch-all so the result is
//! never empty, except for the expectation suppression rule which deliberately
//! renders `""`.
//!
//! The cascades are built once per process and only read afterwards, so synthesis
//! can run from any number of threads.

pub mod actions;
pub mod expectations;
pub mod fallback;

use crate::core::Argument;
use once_cell::sync::Lazy;

/// Inputs visible to rule predicates and templates
#[derive(Debug, Clone)]
pub struct CallContext<'a> {
    pub name: &'a str,
    pub lower: String,
    pub arguments: &'a [Argument],
}

impl<'a> CallContext<'a> {
    pub fn new(name: &'a str, arguments: &'a [Argument]) -> Self {
        Self {
            name,
            lower: name.to_lowercase(),
            arguments,
        }
    }

    /// First argument with every `'` and `"` removed, if present
    pub fn first_arg(&self) -> Option<String> {
        self.arguments
            .first()
            .map(|arg| arg.text().replace(['\'', '"'], ""))
    }

    /// First argument exactly as decoded, quotes kept
    pub fn literal(&self) -> Option<&'a str> {
        self.arguments.first().map(Argument::text)
    }

    /// First argument, or `""` when the call has none
    pub fn value(&self) -> String {
        self.first_arg().unwrap_or_default()
    }

    /// First argument when present and non-empty, else `default`
    pub fn value_or(&self, default: &str) -> String {
        self.first_arg()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    /// Lower-cased name contains `needle`
    pub fn has(&self, needle: &str) -> bool {
        self.lower.contains(needle)
    }

    pub fn has_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.lower.contains(n))
    }

    /// Original-case name contains `needle`
    pub fn exact(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }
}

/// Sentence produced by a matching rule
#[derive(Clone, Copy)]
pub enum Template {
    Fixed(&'static str),
    Render(fn(&CallContext<'_>) -> String),
}

impl Template {
    pub fn render(&self, ctx: &CallContext<'_>) -> String {
        match self {
            Template::Fixed(text) => (*text).to_string(),
            Template::Render(render) => render(ctx),
        }
    }
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&CallContext<'_>) -> bool,
    pub template: Template,
}

impl Rule {
    pub const fn fixed(
        name: &'static str,
        matches: fn(&CallContext<'_>) -> bool,
        text: &'static str,
    ) -> Self {
        Self {
            name,
            matches,
            template: Template::Fixed(text),
        }
    }

    pub const fn render(
        name: &'static str,
        matches: fn(&CallContext<'_>) -> bool,
        render: fn(&CallContext<'_>) -> String,
    ) -> Self {
        Self {
            name,
            matches,
            template: Template::Render(render),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Ordered, first-match-wins rule list
pub struct Cascade {
    rules: Vec<Rule>,
    fallback: fn(&CallContext<'_>) -> String,
}

impl Cascade {
    pub fn new(rules: Vec<Rule>, fallback: fn(&CallContext<'_>) -> String) -> Self {
        Self { rules, fallback }
    }

    pub fn synthesize(&self, ctx: &CallContext<'_>) -> String {
        match self.rules.iter().find(|rule| (rule.matches)(ctx)) {
            Some(rule) => rule.template.render(ctx),
            None => (self.fallback)(ctx),
        }
    }

    /// Name of the winning rule, `None` when the fallback applies
    pub fn matching_rule(&self, ctx: &CallContext<'_>) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| (rule.matches)(ctx))
            .map(|rule| rule.name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for Cascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cascade")
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

static ACTIONS: Lazy<Cascade> =
    Lazy::new(|| Cascade::new(actions::rules(), fallback::describe_generic_action));

static EXPECTATIONS: Lazy<Cascade> = Lazy::new(|| {
    Cascade::new(
        expectations::rules(),
        expectations::describe_generic_expectation,
    )
});

pub fn action_cascade() -> &'static Cascade {
    &ACTIONS
}

pub fn expectation_cascade() -> &'static Cascade {
    &EXPECTATIONS
}

/// Sentence for an action call ("When"/"Given" steps). Never empty.
pub fn synthesize_action(name: &str, arguments: &[Argument]) -> String {
    ACTIONS.synthesize(&CallContext::new(name, arguments))
}

/// Sentence for an expectation call ("Then" steps).
///
/// Returns `""` for assertions on documentation tooling itself, which must not
/// become a step.
pub fn synthesize_expectation(name: &str, arguments: &[Argument]) -> String {
    EXPECTATIONS.synthesize(&CallContext::new(name, arguments))
}
