//! Call-site resolution
//!
//! Turns `call_expression` nodes into [`CallSite`] values: the callee chain is
//! walked right-to-left and reversed into a dotted name, and arguments are
//! normalized into [`Argument`] variants.

use super::{descendants, significant_children};
use crate::analyzers::typescript::parser::{node_line, node_text};
use crate::core::{Argument, CallSite};
use std::collections::HashSet;
use tree_sitter::Node;

/// A callee resolved to a dotted name.
#[derive(Debug, Clone)]
pub struct ResolvedCallee<'tree> {
    pub name: String,
    /// Leftmost receiver when the chain starts at another call, e.g. the
    /// `expect(x)` in `expect(x).toBe(y)`
    pub receiver: Option<Node<'tree>>,
}

/// Resolve the callee of a call to its dotted name.
///
/// Returns `None` for computed member access, parenthesized or `new` callees and any
/// other shape that is not a plain chain.
pub fn resolve_callee<'tree>(callee: Node<'tree>, source: &str) -> Option<ResolvedCallee<'tree>> {
    let mut segments: Vec<String> = Vec::new();
    let mut receiver = None;
    let mut current = callee;

    loop {
        match current.kind() {
            "member_expression" => {
                let property = current.child_by_field_name("property")?;
                if !matches!(
                    property.kind(),
                    "property_identifier" | "private_property_identifier"
                ) {
                    return None;
                }
                segments.push(node_text(&property, source).to_string());
                current = current.child_by_field_name("object")?;
            }
            "non_null_expression" => {
                current = current.named_child(0)?;
            }
            "identifier" | "this" | "super" => {
                segments.push(node_text(&current, source).to_string());
                break;
            }
            // A call is only accepted as the receiver of a member chain
            "call_expression" if !segments.is_empty() => {
                segments.push(receiver_segment(current, source)?);
                receiver = Some(current);
                break;
            }
            _ => return None,
        }
    }

    segments.reverse();
    let name = segments.join(".");
    if name.is_empty() {
        return None;
    }

    Some(ResolvedCallee { name, receiver })
}

/// Render a receiver call as `callee(args)` from names only.
///
/// Identifier and member-chain arguments are kept, nested calls are rendered the
/// same way and anything else, literals included, becomes `…`. Classification runs
/// on the resulting name, so argument text must never leak into it.
fn receiver_segment(call: Node<'_>, source: &str) -> Option<String> {
    let callee = resolve_callee(call.child_by_field_name("function")?, source)?;
    let arguments = match call.child_by_field_name("arguments") {
        Some(list) if list.kind() == "arguments" => significant_children(list)
            .into_iter()
            .map(|arg| argument_name(arg, source))
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    };
    Some(format!("{}({arguments})", callee.name))
}

fn argument_name(node: Node<'_>, source: &str) -> String {
    const ELIDED: &str = "…";
    match node.kind() {
        "identifier" | "this" => node_text(&node, source).to_string(),
        "member_expression" | "non_null_expression" => resolve_callee(node, source).map_or_else(|| ELIDED.to_string(), |resolved| resolved.name),
        "call_expression" => receiver_segment(node, source).unwrap_or_else(|| ELIDED.to_string()),
        "await_expression" => node
            .named_child(0)
            .map_or_else(|| ELIDED.to_string(), |inner| argument_name(inner, source)),
        _ => ELIDED.to_string(),
    }
}

/// Collect every resolvable call site under `body`, in source order.
///
/// Calls that only serve as the receiver of a chained call are folded into the
/// outer call site instead of being reported on their own.
pub fn collect_call_sites(body: Node<'_>, source: &str) -> Vec<CallSite> {
    let mut absorbed: HashSet<usize> = HashSet::new();
    let mut sites = Vec::new();

    for node in descendants(body).filter(|n| n.kind() == "call_expression") {
        let resolved = node
            .child_by_field_name("function")
            .and_then(|callee| resolve_callee(callee, source));

        if let Some(receiver) = resolved.as_ref().and_then(|r| r.receiver) {
            absorbed.insert(receiver.id());
        }
        if absorbed.contains(&node.id()) {
            continue;
        }

        if let Some(resolved) = resolved {
            sites.push(CallSite::new(
                resolved.name,
                call_arguments(node, source),
                node_line(&node),
            ));
        }
    }

    sites
}

/// Arguments of a call, normalized at the tree boundary
pub fn call_arguments(call: Node<'_>, source: &str) -> Vec<Argument> {
    let Some(arguments) = call.child_by_field_name("arguments") else {
        return Vec::new();
    };
    // Tagged templates put a template string where the argument list would be
    if arguments.kind() != "arguments" {
        return Vec::new();
    }

    significant_children(arguments)
        .into_iter()
        .map(|node| to_argument(node, source))
        .collect()
}

fn to_argument(node: Node<'_>, source: &str) -> Argument {
    match node.kind() {
        "string" => Argument::String(string_literal_value(node, source)),
        "number" => Argument::Number(node_text(&node, source).to_string()),
        _ => Argument::Raw(node_text(&node, source).to_string()),
    }
}

/// Value of a `string` node with quotes removed and escapes decoded
pub fn string_literal_value(node: Node<'_>, source: &str) -> String {
    let mut value = String::new();
    // High surrogate waiting for its low half
    let mut pending: Option<(u32, &str)> = None;

    for child in (0..node.named_child_count()).filter_map(|i| node.named_child(i)) {
        let text = node_text(&child, source);
        let unit = match child.kind() {
            "escape_sequence" => utf16_unit(text),
            "string_fragment" => None,
            _ => continue,
        };

        if let Some((high, high_text)) = pending.take() {
            match unit.and_then(|low| combine_surrogates(high, low)) {
                Some(ch) => {
                    value.push(ch);
                    continue;
                }
                None => value.push_str(high_text),
            }
        }

        match (child.kind(), unit) {
            ("escape_sequence", Some(high)) if is_high_surrogate(high) => {
                pending = Some((high, text));
            }
            ("escape_sequence", _) => value.push_str(&decode_escape(text)),
            _ => value.push_str(text),
        }
    }

    if let Some((_, high_text)) = pending {
        value.push_str(high_text);
    }
    value
}

/// Code unit of a fixed-width `\uXXXX` escape
fn utf16_unit(sequence: &str) -> Option<u32> {
    let hex = sequence.strip_prefix("\\u")?;
    if hex.len() != 4 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn is_high_surrogate(unit: u32) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

fn combine_surrogates(high: u32, low: u32) -> Option<char> {
    if !(0xDC00..0xE000).contains(&low) {
        return None;
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
}

/// Decode one escape. Sequences that do not name a character are kept verbatim.
fn decode_escape(sequence: &str) -> String {
    let body = sequence.strip_prefix('\\').unwrap_or(sequence);
    match body {
        "n" => "\n".to_string(),
        "t" => "\t".to_string(),
        "r" => "\r".to_string(),
        "b" => "\u{8}".to_string(),
        "f" => "\u{c}".to_string(),
        "v" => "\u{b}".to_string(),
        "0" => "\0".to_string(),
        // Line continuation
        "\n" | "\r\n" | "\r" => String::new(),
        _ if body.len() > 1 && (body.starts_with('u') || body.starts_with('x')) => {
            let hex = body[1..].trim_start_matches('{').trim_end_matches('}');
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| sequence.to_string())
        }
        _ => body.to_string(),
    }
}
