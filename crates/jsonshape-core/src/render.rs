//! Rendering — turn a shape lattice node back into TypeScript type syntax.
//!
//! Parts are emitted in a fixed order and joined with ` | `: the element
//! shape first (`Array<…>`), then nominal names, then primitive kind names,
//! then the structural literal. Set-valued fields iterate in canonical
//! (lexicographic) order, so output is reproducible across runs. A node with
//! no parts renders as `unknown`.

use crate::lattice::Shape;

/// Render a shape as a compact type expression.
///
/// # Examples
///
/// ```
/// use jsonshape_core::{render, Shape};
///
/// assert_eq!(render(&Shape::empty()), "unknown");
/// assert_eq!(render(&Shape::array(Shape::empty())), "Array<unknown>");
/// ```
pub fn render(shape: &Shape) -> String {
    let mut parts = collect_parts(shape);
    if let Some(members) = &shape.object {
        let mut literal = String::from("{");
        for (key, member) in members {
            literal.push_str(&render_key(key));
            literal.push_str(": ");
            literal.push_str(&render(member));
            literal.push(';');
        }
        literal.push('}');
        parts.push(literal);
    }
    join_parts(parts)
}

/// Render a shape with object literals broken across indented lines, one
/// member per line, two spaces per depth. Union parts stay on one line.
/// This is the formatter the driver applies to the final declaration.
pub fn render_pretty(shape: &Shape) -> String {
    render_at(shape, 0)
}

fn render_at(shape: &Shape, depth: usize) -> String {
    let mut parts = collect_parts_at(shape, depth);
    if let Some(members) = &shape.object {
        if members.is_empty() {
            parts.push("{}".to_string());
        } else {
            let member_indent = make_indent(depth + 1);
            let mut literal = String::from("{\n");
            for (key, member) in members {
                literal.push_str(&member_indent);
                literal.push_str(&render_key(key));
                literal.push_str(": ");
                literal.push_str(&render_at(member, depth + 1));
                literal.push_str(";\n");
            }
            literal.push_str(&make_indent(depth));
            literal.push('}');
            parts.push(literal);
        }
    }
    join_parts(parts)
}

/// The non-object parts, in order: element shape, nominal names, kind names.
fn collect_parts(shape: &Shape) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(element) = &shape.array {
        parts.push(format!("Array<{}>", render(element)));
    }
    for name in &shape.instance_of {
        parts.push(name.clone());
    }
    for kind in &shape.simples {
        parts.push(kind.name().to_string());
    }
    parts
}

/// Same as [`collect_parts`], but element shapes render pretty at the given
/// depth so nested object literals keep indenting.
fn collect_parts_at(shape: &Shape, depth: usize) -> Vec<String> {
    let mut parts = Vec::new();
    if let Some(element) = &shape.array {
        parts.push(format!("Array<{}>", render_at(element, depth)));
    }
    for name in &shape.instance_of {
        parts.push(name.clone());
    }
    for kind in &shape.simples {
        parts.push(kind.name().to_string());
    }
    parts
}

/// Generate a 2-space-per-level indentation string.
fn make_indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn join_parts(parts: Vec<String>) -> String {
    if parts.is_empty() {
        "unknown".to_string()
    } else {
        parts.join(" | ")
    }
}

/// Render a member name. Names matching `^[A-Za-z_][A-Za-z0-9_]*$` are
/// emitted bare; all others as a quoted, bracket-indexed key with escapes.
fn render_key(key: &str) -> String {
    if is_identifier(key) {
        return key.to_string();
    }
    let mut quoted = String::with_capacity(key.len() + 4);
    quoted.push_str("[\"");
    for ch in key.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(ch),
        }
    }
    quoted.push_str("\"]");
    quoted
}

/// Test a member name against the bare-identifier pattern
/// `^[A-Za-z_][A-Za-z0-9_]*$`.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
