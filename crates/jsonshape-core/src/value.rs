//! The decoded input value model.
//!
//! Classification dispatches on an explicit tagged enum rather than host
//! type introspection. [`Sample`] covers everything JSON can encode plus the
//! richer kinds a programmatic caller might hand us: `undefined`, bigints,
//! symbols, functions, and composites with a distinguishing constructor.
//! JSON decoding only ever produces the first group.

use serde_json::Value as Json;

/// One concrete observed value, ready for classification.
///
/// Objects keep their members as a `Vec<(String, Sample)>` to maintain
/// insertion order without depending on `IndexMap` — member order is
/// declaration order in the rendered type.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Null,
    Undefined,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    /// A symbol, carrying its description. Outside the classifier's
    /// recognized set.
    Symbol(String),
    /// A function, carrying its name. Outside the classifier's recognized
    /// set.
    Function(String),
    Array(Vec<Sample>),
    /// Key-value pairs in insertion order. A plain-shaped composite with no
    /// distinguishing constructor.
    Object(Vec<(String, Sample)>),
    /// A composite with a distinguishing constructor, carrying the
    /// constructor's name. Treated as an opaque nominal type; members are
    /// never inspected.
    Named(String),
}

impl Sample {
    /// The runtime kind name, as used in diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Sample::Null => "null",
            Sample::Undefined => "undefined",
            Sample::Bool(_) => "boolean",
            Sample::Number(_) => "number",
            Sample::BigInt(_) => "bigint",
            Sample::String(_) => "string",
            Sample::Symbol(_) => "symbol",
            Sample::Function(_) => "function",
            Sample::Array(_) => "array",
            Sample::Object(_) => "object",
            Sample::Named(_) => "object",
        }
    }

    /// Best-effort snapshot of the value for diagnostics. Not a faithful
    /// serialization; composites are summarized rather than walked.
    pub fn describe(&self) -> String {
        match self {
            Sample::Null => "null".to_string(),
            Sample::Undefined => "undefined".to_string(),
            Sample::Bool(b) => b.to_string(),
            Sample::Number(n) => n.to_string(),
            Sample::BigInt(n) => format!("{n}n"),
            Sample::String(s) => format!("{s:?}"),
            Sample::Symbol(desc) => format!("Symbol({desc})"),
            Sample::Function(name) => format!("function {name}"),
            Sample::Array(items) => format!("array of {} elements", items.len()),
            Sample::Object(members) => format!("object with {} members", members.len()),
            Sample::Named(class) => format!("{class} instance"),
        }
    }
}

impl From<Json> for Sample {
    fn from(value: Json) -> Self {
        match value {
            Json::Null => Sample::Null,
            Json::Bool(b) => Sample::Bool(b),
            // serde_json numbers are always representable as f64 (possibly
            // with rounding for large u64); the payload is never inspected
            // by classification, only the kind tag.
            Json::Number(n) => Sample::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Sample::String(s),
            Json::Array(items) => Sample::Array(items.into_iter().map(Sample::from).collect()),
            // Relies on serde_json's `preserve_order` feature: the map
            // iterates in document order, which becomes declaration order.
            Json::Object(map) => {
                Sample::Object(map.into_iter().map(|(k, v)| (k, Sample::from(v))).collect())
            }
        }
    }
}
