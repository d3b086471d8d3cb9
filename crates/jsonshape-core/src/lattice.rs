//! The shape lattice — the data model describing one or more simultaneously
//! possible structural shapes for a value.
//!
//! A [`Shape`] is not a tagged union: any subset of its four fields may be
//! populated at the same time. A node with none of them populated carries no
//! information and renders as `unknown`. Shapes are built bottom-up by the
//! classifier, combined pairwise by the merger, and consumed once by the
//! renderer; they are never mutated after construction.

use std::collections::BTreeSet;

/// Primitive kind tags.
///
/// Variants are declared in lexicographic order of their kind names, so the
/// derived `Ord` (and therefore `BTreeSet` iteration) is the canonical
/// rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    BigInt,
    Boolean,
    Null,
    Number,
    String,
    Undefined,
}

impl Primitive {
    /// The kind name as it appears in rendered type expressions.
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::BigInt => "bigint",
            Primitive::Boolean => "boolean",
            Primitive::Null => "null",
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Undefined => "undefined",
        }
    }
}

/// A shape lattice node.
///
/// `simples` and `instance_of` are kept in ordered sets so enumeration is
/// deterministic across runs without a render-time sort. `object` members are
/// an ordered pair list because member order is declaration order in the
/// rendered literal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shape {
    /// Primitive kind tags observed for this position.
    pub simples: BTreeSet<Primitive>,
    /// Member name to member shape, in declaration order. Keys are unique.
    pub object: Option<Vec<(String, Shape)>>,
    /// Nominal type names for values with a distinguishing constructor.
    /// Opaque: such values carry no structural members.
    pub instance_of: BTreeSet<String>,
    /// Merged element shape for sequence values. `Some(empty)` means a
    /// sequence was observed but nothing is known about its elements.
    pub array: Option<Box<Shape>>,
}

impl Shape {
    /// The empty node: no information, renders as `unknown`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A node carrying a single primitive kind tag.
    pub fn simple(kind: Primitive) -> Self {
        Self {
            simples: BTreeSet::from([kind]),
            ..Self::default()
        }
    }

    /// A node carrying a single nominal type name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            instance_of: BTreeSet::from([name.into()]),
            ..Self::default()
        }
    }

    /// A sequence node wrapping the given element shape.
    pub fn array(element: Shape) -> Self {
        Self {
            array: Some(Box::new(element)),
            ..Self::default()
        }
    }

    /// A structural node with the given members, in declaration order.
    pub fn object(members: Vec<(String, Shape)>) -> Self {
        Self {
            object: Some(members),
            ..Self::default()
        }
    }

    /// True if no field is populated.
    pub fn is_empty(&self) -> bool {
        self.simples.is_empty()
            && self.object.is_none()
            && self.instance_of.is_empty()
            && self.array.is_none()
    }
}
