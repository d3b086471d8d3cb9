//! Pairwise union of shape lattice nodes.
//!
//! The merge is a pure function over two optional nodes: operands are never
//! mutated, the result is always a fresh node. Absence means different
//! things in the two merge contexts:
//!
//! - At the **top level** (and when folding sampled array elements), an
//!   absent operand is a true identity element: the other operand passes
//!   through unchanged.
//! - For **object members**, a key observed on only one side merges against
//!   the constant `undefined` shape instead of passing through. This models
//!   "the field may be absent in some samples" as an explicit optional
//!   alternative in the member's type (see DESIGN.md).
//!
//! Both contexts are commutative (up to member order) and associative under
//! repeated folding.

use crate::lattice::{Primitive, Shape};

/// Merge two optional shapes. One absent operand is the identity; two
/// present operands merge field by field.
///
/// # Examples
///
/// ```
/// use jsonshape_core::{merge, Primitive, Shape};
///
/// let a = Shape::simple(Primitive::Number);
/// let b = Shape::simple(Primitive::String);
/// let merged = merge(Some(&a), Some(&b)).unwrap();
/// assert_eq!(jsonshape_core::render(&merged), "number | string");
///
/// assert_eq!(merge(Some(&a), None), Some(a.clone()));
/// assert_eq!(merge(None, None), None);
/// ```
pub fn merge(a: Option<&Shape>, b: Option<&Shape>) -> Option<Shape> {
    match (a, b) {
        (None, None) => None,
        (Some(present), None) | (None, Some(present)) => Some(present.clone()),
        (Some(a), Some(b)) => Some(merge_shapes(a, b)),
    }
}

/// Field-by-field union of two present nodes: kind-tag and nominal-name sets
/// union, element shapes merge recursively, member lists merge with
/// undefined-injection for one-sided keys.
pub(crate) fn merge_shapes(a: &Shape, b: &Shape) -> Shape {
    Shape {
        simples: a.simples.union(&b.simples).copied().collect(),
        instance_of: a.instance_of.union(&b.instance_of).cloned().collect(),
        array: match (&a.array, &b.array) {
            (None, None) => None,
            (Some(element), None) | (None, Some(element)) => Some(element.clone()),
            (Some(a), Some(b)) => Some(Box::new(merge_shapes(a, b))),
        },
        object: match (&a.object, &b.object) {
            (None, None) => None,
            (Some(members), None) | (None, Some(members)) => Some(members.clone()),
            (Some(a), Some(b)) => Some(merge_members(a, b)),
        },
    }
}

/// Merge two member lists over the union of their keys: the first operand's
/// keys in order, then the second's novel keys in order. A key missing on
/// one side merges against the `undefined` shape.
fn merge_members(a: &[(String, Shape)], b: &[(String, Shape)]) -> Vec<(String, Shape)> {
    let undefined = Shape::simple(Primitive::Undefined);
    let mut merged = Vec::with_capacity(a.len() + b.len());

    for (key, shape_a) in a {
        let combined = match b.iter().find(|(other, _)| other == key) {
            Some((_, shape_b)) => merge_shapes(shape_a, shape_b),
            None => merge_shapes(shape_a, &undefined),
        };
        merged.push((key.clone(), combined));
    }
    for (key, shape_b) in b {
        if !a.iter().any(|(other, _)| other == key) {
            merged.push((key.clone(), merge_shapes(&undefined, shape_b)));
        }
    }
    merged
}
