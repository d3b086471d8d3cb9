//! Classification — build a shape lattice node from one concrete value.
//!
//! Purely synchronous and recursive: recursion depth equals the structural
//! depth of the input. Circular or unbounded structures are not defended
//! against; they exhaust the call stack.

use serde_json::Value as Json;

use crate::error::{Result, ShapeError};
use crate::lattice::{Primitive, Shape};
use crate::merge::merge_shapes;
use crate::sampler::{sample, SampleStrategy};
use crate::value::Sample;

/// Infer a shape from a JSON document.
///
/// Parses the input as JSON, then classifies the decoded value. Returns an
/// error if the input is not well-formed JSON.
///
/// # Examples
///
/// ```
/// use jsonshape_core::{infer, render, SampleStrategy};
///
/// let shape = infer(r#"{"name":"Alice","scores":[95,87,92]}"#, SampleStrategy::All).unwrap();
/// assert_eq!(render(&shape), "{name: string;scores: Array<number>;}");
/// ```
pub fn infer(json: &str, strategy: SampleStrategy) -> Result<Shape> {
    let value: Json = serde_json::from_str(json)?;
    classify(&Sample::from(value), strategy)
}

/// Classify one concrete value into a shape lattice node.
///
/// - Primitive kinds produce a node with a singleton kind-tag set.
/// - Sequences are sampled per `strategy`, each candidate is classified
///   recursively, and the candidates are left-folded through the merger
///   starting from the empty shape. An empty sequence wraps the empty shape,
///   which renders distinctly as `unknown`.
/// - Plain composites classify each member recursively, in declaration
///   order.
/// - Composites with a distinguishing constructor record the constructor
///   name as an opaque nominal tag; members are not inspected.
/// - Symbols and functions are outside the recognized set and fail with
///   [`ShapeError::UnsupportedKind`].
pub fn classify(value: &Sample, strategy: SampleStrategy) -> Result<Shape> {
    match value {
        Sample::Null => Ok(Shape::simple(Primitive::Null)),
        Sample::Undefined => Ok(Shape::simple(Primitive::Undefined)),
        Sample::Bool(_) => Ok(Shape::simple(Primitive::Boolean)),
        Sample::Number(_) => Ok(Shape::simple(Primitive::Number)),
        Sample::BigInt(_) => Ok(Shape::simple(Primitive::BigInt)),
        Sample::String(_) => Ok(Shape::simple(Primitive::String)),
        Sample::Array(items) => classify_array(items, strategy),
        Sample::Object(members) => classify_object(members, strategy),
        Sample::Named(class) => Ok(Shape::named(class.clone())),
        unsupported @ (Sample::Symbol(_) | Sample::Function(_)) => {
            Err(ShapeError::UnsupportedKind {
                kind: unsupported.kind(),
                repr: unsupported.describe(),
            })
        }
    }
}

/// Fold the sampled elements of a sequence into one element shape.
fn classify_array(items: &[Sample], strategy: SampleStrategy) -> Result<Shape> {
    let mut element = Shape::empty();
    for candidate in sample(items, strategy) {
        let classified = classify(candidate, strategy)?;
        element = merge_shapes(&element, &classified);
    }
    Ok(Shape::array(element))
}

/// Classify each member of a plain composite, preserving declaration order.
fn classify_object(members: &[(String, Sample)], strategy: SampleStrategy) -> Result<Shape> {
    let mut classified = Vec::with_capacity(members.len());
    for (key, value) in members {
        classified.push((key.clone(), classify(value, strategy)?));
    }
    Ok(Shape::object(classified))
}
