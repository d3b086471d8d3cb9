//! # jsonshape-core
//!
//! Infer a structural type description from sampled JSON values and render
//! it as a TypeScript-style type expression.
//!
//! The engine is a small lattice: classifying one concrete value produces a
//! [`Shape`] describing it, merging two shapes unions everything they
//! describe, and rendering turns a shape back into type syntax. Arrays are
//! sampled (see [`SampleStrategy`]) and their candidates folded through the
//! merger, so one shape can summarize many observed values.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonshape_core::{infer, render, SampleStrategy};
//!
//! let shape = infer(r#"[{"id":1},{"id":2,"tag":"a"}]"#, SampleStrategy::All).unwrap();
//! assert_eq!(render(&shape), "Array<{id: number;tag: string | undefined;}>");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the decoded input model ([`Sample`])
//! - [`lattice`] — the [`Shape`] node and [`Primitive`] kind tags
//! - [`sampler`] — array sampling strategies
//! - [`mod@classify`] — value → shape classification (`classify`, `infer`)
//! - [`mod@merge`] — pairwise shape union
//! - [`mod@render`] — shape → type syntax (`render`, `render_pretty`)
//! - [`error`] — failure taxonomy

pub mod classify;
pub mod error;
pub mod lattice;
pub mod merge;
pub mod render;
pub mod sampler;
pub mod value;

pub use classify::{classify, infer};
pub use error::ShapeError;
pub use lattice::{Primitive, Shape};
pub use merge::merge;
pub use render::{render, render_pretty};
pub use sampler::{sample, SampleStrategy};
pub use value::Sample;
