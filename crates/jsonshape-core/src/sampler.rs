//! Array sampling — select a bounded subset of representative elements.
//!
//! Classifying every element of a large homogeneous array is wasted work;
//! sampling trades accuracy for bounded cost. The strategy is chosen once
//! per top-level invocation and applies uniformly at every nesting depth.

use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// Which elements of a sequence are classified and merged to represent the
/// whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStrategy {
    /// Element at index 0 only.
    First,
    /// Elements at index 0 and the last index.
    FirstLast,
    /// Elements at index 0, the midpoint, and the last index.
    FirstMidLast,
    /// Every element, in order.
    All,
}

impl SampleStrategy {
    /// The token form accepted on the command line.
    pub const fn token(self) -> &'static str {
        match self {
            SampleStrategy::First => "first",
            SampleStrategy::FirstLast => "first+last",
            SampleStrategy::FirstMidLast => "first+mid+last",
            SampleStrategy::All => "all",
        }
    }
}

impl fmt::Display for SampleStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for SampleStrategy {
    type Err = ShapeError;

    /// Parse a strategy token. This is the API boundary where unrecognized
    /// tokens are rejected; past this point the strategy is an enum and an
    /// invalid value cannot reach the sampler.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(SampleStrategy::First),
            "first+last" => Ok(SampleStrategy::FirstLast),
            "first+mid+last" => Ok(SampleStrategy::FirstMidLast),
            "all" => Ok(SampleStrategy::All),
            other => Err(ShapeError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Select the ordered subsequence of elements to classify.
///
/// An empty input yields an empty selection under every strategy. Index
/// lists are non-decreasing, so coincident endpoints (e.g. `first+last` on a
/// one-element sequence) collapse by adjacent dedup.
pub fn sample<T>(items: &[T], strategy: SampleStrategy) -> Vec<&T> {
    if items.is_empty() {
        return Vec::new();
    }
    let last = items.len() - 1;
    let indices: Vec<usize> = match strategy {
        SampleStrategy::First => vec![0],
        SampleStrategy::FirstLast => vec![0, last],
        SampleStrategy::FirstMidLast => vec![0, items.len() / 2, last],
        SampleStrategy::All => (0..items.len()).collect(),
    };

    let mut selected = Vec::with_capacity(indices.len());
    let mut previous = None;
    for index in indices {
        if previous != Some(index) {
            selected.push(&items[index]);
            previous = Some(index);
        }
    }
    selected
}
