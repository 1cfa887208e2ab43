use thiserror::Error;

/// Errors raised by strict-mode encoding.
///
/// Compatible-mode encoding never fails; malformed input packs to a
/// corrupted word instead, matching the reference behavior.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CpwError {
    #[error("category `{category}` has no weights")]
    EmptyCategory { category: String },
    #[error("category `{category}`: cumulative weight {sum} at index {index} exceeds one byte")]
    LaneOverflow {
        category: String,
        index: usize,
        sum: u64,
    },
    #[error("category `{category}` has {count} weights, the count lane holds at most 256")]
    TooManyTraits { category: String, count: usize },
}
