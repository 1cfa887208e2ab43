//! Compact packed weight (CPW) encoding.
//!
//! A trait-selection table maps category names (background, fur, hat, …) to
//! ordered lists of integer weights, one weight per discrete trait value.
//! Each category packs into a single integer: its inclusive prefix sums, one
//! per byte lane from most significant down, followed by a low count lane
//! holding `weight count - 1`. The packed words are rendered as hexadecimal
//! strings, one per category, in the mapping's iteration order.
//!
//! The mapping type is an [`IndexMap`](indexmap::IndexMap) so that the
//! order-preservation contract is visible in the type rather than implied by
//! the container.
//!
//! # Example
//!
//! ```
//! use cpw::{encode, TraitWeightings};
//!
//! let weightings = TraitWeightings::from([
//!     ("background".to_string(), vec![1]),
//!     ("fur".to_string(), vec![1, 2]),
//! ]);
//! assert_eq!(encode(&weightings), ["0x100", "0x30101"]);
//! ```

pub mod cli;
mod encoder;
mod error;

pub use encoder::{encode, CpwEncoder, EncodeMode};
pub use error::CpwError;

/// A trait-selection table: category name → ordered trait weights.
///
/// Insertion order determines output order.
pub type TraitWeightings = indexmap::IndexMap<String, Vec<u64>>;
