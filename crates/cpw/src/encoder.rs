//! `CpwEncoder` — packs trait weightings into compact packed weights.
//!
//! Word layout, most significant lane first: one lane per weight holding the
//! inclusive prefix sums in reverse cumulative order (the full sum in the top
//! lane, the first weight in the lane just above the count lane), then a
//! final lane holding `weight count - 1`.

use cpw_lanes::LaneAccumulator;

use crate::error::CpwError;
use crate::TraitWeightings;

/// How to treat input the packed layout cannot represent losslessly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EncodeMode {
    /// Reproduce the reference bit behavior: oversized sums bleed into the
    /// next-significant lane, and an empty category's count lane wraps
    /// around to `0xff`.
    #[default]
    Compatible,
    /// Reject empty categories and any prefix sum above one byte before
    /// producing output.
    Strict,
}

/// Encoder from trait weightings to hexadecimal CPW strings.
///
/// # Example
///
/// ```
/// use cpw::{CpwEncoder, TraitWeightings};
///
/// let weightings = TraitWeightings::from([
///     ("background".to_string(), vec![1]),
///     ("fur".to_string(), vec![1, 2]),
/// ]);
/// let encoder = CpwEncoder::new();
/// let cpws = encoder.encode(&weightings).unwrap();
/// assert_eq!(cpws, ["0x100", "0x30101"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CpwEncoder {
    mode: EncodeMode,
}

impl CpwEncoder {
    /// Creates a compatible-mode encoder.
    pub fn new() -> Self {
        Self::with_mode(EncodeMode::Compatible)
    }

    /// Creates a strict-mode encoder.
    pub fn strict() -> Self {
        Self::with_mode(EncodeMode::Strict)
    }

    pub fn with_mode(mode: EncodeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> EncodeMode {
        self.mode
    }

    /// Encodes every category, one CPW per category, in the mapping's
    /// iteration order.
    ///
    /// Categories are independent; in compatible mode this never fails.
    pub fn encode(&self, weightings: &TraitWeightings) -> Result<Vec<String>, CpwError> {
        let mut cpws = Vec::with_capacity(weightings.len());
        for (category, weights) in weightings {
            cpws.push(self.encode_category(category, weights)?);
        }
        Ok(cpws)
    }

    /// Encodes a single category. `category` is used only for error
    /// reporting in strict mode.
    pub fn encode_category(&self, category: &str, weights: &[u64]) -> Result<String, CpwError> {
        if self.mode == EncodeMode::Strict {
            check_category(category, weights)?;
        }
        Ok(pack_category(weights))
    }
}

/// Encodes a weightings mapping in compatible mode.
///
/// Convenience form of [`CpwEncoder`] for callers that want the reference
/// behavior and no error path.
///
/// # Example
///
/// ```
/// use cpw::{encode, TraitWeightings};
///
/// let weightings = TraitWeightings::from([("hat".to_string(), vec![2, 3, 5])]);
/// assert_eq!(encode(&weightings), ["0xa050202"]);
/// ```
pub fn encode(weightings: &TraitWeightings) -> Vec<String> {
    weightings
        .values()
        .map(|weights| pack_category(weights))
        .collect()
}

fn check_category(category: &str, weights: &[u64]) -> Result<(), CpwError> {
    if weights.is_empty() {
        return Err(CpwError::EmptyCategory {
            category: category.to_string(),
        });
    }
    if weights.len() > 256 {
        return Err(CpwError::TooManyTraits {
            category: category.to_string(),
            count: weights.len(),
        });
    }
    let mut sum: u64 = 0;
    for (index, &weight) in weights.iter().enumerate() {
        sum = sum.saturating_add(weight);
        if sum > 0xff {
            return Err(CpwError::LaneOverflow {
                category: category.to_string(),
                index,
                sum,
            });
        }
    }
    Ok(())
}

/// The packing loop itself: reversed prefix sums OR-shifted into byte lanes,
/// then the count lane.
fn pack_category(weights: &[u64]) -> String {
    let mut prefix = Vec::with_capacity(weights.len());
    let mut sum: u64 = 0;
    for &weight in weights {
        sum = sum.wrapping_add(weight);
        prefix.push(sum);
    }

    let mut acc = LaneAccumulator::new();
    for &value in prefix.iter().rev() {
        acc.or_word(value);
        acc.shift_lane();
    }
    match weights.len() {
        // `0 - 1` wraps on the unsigned count lane.
        0 => acc.or_low_byte(0xff),
        n => acc.or_word((n - 1) as u64),
    }
    acc.to_hex()
}
