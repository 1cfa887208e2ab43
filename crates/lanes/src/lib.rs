//! Byte-lane integer accumulator.
//!
//! A CPW (compact packed weight) is a single unsigned integer built out of
//! consecutive 8-bit "lanes", one packed value per lane. The integer can be
//! wider than any fixed-size machine word, so the accumulator keeps its lanes
//! as a big-endian byte vector and exposes exactly the operations the packing
//! loop needs: OR a word into the low lanes, shift left by one lane, and
//! render the result as a minimal hexadecimal string.
//!
//! # Example
//!
//! ```
//! use cpw_lanes::LaneAccumulator;
//!
//! let mut acc = LaneAccumulator::new();
//! acc.or_word(3);
//! acc.shift_lane();
//! acc.or_word(1);
//! acc.shift_lane();
//! acc.or_word(1);
//! assert_eq!(acc.to_hex(), "0x30101");
//! ```

mod accumulator;

pub use accumulator::LaneAccumulator;
