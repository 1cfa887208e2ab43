//! Arbitrary-width accumulator over 8-bit lanes.

/// An unsigned integer accumulator addressed in 8-bit lanes.
///
/// Lanes are stored most significant first. The vector never carries a
/// leading zero lane, so an empty vector represents the value zero and the
/// rendered hexadecimal form is always minimal.
///
/// OR-ing a word whose value does not fit the lanes it lands in deliberately
/// bleeds into the next-significant lane, matching plain integer `|`/`<<`
/// arithmetic. Callers wanting range safety must check before packing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaneAccumulator {
    lanes: Vec<u8>,
}

impl LaneAccumulator {
    /// Creates an accumulator holding the value zero.
    pub fn new() -> Self {
        Self { lanes: Vec::new() }
    }

    /// Returns `true` if the accumulated value is zero.
    pub fn is_zero(&self) -> bool {
        self.lanes.is_empty()
    }

    /// The lanes of the accumulated value, most significant first.
    ///
    /// Empty for the value zero; the first lane is never zero otherwise.
    pub fn lanes(&self) -> &[u8] {
        &self.lanes
    }

    /// Bitwise-ORs `value` into the least significant lanes, widening at the
    /// most significant end if `value` needs more lanes than are present.
    pub fn or_word(&mut self, value: u64) {
        let needed = (8 - value.leading_zeros() as usize / 8).max(self.lanes.len());
        if needed > self.lanes.len() {
            let mut widened = vec![0u8; needed - self.lanes.len()];
            widened.extend_from_slice(&self.lanes);
            self.lanes = widened;
        }
        let mut v = value;
        let mut i = self.lanes.len();
        while v != 0 {
            i -= 1;
            self.lanes[i] |= (v & 0xff) as u8;
            v >>= 8;
        }
    }

    /// Bitwise-ORs a single byte into the least significant lane.
    pub fn or_low_byte(&mut self, byte: u8) {
        if byte != 0 {
            if self.lanes.is_empty() {
                self.lanes.push(0);
            }
            let last = self.lanes.len() - 1;
            self.lanes[last] |= byte;
        }
    }

    /// Shifts the accumulated value left by one lane (8 bits).
    pub fn shift_lane(&mut self) {
        // Zero shifted by any amount stays zero (and stays lane-free).
        if !self.lanes.is_empty() {
            self.lanes.push(0);
        }
    }

    /// Renders the value as lowercase hexadecimal with a `0x` prefix.
    ///
    /// No zero-padding beyond the magnitude of the value itself; zero
    /// renders as `0x0`.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + self.lanes.len() * 2);
        out.push_str("0x");
        match self.lanes.split_first() {
            None => out.push('0'),
            Some((first, rest)) => {
                out.push_str(&format!("{first:x}"));
                for lane in rest {
                    out.push_str(&format!("{lane:02x}"));
                }
            }
        }
        out
    }
}
