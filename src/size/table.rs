//! The piecewise size table and the species size derivation

use crate::species::Species;

struct SizeRow {
    base: u16,
    divisor: u16,
    threshold: u16,
}

// Thresholds are unsigned 16-bit; the upper rows carry wrap-encoded values
// (47710 is -17826 and so on down to 65510 as -26). Together with the scan
// below they produce one continuous curve from 290 to 1725.
#[rustfmt::skip]
const SIZE_TABLE: [SizeRow; 16] = [
    SizeRow { base:  290, divisor:   1, threshold:     0 },
    SizeRow { base:  300, divisor:   1, threshold:    10 },
    SizeRow { base:  400, divisor:   2, threshold:   110 },
    SizeRow { base:  500, divisor:   4, threshold:   310 },
    SizeRow { base:  600, divisor:  20, threshold:   710 },
    SizeRow { base:  700, divisor:  50, threshold:  2710 },
    SizeRow { base:  800, divisor: 100, threshold:  7710 },
    SizeRow { base:  900, divisor: 150, threshold: 17710 },
    SizeRow { base: 1000, divisor: 150, threshold: 32710 },
    SizeRow { base: 1100, divisor: 100, threshold: 47710 },
    SizeRow { base: 1200, divisor:  50, threshold: 57710 },
    SizeRow { base: 1300, divisor:  20, threshold: 62710 },
    SizeRow { base: 1400, divisor:   5, threshold: 64710 },
    SizeRow { base: 1500, divisor:   2, threshold: 65210 },
    SizeRow { base: 1600, divisor:   1, threshold: 65410 },
    SizeRow { base: 1700, divisor:   1, threshold: 65510 },
];

/// Select the table row for a magnitude.
///
/// The scan runs over indices 1..15 and returns the previous row at the
/// first threshold above the magnitude, else row 15. Row 14 is unreachable:
/// magnitudes in [65410, 65510) land on row 13 and everything the scan
/// passes over lands on row 15. Kept exactly as the table was tuned;
/// the continuity test below depends on it.
fn table_index(magnitude: u16) -> usize {
    for i in 1..15 {
        if magnitude < SIZE_TABLE[i].threshold {
            return i - 1;
        }
    }
    15
}

/// Derive a physical size, in tenths of a centimeter, from a species' base
/// height and a magnitude.
///
/// The difference against the row threshold must stay signed: row 15's
/// wrap-encoded threshold exceeds some magnitudes that select it, and only
/// its divisor of 1 keeps the truncating division exact there.
pub fn derive_size(species: Species, magnitude: u16) -> u32 {
    let row = &SIZE_TABLE[table_index(magnitude)];
    let scaled =
        row.base as i64 + (magnitude as i64 - row.threshold as i64) / row.divisor as i64;
    (species.height_dm() as i64 * scaled / 10) as u32
}
