//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Sentinel value for the selected-party-slot special variable meaning
/// "no creature selected / user cancelled".
pub const SELECTION_NONE: u16 = 0xFF;

/// Measurement system chosen in the save options.
///
/// The save layout stores this as a single bit; zero is imperial, which is
/// also the default for a fresh save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

/// The six per-individual variation stats, each in 0..=15.
///
/// These are rolled once when a creature is generated and never change.
/// Callers keep them in range; the size hash masks to 4 bits regardless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatVariation {
    pub vitality: u8,
    pub might: u8,
    pub guard: u8,
    pub speed: u8,
    pub focus: u8,
    pub spirit: u8,
}

impl StatVariation {
    pub fn new(vitality: u8, might: u8, guard: u8, speed: u8, focus: u8, spirit: u8) -> Self {
        Self {
            vitality,
            might,
            guard,
            speed,
            focus,
            spirit,
        }
    }
}
