//! Species identities and their fixed display data

use serde::{Deserialize, Serialize};

/// Species enumeration
///
/// `None` marks an empty party slot; everything else is a real species with
/// an entry in the display-data table below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    #[default]
    None,
    Thornling,
    Mirefin,
    Bramblebear,
    Cindertail,
    Gloomwing,
}

impl Species {
    /// Player-facing species name
    pub fn name(&self) -> &'static str {
        match self {
            Species::None => "",
            Species::Thornling => "Thornling",
            Species::Mirefin => "Mirefin",
            Species::Bramblebear => "Bramblebear",
            Species::Cindertail => "Cindertail",
            Species::Gloomwing => "Gloomwing",
        }
    }

    /// Base height in decimeters, from the species data table.
    ///
    /// Feeds the size derivation; a species' record sizes scale linearly
    /// with this value.
    pub fn height_dm(&self) -> u32 {
        match self {
            Species::None => 0,
            Species::Thornling => 5,
            Species::Mirefin => 5,
            Species::Bramblebear => 18,
            Species::Cindertail => 9,
            Species::Gloomwing => 12,
        }
    }
}
