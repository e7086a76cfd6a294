//! The active roster and per-creature attribute accessors

use serde::{Deserialize, Serialize};

use crate::core::types::StatVariation;
use crate::species::Species;

/// Number of slots in the active roster.
pub const PARTY_SIZE: usize = 6;

/// Boolean ribbon attributes a creature can carry, independent of species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RibbonAttr {
    Marine,
    Land,
    Sky,
    Country,
    National,
    Earth,
    World,
}

impl RibbonAttr {
    fn bit(self) -> u8 {
        match self {
            RibbonAttr::Marine => 1 << 0,
            RibbonAttr::Land => 1 << 1,
            RibbonAttr::Sky => 1 << 2,
            RibbonAttr::Country => 1 << 3,
            RibbonAttr::National => 1 << 4,
            RibbonAttr::Earth => 1 << 5,
            RibbonAttr::World => 1 << 6,
        }
    }
}

/// One creature in the roster.
///
/// Everything the size and ribbon paths read lives here: species identity,
/// the 32-bit personality value, the six variation stats, and the egg flag.
/// An empty party slot is a default creature with `Species::None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Creature {
    pub species: Species,
    pub personality: u32,
    pub stats: StatVariation,
    pub is_egg: bool,
    ribbons: u8,
}

impl Creature {
    pub fn new(species: Species, personality: u32, stats: StatVariation) -> Self {
        Self {
            species,
            personality,
            stats,
            is_egg: false,
            ribbons: 0,
        }
    }

    pub fn egg(species: Species, personality: u32, stats: StatVariation) -> Self {
        Self {
            is_egg: true,
            ..Self::new(species, personality, stats)
        }
    }

    pub fn has_ribbon(&self, attr: RibbonAttr) -> bool {
        self.ribbons & attr.bit() != 0
    }

    pub fn set_ribbon(&mut self, attr: RibbonAttr) {
        self.ribbons |= attr.bit();
    }
}

/// The player's active roster, a fixed block of six slots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    slots: [Creature; PARTY_SIZE],
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a creature by party slot. Out-of-range slots return `None`;
    /// an in-range empty slot returns the placeholder `Species::None`
    /// creature, as the save data does.
    pub fn get(&self, slot: usize) -> Option<&Creature> {
        self.slots.get(slot)
    }

    pub fn set(&mut self, slot: usize, creature: Creature) {
        self.slots[slot] = creature;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.slots.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_party_slots_hold_no_species() {
        let party = Party::new();
        for slot in 0..PARTY_SIZE {
            assert_eq!(party.get(slot).unwrap().species, Species::None);
        }
    }

    #[test]
    fn test_out_of_range_slot_is_none() {
        let party = Party::new();
        assert!(party.get(PARTY_SIZE).is_none());
        assert!(party.get(200).is_none());
    }

    #[test]
    fn test_ribbon_bits_are_independent() {
        let mut creature = Creature::new(Species::Thornling, 0, StatVariation::default());
        assert!(!creature.has_ribbon(RibbonAttr::Marine));
        creature.set_ribbon(RibbonAttr::Marine);
        creature.set_ribbon(RibbonAttr::World);
        assert!(creature.has_ribbon(RibbonAttr::Marine));
        assert!(creature.has_ribbon(RibbonAttr::World));
        assert!(!creature.has_ribbon(RibbonAttr::Land));
    }
}
