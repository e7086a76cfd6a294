//! The persistent save-data store, behind a narrow read/write surface
//!
//! Scripted events address persistent state by `VarId`/`FlagId` key rather
//! than poking save-block fields directly. The whole store is serializable
//! so tests and the demo runner can snapshot it to JSON.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{RecordError, Result};
use crate::core::types::UnitSystem;
use crate::ribbon::MAX_GIFT_RIBBON;

/// Number of persistent gift-ribbon slots in the save data.
pub const GIFT_RIBBON_SLOTS: usize = 11;

/// Named 16-bit persistent variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarId {
    ThornlingSizeRecord,
    MirefinSizeRecord,
}

/// Named persistent boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagId {
    /// The player has received at least one gift ribbon; read elsewhere to
    /// surface a one-time UI notification.
    RibbonObtained,
}

/// In-memory image of the externally-owned save data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveData {
    vars: HashMap<VarId, u16>,
    flags: HashSet<FlagId>,
    pub unit_system: UnitSystem,
    pub player_name: String,
    pub gift_ribbons: [u8; GIFT_RIBBON_SLOTS],
}

impl SaveData {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Read a persistent variable. Unwritten variables read as zero, the
    /// same as a freshly cleared save.
    pub fn var(&self, id: VarId) -> u16 {
        self.vars.get(&id).copied().unwrap_or(0)
    }

    pub fn set_var(&mut self, id: VarId, value: u16) {
        self.vars.insert(id, value);
    }

    pub fn flag(&self, id: FlagId) -> bool {
        self.flags.contains(&id)
    }

    pub fn set_flag(&mut self, id: FlagId) {
        self.flags.insert(id);
    }

    /// Serialize the store to a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a store from a JSON snapshot, rejecting out-of-range ribbon
    /// values that a well-formed save can never contain.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: SaveData = serde_json::from_str(json)?;
        if let Some(bad) = data.gift_ribbons.iter().find(|&&v| v > MAX_GIFT_RIBBON) {
            return Err(RecordError::InvalidSnapshot(format!(
                "gift ribbon value {} exceeds maximum {}",
                bad, MAX_GIFT_RIBBON
            )));
        }
        Ok(data)
    }

    /// Load a snapshot from a JSON file on disk.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write a snapshot to a JSON file on disk.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
