//! The game context threaded through every scripted-event entry point
//!
//! Save data, the shared string buffers, and the scratch special variables
//! travel as one explicit context object so the feature logic stays pure
//! over its inputs.

use serde::{Deserialize, Serialize};

use crate::save::{Party, SaveData, StringVars};

/// Scratch variables the scripted dispatch layer shares with specials.
///
/// `result` doubles as input and output for the record comparison: the
/// calling script stores the selected party slot there (or
/// [`SELECTION_NONE`](crate::core::types::SELECTION_NONE)) and reads the
/// comparison outcome back from it. `op_a`/`op_b` carry the operands of the
/// unit-text entry point.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpecialVars {
    pub result: u16,
    pub op_a: u16,
    pub op_b: u16,
}

/// Everything a scripted event touches, owned by the single game-logic
/// thread.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameContext {
    pub save: SaveData,
    pub party: Party,
    pub strings: StringVars,
    pub specials: SpecialVars,
}

impl GameContext {
    pub fn new(save: SaveData) -> Self {
        Self {
            save,
            ..Self::default()
        }
    }
}
