//! Size-record initialization, comparison, and display info

use crate::context::GameContext;
use crate::core::types::SELECTION_NONE;
use crate::format::format_size;
use crate::save::{StringSlot, VarId};
use crate::size::{derive_size, size_hash};
use crate::species::Species;

/// Record value meaning "no specimen recorded yet". Always loses a
/// comparison, so the first eligible creature claims the record.
pub const DEFAULT_MAX_SIZE: u16 = 0x8000;

/// Name shown as the record holder while a record is still unset.
pub const DEFAULT_RECORD_HOLDER: &str = "Wendel";

/// Outcome of a record comparison, written back to the result special
/// variable for the calling script to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    /// No creature was selected.
    NoSelection,
    /// The selected creature is an egg or of the wrong species.
    Rejected,
    /// The creature did not beat the stored record.
    NotBeaten,
    /// The creature set a new record.
    NewRecord,
}

impl CompareOutcome {
    /// Script-visible outcome code.
    pub fn code(self) -> u16 {
        match self {
            CompareOutcome::NoSelection => 0,
            CompareOutcome::Rejected => 1,
            CompareOutcome::NotBeaten => 2,
            CompareOutcome::NewRecord => 3,
        }
    }
}

/// Reset a species' record variable to the unset sentinel.
pub fn init_size_record(ctx: &mut GameContext, var: VarId) {
    ctx.save.set_var(var, DEFAULT_MAX_SIZE);
}

/// Compare the selected party creature against the stored record.
///
/// Reads the selected slot from the result special variable. On outcomes 2
/// and 3 the creature's formatted size lands in string slot 2; outcome 3
/// additionally stores the creature's raw magnitude (not its size) as the
/// new record, to be re-derived on the next read.
pub fn compare_size_record(ctx: &mut GameContext, species: Species, var: VarId) -> CompareOutcome {
    let selection = ctx.specials.result;
    if selection == SELECTION_NONE {
        return CompareOutcome::NoSelection;
    }

    let creature = match ctx.party.get(selection as usize) {
        Some(creature) => creature,
        None => return CompareOutcome::NoSelection,
    };
    if creature.is_egg || creature.species != species {
        return CompareOutcome::Rejected;
    }

    let magnitude = size_hash(creature);
    let record = ctx.save.var(var);
    let new_size = derive_size(species, magnitude);
    let old_size = derive_size(species, record);

    let text = format_size(new_size, ctx.save.unit_system);
    ctx.strings.set(StringSlot::Var2, text);

    tracing::debug!(
        "{} size comparison: challenger {} vs record {}",
        species.name(),
        new_size,
        old_size
    );

    if record != DEFAULT_MAX_SIZE && new_size <= old_size {
        CompareOutcome::NotBeaten
    } else {
        ctx.save.set_var(var, magnitude);
        tracing::info!("new {} size record: {} tenths", species.name(), new_size);
        CompareOutcome::NewRecord
    }
}

/// Buffer the pieces of the record sentence: species name into slot 1,
/// record holder into slot 2, formatted record size into slot 3.
pub fn get_size_record_info(ctx: &mut GameContext, species: Species, var: VarId) {
    let record = ctx.save.var(var);
    let size = derive_size(species, record);

    let text = format_size(size, ctx.save.unit_system);
    ctx.strings.set(StringSlot::Var3, text);
    ctx.strings.set(StringSlot::Var1, species.name());
    let holder = if record == DEFAULT_MAX_SIZE {
        DEFAULT_RECORD_HOLDER.to_string()
    } else {
        ctx.save.player_name.clone()
    };
    ctx.strings.set(StringSlot::Var2, holder);
}
