//! Scripted-event entry points
//!
//! Thin wrappers binding each wired species to its record variable, plus the
//! operand-driven unit-text buffering. The external dispatch layer calls
//! these by opcode; each one runs to completion within a single dispatch
//! step.

use crate::context::GameContext;
use crate::format::{unit_label, UnitTextId};
use crate::record;
use crate::ribbon;
use crate::save::{StringSlot, VarId};
use crate::species::Species;

pub fn init_thornling_record(ctx: &mut GameContext) {
    record::init_size_record(ctx, VarId::ThornlingSizeRecord);
}

pub fn get_thornling_record_info(ctx: &mut GameContext) {
    record::get_size_record_info(ctx, Species::Thornling, VarId::ThornlingSizeRecord);
}

pub fn compare_thornling_size(ctx: &mut GameContext) {
    let outcome = record::compare_size_record(ctx, Species::Thornling, VarId::ThornlingSizeRecord);
    ctx.specials.result = outcome.code();
}

pub fn init_mirefin_record(ctx: &mut GameContext) {
    record::init_size_record(ctx, VarId::MirefinSizeRecord);
}

pub fn get_mirefin_record_info(ctx: &mut GameContext) {
    record::get_size_record_info(ctx, Species::Mirefin, VarId::MirefinSizeRecord);
}

pub fn compare_mirefin_size(ctx: &mut GameContext) {
    let outcome = record::compare_size_record(ctx, Species::Mirefin, VarId::MirefinSizeRecord);
    ctx.specials.result = outcome.code();
}

/// Copy a unit label into a string slot, both chosen by the operand special
/// variables: `op_a` is the text category, `op_b` the destination slot
/// (defaulting to slot 1). An unknown category leaves the slots untouched.
pub fn buffer_unit_system_text(ctx: &mut GameContext) {
    let id = match UnitTextId::from_operand(ctx.specials.op_a) {
        Some(id) => id,
        None => return,
    };
    let slot = StringSlot::from_operand(ctx.specials.op_b);
    let label = unit_label(id, ctx.save.unit_system);
    ctx.strings.set(slot, label);
}

/// Grant a gift ribbon to the party. Operands arrive as direct arguments
/// from the dispatch layer rather than through the special variables.
pub fn give_gift_ribbon(ctx: &mut GameContext, index: u8, ribbon_id: u8) {
    ribbon::give_gift_ribbon(ctx, index, ribbon_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{StatVariation, UnitSystem, SELECTION_NONE};
    use crate::record::DEFAULT_MAX_SIZE;
    use crate::save::{Creature, SaveData};

    fn context() -> GameContext {
        GameContext::new(SaveData::new("Rowan"))
    }

    #[test]
    fn test_init_wrappers_set_their_own_variable() {
        let mut ctx = context();
        init_thornling_record(&mut ctx);
        assert_eq!(ctx.save.var(VarId::ThornlingSizeRecord), DEFAULT_MAX_SIZE);
        assert_eq!(ctx.save.var(VarId::MirefinSizeRecord), 0);

        init_mirefin_record(&mut ctx);
        assert_eq!(ctx.save.var(VarId::MirefinSizeRecord), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_compare_writes_outcome_to_result_var() {
        let mut ctx = context();
        init_thornling_record(&mut ctx);
        ctx.specials.result = SELECTION_NONE;
        compare_thornling_size(&mut ctx);
        assert_eq!(ctx.specials.result, 0);

        ctx.party.set(
            0,
            Creature::new(Species::Thornling, 99, StatVariation::new(8, 1, 2, 8, 3, 4)),
        );
        ctx.specials.result = 0;
        compare_thornling_size(&mut ctx);
        assert_eq!(ctx.specials.result, 3);
    }

    #[test]
    fn test_species_wrappers_do_not_cross() {
        let mut ctx = context();
        init_thornling_record(&mut ctx);
        init_mirefin_record(&mut ctx);
        ctx.party.set(
            0,
            Creature::new(Species::Mirefin, 7, StatVariation::new(5, 5, 5, 5, 5, 5)),
        );
        ctx.specials.result = 0;
        compare_thornling_size(&mut ctx);
        assert_eq!(ctx.specials.result, 1);
        assert_eq!(ctx.save.var(VarId::ThornlingSizeRecord), DEFAULT_MAX_SIZE);

        ctx.specials.result = 0;
        compare_mirefin_size(&mut ctx);
        assert_eq!(ctx.specials.result, 3);
        assert_ne!(ctx.save.var(VarId::MirefinSizeRecord), DEFAULT_MAX_SIZE);
    }

    #[test]
    fn test_unit_text_lands_in_requested_slot() {
        let mut ctx = context();
        ctx.save.unit_system = UnitSystem::Metric;
        ctx.specials.op_a = 0;
        ctx.specials.op_b = 3;
        buffer_unit_system_text(&mut ctx);
        assert_eq!(ctx.strings.get(StringSlot::Var3), "centimeter");

        ctx.save.unit_system = UnitSystem::Imperial;
        ctx.specials.op_b = 2;
        buffer_unit_system_text(&mut ctx);
        assert_eq!(ctx.strings.get(StringSlot::Var2), "inch");
    }

    #[test]
    fn test_unit_text_bad_slot_falls_back_to_slot_1() {
        let mut ctx = context();
        ctx.save.unit_system = UnitSystem::Metric;
        ctx.specials.op_a = 6;
        ctx.specials.op_b = 99;
        buffer_unit_system_text(&mut ctx);
        assert_eq!(ctx.strings.get(StringSlot::Var1), "kilogram");
    }

    #[test]
    fn test_unit_text_bad_category_writes_nothing() {
        let mut ctx = context();
        ctx.specials.op_a = 42;
        ctx.specials.op_b = 1;
        buffer_unit_system_text(&mut ctx);
        assert_eq!(ctx.strings.get(StringSlot::Var1), "");
    }
}
