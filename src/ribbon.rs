//! Gift ribbon grants to the active roster

use crate::context::GameContext;
use crate::save::{FlagId, RibbonAttr, GIFT_RIBBON_SLOTS};
use crate::species::Species;

/// Largest ribbon value a slot may hold.
pub const MAX_GIFT_RIBBON: u8 = 64;

// Slot-to-attribute table. The last four slots map to unused attribute bits
// and grant no creature attribute.
const SLOT_ATTRS: [Option<RibbonAttr>; GIFT_RIBBON_SLOTS] = [
    Some(RibbonAttr::Marine),
    Some(RibbonAttr::Land),
    Some(RibbonAttr::Sky),
    Some(RibbonAttr::Country),
    Some(RibbonAttr::National),
    Some(RibbonAttr::Earth),
    Some(RibbonAttr::World),
    None,
    None,
    None,
    None,
];

/// Record a gift ribbon in save data and hand it to every eligible party
/// creature.
///
/// Silently does nothing if the slot index or ribbon value is out of range;
/// no save data or creature attribute is touched in that case. Eligible
/// creatures are those with a non-empty species that are not eggs. The
/// ribbon-obtained notification flag is set iff at least one creature
/// received the attribute.
pub fn give_gift_ribbon(ctx: &mut GameContext, index: u8, ribbon_id: u8) {
    if index as usize >= GIFT_RIBBON_SLOTS || ribbon_id > MAX_GIFT_RIBBON {
        tracing::warn!(
            "rejected gift ribbon grant: slot {} value {}",
            index,
            ribbon_id
        );
        return;
    }

    ctx.save.gift_ribbons[index as usize] = ribbon_id;

    let mut got_ribbon = false;
    if let Some(attr) = SLOT_ATTRS[index as usize] {
        for creature in ctx.party.iter_mut() {
            if creature.species != Species::None && !creature.is_egg {
                creature.set_ribbon(attr);
                got_ribbon = true;
            }
        }
    }
    if got_ribbon {
        ctx.save.set_flag(FlagId::RibbonObtained);
        tracing::info!("gift ribbon {} granted from slot {}", ribbon_id, index);
    }
}
