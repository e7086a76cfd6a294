pub mod data;
pub mod party;
pub mod strings;

pub use data::{FlagId, SaveData, VarId, GIFT_RIBBON_SLOTS};
pub use party::{Creature, Party, RibbonAttr, PARTY_SIZE};
pub use strings::{StringSlot, StringVars};
