//! Shared output string slots consumed by the external text renderer

use serde::{Deserialize, Serialize};

/// The three designated output slots the scripted display layer assembles
/// sentences from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StringSlot {
    Var1,
    Var2,
    Var3,
}

impl StringSlot {
    /// Map a script-supplied slot operand to a slot. Unrecognized values
    /// fall back to slot 1.
    pub fn from_operand(operand: u16) -> Self {
        match operand {
            2 => StringSlot::Var2,
            3 => StringSlot::Var3,
            _ => StringSlot::Var1,
        }
    }

    fn index(self) -> usize {
        match self {
            StringSlot::Var1 => 0,
            StringSlot::Var2 => 1,
            StringSlot::Var3 => 2,
        }
    }
}

/// Write-side view of the shared string buffers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StringVars {
    slots: [String; 3],
}

impl StringVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: StringSlot) -> &str {
        &self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: StringSlot, text: impl Into<String>) {
        self.slots[slot.index()] = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_operand_mapping() {
        assert_eq!(StringSlot::from_operand(1), StringSlot::Var1);
        assert_eq!(StringSlot::from_operand(2), StringSlot::Var2);
        assert_eq!(StringSlot::from_operand(3), StringSlot::Var3);
    }

    #[test]
    fn test_unrecognized_operand_falls_back_to_slot_1() {
        assert_eq!(StringSlot::from_operand(0), StringSlot::Var1);
        assert_eq!(StringSlot::from_operand(7), StringSlot::Var1);
        assert_eq!(StringSlot::from_operand(u16::MAX), StringSlot::Var1);
    }

    #[test]
    fn test_set_overwrites_slot() {
        let mut strings = StringVars::new();
        strings.set(StringSlot::Var2, "48.5");
        assert_eq!(strings.get(StringSlot::Var2), "48.5");
        strings.set(StringSlot::Var2, "50.0");
        assert_eq!(strings.get(StringSlot::Var2), "50.0");
        assert_eq!(strings.get(StringSlot::Var1), "");
    }
}
