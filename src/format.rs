//! Player-facing measurement text

use crate::core::types::UnitSystem;

const CM_PER_INCH: f64 = 2.54;

/// Render a size in tenths of a centimeter as `<integer>.<tenth>`, with no
/// unit suffix (the suffix comes from the unit-label tables separately).
///
/// Under the imperial option the value is converted to tenths of an inch
/// first, through an f64 intermediate truncated toward zero, matching the
/// displayed records players already know.
pub fn format_size(size: u32, units: UnitSystem) -> String {
    let size = match units {
        UnitSystem::Imperial => ((size * 10) as f64 / (CM_PER_INCH * 10.0)) as u32,
        UnitSystem::Metric => size,
    };
    format!("{}.{}", size / 10, size % 10)
}

/// The nine localized unit-label categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitTextId {
    LengthSmallSingular,
    LengthSmallPlural,
    LengthSmallSymbol,
    LengthMediumSingular,
    LengthMediumPlural,
    LengthMediumSymbol,
    WeightSingular,
    WeightPlural,
    WeightSymbol,
}

impl UnitTextId {
    /// Map a script-supplied category operand to a category.
    pub fn from_operand(operand: u16) -> Option<Self> {
        match operand {
            0 => Some(UnitTextId::LengthSmallSingular),
            1 => Some(UnitTextId::LengthSmallPlural),
            2 => Some(UnitTextId::LengthSmallSymbol),
            3 => Some(UnitTextId::LengthMediumSingular),
            4 => Some(UnitTextId::LengthMediumPlural),
            5 => Some(UnitTextId::LengthMediumSymbol),
            6 => Some(UnitTextId::WeightSingular),
            7 => Some(UnitTextId::WeightPlural),
            8 => Some(UnitTextId::WeightSymbol),
            _ => None,
        }
    }
}

/// Fixed label text for a category under the given unit system.
pub fn unit_label(id: UnitTextId, units: UnitSystem) -> &'static str {
    match units {
        UnitSystem::Imperial => match id {
            UnitTextId::LengthSmallSingular => "inch",
            UnitTextId::LengthSmallPlural => "inches",
            UnitTextId::LengthSmallSymbol => "\u{201D}",
            UnitTextId::LengthMediumSingular => "foot",
            UnitTextId::LengthMediumPlural => "feet",
            UnitTextId::LengthMediumSymbol => "\u{2019}",
            UnitTextId::WeightSingular => "pound",
            UnitTextId::WeightPlural => "pounds",
            UnitTextId::WeightSymbol => "lb",
        },
        UnitSystem::Metric => match id {
            UnitTextId::LengthSmallSingular => "centimeter",
            UnitTextId::LengthSmallPlural => "centimeters",
            UnitTextId::LengthSmallSymbol => "cm",
            UnitTextId::LengthMediumSingular => "meter",
            UnitTextId::LengthMediumPlural => "meters",
            UnitTextId::LengthMediumSymbol => "m",
            UnitTextId::WeightSingular => "kilogram",
            UnitTextId::WeightPlural => "kilograms",
            UnitTextId::WeightSymbol => "kg",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_rendering() {
        assert_eq!(format_size(1234, UnitSystem::Metric), "123.4");
        assert_eq!(format_size(145, UnitSystem::Metric), "14.5");
        assert_eq!(format_size(0, UnitSystem::Metric), "0.0");
        assert_eq!(format_size(5, UnitSystem::Metric), "0.5");
    }

    #[test]
    fn test_imperial_conversion_truncates() {
        // 12340 / 25.4 = 485.82... -> 485 tenths of an inch.
        assert_eq!(format_size(1234, UnitSystem::Imperial), "48.5");
        // 1450 / 25.4 = 57.08... -> 57 tenths.
        assert_eq!(format_size(145, UnitSystem::Imperial), "5.7");
        assert_eq!(format_size(0, UnitSystem::Imperial), "0.0");
    }

    #[test]
    fn test_unit_label_pairs() {
        assert_eq!(
            unit_label(UnitTextId::LengthSmallSingular, UnitSystem::Imperial),
            "inch"
        );
        assert_eq!(
            unit_label(UnitTextId::LengthSmallSingular, UnitSystem::Metric),
            "centimeter"
        );
        assert_eq!(
            unit_label(UnitTextId::WeightSymbol, UnitSystem::Imperial),
            "lb"
        );
        assert_eq!(
            unit_label(UnitTextId::WeightSymbol, UnitSystem::Metric),
            "kg"
        );
    }

    #[test]
    fn test_category_operand_mapping() {
        assert_eq!(
            UnitTextId::from_operand(0),
            Some(UnitTextId::LengthSmallSingular)
        );
        assert_eq!(UnitTextId::from_operand(8), Some(UnitTextId::WeightSymbol));
        assert_eq!(UnitTextId::from_operand(9), None);
        assert_eq!(UnitTextId::from_operand(u16::MAX), None);
    }
}
