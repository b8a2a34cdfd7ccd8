use crate::error::UnitError;

/// Source of the host's current default length.
///
/// Consulted only when no remembered radius exists for a solid; the value
/// seeds the parameter-entry dialog and never affects an explicit radius.
pub trait UnitSource {
    /// Returns one "sensible default" length in the working unit.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::Unresolved`] when the host cannot report its
    /// model units; the caller then has to require an explicit radius.
    fn unit_length(&self) -> Result<f64, UnitError>;
}

/// Length unit of the host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Inches,
    Feet,
    Millimeters,
    Centimeters,
    Meters,
}

/// Display format of the host model's lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthFormat {
    Decimal,
    Architectural,
    Engineering,
    Fractional,
}

/// Working unit conversion: the host document measures in inches.
const INCHES_PER_FOOT: f64 = 12.0;
const INCHES_PER_MM: f64 = 1.0 / 25.4;

/// Unit settings read from the host model.
///
/// Maps the unit/format pair to a default length the way the host's options
/// table does: architectural and engineering formats round up to a foot,
/// metric units suggest a round metric length, everything else one inch.
#[derive(Debug, Clone, Copy)]
pub struct ModelUnits {
    pub unit: LengthUnit,
    pub format: LengthFormat,
}

impl ModelUnits {
    /// Creates unit settings from the host model's options.
    #[must_use]
    pub fn new(unit: LengthUnit, format: LengthFormat) -> Self {
        Self { unit, format }
    }
}

impl UnitSource for ModelUnits {
    fn unit_length(&self) -> Result<f64, UnitError> {
        let length = match self.unit {
            LengthUnit::Inches => match self.format {
                // Architectural (feet and inches) or Engineering (feet).
                LengthFormat::Architectural | LengthFormat::Engineering => INCHES_PER_FOOT,
                // Decimal or fractional inches.
                LengthFormat::Decimal | LengthFormat::Fractional => 1.0,
            },
            LengthUnit::Feet => INCHES_PER_FOOT,
            LengthUnit::Millimeters => 10.0 * INCHES_PER_MM,
            LengthUnit::Centimeters => 100.0 * INCHES_PER_MM,
            LengthUnit::Meters => 1000.0 * INCHES_PER_MM,
        };
        Ok(length)
    }
}
