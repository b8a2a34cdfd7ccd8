//! The shared four-step construction protocol: suggest defaults, label
//! prompts, validate parameters, create entities.

mod defaults;
mod dialog;
mod units;

pub use defaults::DefaultsStore;
pub use dialog::{AcceptDefaults, ParameterDialog};
pub use units::{LengthFormat, LengthUnit, ModelUnits, UnitSource};

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::container::{FaceId, GeometryContainer};
use crate::error::{ParameterError, Result};
use crate::solids::SolidKind;

/// Name of the single size parameter shared by all five solids.
pub const RADIUS: &str = "radius";

/// Named length parameters for one construction.
///
/// For every solid the only entry is [`RADIUS`], a circumsphere radius in
/// the working unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<String, f64>,
}

impl ParameterSet {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding just a radius.
    #[must_use]
    pub fn with_radius(radius: f64) -> Self {
        let mut set = Self::new();
        set.insert(RADIUS, radius);
        set
    }

    /// Inserts or replaces a named value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Looks up a named value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Returns the radius entry.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Missing`] if no radius was supplied.
    pub fn radius(&self) -> std::result::Result<f64, ParameterError> {
        self.get(RADIUS).ok_or(ParameterError::Missing(RADIUS))
    }

    /// Iterates over the entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

impl SolidKind {
    /// Suggests parameters for the next construction of this kind.
    ///
    /// Returns the last-used radius for this kind if one is remembered,
    /// otherwise the host's current unit length. No side effects.
    ///
    /// # Errors
    ///
    /// Returns a unit error when nothing is remembered and the host cannot
    /// resolve its model units; the user then has to enter an explicit
    /// radius.
    pub fn default_parameters(
        self,
        defaults: &DefaultsStore,
        units: &dyn UnitSource,
    ) -> Result<ParameterSet> {
        let radius = match defaults.last_radius(self) {
            Some(last) => last,
            None => units.unit_length()?,
        };
        Ok(ParameterSet::with_radius(radius))
    }

    /// Maps an internal parameter key to its prompt text.
    ///
    /// Unknown keys pass through unchanged.
    #[must_use]
    pub fn display_label(self, key: &str) -> &str {
        match key {
            RADIUS => "Radius",
            other => other,
        }
    }

    /// Checks the parameters before any geometry is built.
    ///
    /// # Errors
    ///
    /// Rejects a missing, non-finite, or non-positive radius; the downstream
    /// vertex math is undefined for those.
    pub fn validate_parameters(self, params: &ParameterSet) -> Result<()> {
        let radius = params.radius()?;
        if !radius.is_finite() {
            return Err(ParameterError::NotFinite {
                name: RADIUS,
                value: radius,
            }
            .into());
        }
        if radius <= 0.0 {
            return Err(ParameterError::NotPositive {
                name: RADIUS,
                value: radius,
            }
            .into());
        }
        Ok(())
    }

    /// The effectful step: computes this solid's geometry and hands it to
    /// the container.
    ///
    /// Assumes parameters have already passed [`Self::validate_parameters`].
    ///
    /// # Errors
    ///
    /// Propagates a missing radius or container failures.
    pub fn create_entities(
        self,
        params: &ParameterSet,
        container: &mut dyn GeometryContainer,
    ) -> Result<Vec<FaceId>> {
        let radius = params.radius()?;
        self.build(radius, container)
    }
}

/// Runs the validate-build-commit sequence for one solid.
///
/// The last-used default is written only after the geometry is fully built;
/// a validation or container failure leaves the defaults store untouched.
///
/// # Errors
///
/// Returns the validation or container error; no partial mesh bookkeeping
/// is committed.
pub fn construct(
    kind: SolidKind,
    params: &ParameterSet,
    container: &mut dyn GeometryContainer,
    defaults: &mut DefaultsStore,
) -> Result<Vec<FaceId>> {
    kind.validate_parameters(params)?;
    let radius = params.radius()?;
    let faces = kind.create_entities(params, container)?;
    defaults.remember(kind, radius);
    debug!(kind = kind.label(), radius, faces = faces.len(), "solid constructed");
    Ok(faces)
}

/// Result of one dialog-driven construction command.
#[derive(Debug)]
pub enum Outcome {
    /// Geometry was built; the container faces are listed.
    Built(Vec<FaceId>),
    /// The user cancelled the dialog; nothing changed.
    Cancelled,
}

/// Full interactive flow for one solid: suggest, prompt, build.
///
/// Cancellation in the dialog is a no-op. A failed validation is returned
/// to the caller, which may re-prompt; no retry happens here.
///
/// # Errors
///
/// Returns unit-resolution, validation, or container errors.
pub fn run_command(
    kind: SolidKind,
    dialog: &mut dyn ParameterDialog,
    units: &dyn UnitSource,
    defaults: &mut DefaultsStore,
    container: &mut dyn GeometryContainer,
) -> Result<Outcome> {
    let suggested = kind.default_parameters(defaults, units)?;
    debug!(kind = kind.label(), "requesting parameters");
    let Some(params) = dialog.request(kind, &suggested) else {
        trace!(kind = kind.label(), "parameter entry cancelled");
        return Ok(Outcome::Cancelled);
    };
    let faces = construct(kind, &params, container, defaults)?;
    Ok(Outcome::Built(faces))
}
