use std::collections::HashMap;

use crate::solids::SolidKind;

/// Remembered last-used radius per solid kind.
///
/// Owned by the application context and passed into the construction
/// protocol explicitly, so each caller (and each test) controls its own
/// defaults. Read when suggesting parameters for a new instance of the same
/// solid; written only after a construction succeeds.
#[derive(Debug, Default, Clone)]
pub struct DefaultsStore {
    last_radius: HashMap<SolidKind, f64>,
}

impl DefaultsStore {
    /// Creates an empty store; every kind falls back to the unit length.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last radius used for this kind, if any.
    #[must_use]
    pub fn last_radius(&self, kind: SolidKind) -> Option<f64> {
        self.last_radius.get(&kind).copied()
    }

    /// Records the radius of a successful construction.
    pub fn remember(&mut self, kind: SolidKind, radius: f64) {
        self.last_radius.insert(kind, radius);
    }
}
