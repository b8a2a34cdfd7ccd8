use crate::parametric::ParameterSet;
use crate::solids::SolidKind;

/// The host's parameter-entry dialog.
///
/// Presents the suggested parameters (with prompt text from
/// [`SolidKind::display_label`]) and returns the user's revision, or `None`
/// when the user cancels. Cancellation must be treated as a no-op by the
/// caller: no geometry built, no defaults updated.
pub trait ParameterDialog {
    fn request(&mut self, kind: SolidKind, suggested: &ParameterSet) -> Option<ParameterSet>;
}

/// Dialog that accepts every suggestion unchanged.
///
/// Useful for headless hosts and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptDefaults;

impl ParameterDialog for AcceptDefaults {
    fn request(&mut self, _kind: SolidKind, suggested: &ParameterSet) -> Option<ParameterSet> {
        Some(suggested.clone())
    }
}
