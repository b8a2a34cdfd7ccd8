//! The host-menu surface: one construction command per solid.

use crate::container::GeometryContainer;
use crate::error::Result;
use crate::parametric::{run_command, DefaultsStore, Outcome, ParameterDialog, UnitSource};
use crate::solids::SolidKind;

/// Submenu label under which the commands are registered.
pub const MENU_LABEL: &str = "Polyhedra";

/// A single menu entry that triggers one solid's construction flow.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// Menu item text.
    pub label: &'static str,
    /// The solid this command constructs.
    pub kind: SolidKind,
}

impl Command {
    /// Full path under which the host registers this item, rooted at the
    /// shared [`MENU_LABEL`] submenu.
    #[must_use]
    pub fn menu_path(&self) -> String {
        format!("{MENU_LABEL}/{}", self.label)
    }

    /// Runs the interactive construction flow for this command's solid.
    ///
    /// # Errors
    ///
    /// Returns unit-resolution, validation, or container errors.
    pub fn run(
        &self,
        dialog: &mut dyn ParameterDialog,
        units: &dyn UnitSource,
        defaults: &mut DefaultsStore,
        container: &mut dyn GeometryContainer,
    ) -> Result<Outcome> {
        run_command(self.kind, dialog, units, defaults, container)
    }
}

/// Returns the menu entries for all five solids, in menu order.
#[must_use]
pub fn menu_commands() -> [Command; 5] {
    SolidKind::ALL.map(|kind| Command {
        label: kind.label(),
        kind,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::container::FaceStore;
    use crate::error::UnitError;
    use crate::parametric::AcceptDefaults;

    struct OneUnit;

    impl UnitSource for OneUnit {
        fn unit_length(&self) -> std::result::Result<f64, UnitError> {
            Ok(1.0)
        }
    }

    #[test]
    fn one_command_per_solid() {
        let commands = menu_commands();
        assert_eq!(commands.len(), SolidKind::ALL.len());
        for (command, kind) in commands.iter().zip(SolidKind::ALL) {
            assert_eq!(command.kind, kind);
            assert_eq!(command.label, kind.label());
            assert_eq!(command.menu_path(), format!("Polyhedra/{}", kind.label()));
        }
    }

    #[test]
    fn commands_build_their_solids() {
        let mut defaults = DefaultsStore::new();
        for command in menu_commands() {
            let mut store = FaceStore::new();
            let outcome = command
                .run(&mut AcceptDefaults, &OneUnit, &mut defaults, &mut store)
                .unwrap();
            assert!(matches!(outcome, Outcome::Built(_)));
            assert_eq!(store.face_count(), command.kind.face_count());
        }
    }
}
