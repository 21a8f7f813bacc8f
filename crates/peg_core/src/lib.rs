//! PEG Core - Backend logic for PersonaEditorCMD GUI
//!
//! This crate contains all business logic with zero UI dependencies:
//! the command model and argument assembly, the batch runner, the
//! exported-text unifier, the font configuration editor, and the
//! persisted application settings.

pub mod command;
pub mod config;
pub mod fontcfg;
pub mod logging;
pub mod runner;
pub mod unify;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
