//! Command model and argument assembly for PersonaEditorCMD.
//!
//! The form state is a flat record; turning it into an argv is a pure
//! function, so the exact token ordering the external parser expects can
//! be pinned down by tests.

mod builder;
mod types;

pub use builder::build_arguments;
pub use types::{CommandForm, ExportType, MainCommand, TextEncoding};
