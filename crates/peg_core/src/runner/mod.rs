//! Batch execution of PersonaEditorCMD over the selected files.
//!
//! The runner is split into:
//! - precondition validation (nothing is spawned when it fails)
//! - per-file invocation planning (argv + working directory)
//! - the low-level process wrapper
//!
//! The sequential loop itself is driven by the caller one file at a time,
//! so a UI can interleave log updates between invocations.

mod invoke;
mod plan;
mod types;

pub use invoke::invoke;
pub use plan::{plan_invocation, validate};
pub use types::{BatchOutcome, Invocation, InvokeError, PreconditionError, RunOutput};
