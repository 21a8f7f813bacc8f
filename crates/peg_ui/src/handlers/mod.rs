//! Handler methods for the App struct, grouped by concern.

pub mod browse;
pub mod fonts;
pub mod helpers;
pub mod processing;
