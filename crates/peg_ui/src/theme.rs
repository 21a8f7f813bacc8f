//! Theme constants for PersonaEditorCMD GUI.

use iced::Color;

/// Tint of the font-settings status label.
///
/// The original colors the label per situation: gray before a path is set,
/// red for errors, orange for an empty catalog, green after loading, blue
/// after saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Gray,
    Red,
    Orange,
    Green,
    Blue,
}

/// Color for a status tone.
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Gray => Color::from_rgb(0.60, 0.60, 0.60),
        StatusTone::Red => Color::from_rgb(0.90, 0.35, 0.35),
        StatusTone::Orange => Color::from_rgb(0.90, 0.65, 0.25),
        StatusTone::Green => Color::from_rgb(0.40, 0.80, 0.40),
        StatusTone::Blue => Color::from_rgb(0.45, 0.65, 0.95),
    }
}

/// Extra colors used by the views.
pub mod colors {
    use super::Color;

    /// Muted text (placeholder rows, hints).
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.45);
}

/// Spacing constants.
pub mod spacing {
    /// Extra small spacing (4px)
    pub const XS: f32 = 4.0;
    /// Small spacing (8px)
    pub const SM: f32 = 8.0;
    /// Medium spacing (12px)
    pub const MD: f32 = 12.0;
    /// Large spacing (16px)
    pub const LG: f32 = 16.0;
    /// Extra large spacing (24px)
    pub const XL: f32 = 24.0;
}

/// Font sizes.
pub mod font {
    /// Small font size
    pub const SM: f32 = 11.0;
    /// Normal font size
    pub const NORMAL: f32 = 13.0;
    /// Medium font size
    pub const MD: f32 = 14.0;
    /// Large font size
    pub const LG: f32 = 16.0;
}
