//! Pre-computed static text styles.
//!
//! `TextStyle` values are `const` so they are built at compile time. Character
//! styles depend on the color each container asks for, so only the font
//! references are shared; callers build `MonoTextStyle::new(font, color)`.
//!
//! Labels and readouts use the ISO 8859-1 fonts because unit suffixes need
//! `°`, `µ` and `³`. The AQI number uses `ProFont` 24pt.

use embedded_graphics::{
    mono_font::{
        MonoFont,
        iso_8859_1::{FONT_6X10, FONT_10X20},
    },
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Left-aligned, vertically centered on the anchor.
pub const LEFT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

/// Centered on the anchor in both axes.
pub const CENTER_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Right-aligned, vertically centered on the anchor.
pub const RIGHT_MIDDLE: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Small font (6x10) for readouts, labels and the timestamp.
pub const LABEL_FONT: &MonoFont<'static> = &FONT_6X10;

/// Header title font (10x20).
pub const TITLE_FONT: &MonoFont<'static> = &FONT_10X20;

/// Large font for the AQI number in the middle of the gauge.
pub const VALUE_FONT: &MonoFont<'static> = &PROFONT_24_POINT;

/// Font role requested by a container or label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    Label,
    Title,
    Value,
}

impl Font {
    /// The mono font backing this role.
    pub const fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Self::Label => LABEL_FONT,
            Self::Title => TITLE_FONT,
            Self::Value => VALUE_FONT,
        }
    }
}

/// Horizontal placement of text inside its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Matching `TextStyle` (all vertically centered).
    pub const fn text_style(self) -> TextStyle {
        match self {
            Self::Left => LEFT_MIDDLE,
            Self::Center => CENTER_MIDDLE,
            Self::Right => RIGHT_MIDDLE,
        }
    }
}
