//! Present/absent reconciliation for readout fields.
//!
//! [`reconcile`] is a pure function of the raw value and its [`FieldSpec`]: it
//! decides whether the field's container is shown and, if so, what it says.
//! Nothing here depends on what was displayed before.
//!
//! # Rules
//!
//! | Value | Format | Result |
//! |-------|--------|--------|
//! | absent | any | hidden |
//! | number / text | `Verbatim` | as delivered, plus unit |
//! | numeric | `Fixed(p)` | exactly `p` fractional digits, plus unit |
//! | non-numeric | `Fixed(p)` / `Resistance` | hidden |
//! | numeric < 1000 | `Resistance` | `"999 Ω"` |
//! | numeric ≥ 1000 | `Resistance` | `"1.5 kΩ"` |
//!
//! Non-finite numbers and blank text are treated as absent so the display
//! never shows `NaN` or an empty readout.

use core::fmt::Write;

use heapless::String;
use tracing::trace;

use crate::fields::{FieldSpec, ValueFormat};
use crate::reading::RawValue;

/// Capacity of a formatted readout.
pub const DISPLAY_TEXT_CAPACITY: usize = 48;

/// Formatted readout text.
pub type DisplayText = String<DISPLAY_TEXT_CAPACITY>;

/// Resistance at which the gas readout switches to kilo-ohms.
pub const KILO_OHM_THRESHOLD: f64 = 1000.0;

/// Outcome of reconciling one field.
#[derive(Clone, Debug, PartialEq)]
pub enum Reconciled {
    /// Container hidden, text untouched.
    Hidden,
    /// Container shown with this text.
    Visible(DisplayText),
}

impl Reconciled {
    /// Visible text, `None` when hidden.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Visible(text) => Some(text.as_str()),
        }
    }

    /// True when the container is shown.
    pub const fn is_visible(&self) -> bool { matches!(self, Self::Visible(_)) }

    /// Show `text` verbatim, hidden if it does not fit.
    pub fn visible(text: &str) -> Self { DisplayText::try_from(text).map_or(Self::Hidden, Self::Visible) }
}

/// Decide visibility and text for one field.
pub fn reconcile(
    value: Option<&RawValue>,
    spec: &FieldSpec,
) -> Reconciled {
    let Some(value) = value else {
        return Reconciled::Hidden;
    };

    let mut text = DisplayText::new();
    let formatted = match spec.format {
        ValueFormat::Verbatim => write_verbatim(&mut text, value, spec.unit),
        ValueFormat::Fixed(precision) => {
            finite(value).is_some_and(|number| write_fixed(&mut text, number, precision, spec.unit))
        }
        ValueFormat::Resistance => finite(value).is_some_and(|ohms| write_resistance(&mut text, ohms)),
    };

    if formatted {
        Reconciled::Visible(text)
    } else {
        trace!(container = spec.container, "value not displayable, hiding");
        Reconciled::Hidden
    }
}

/// Numeric view of a value, rejecting NaN and infinities.
fn finite(value: &RawValue) -> Option<f64> { value.as_f64().filter(|number| number.is_finite()) }

fn write_verbatim(
    text: &mut DisplayText,
    value: &RawValue,
    unit: Option<&str>,
) -> bool {
    let written = match value {
        RawValue::Number(number) => number.is_finite() && write!(text, "{number}").is_ok(),
        RawValue::Text(raw) => !raw.trim().is_empty() && text.push_str(raw).is_ok(),
    };
    written && push_unit(text, unit)
}

fn write_fixed(
    text: &mut DisplayText,
    number: f64,
    precision: u8,
    unit: Option<&str>,
) -> bool {
    let precision = usize::from(precision);
    write!(text, "{number:.precision$}").is_ok() && push_unit(text, unit)
}

fn write_resistance(
    text: &mut DisplayText,
    ohms: f64,
) -> bool {
    if ohms >= KILO_OHM_THRESHOLD {
        write!(text, "{:.1} kΩ", ohms / KILO_OHM_THRESHOLD).is_ok()
    } else {
        write!(text, "{ohms} Ω").is_ok()
    }
}

fn push_unit(
    text: &mut DisplayText,
    unit: Option<&str>,
) -> bool {
    match unit {
        Some(unit) => text.push(' ').is_ok() && text.push_str(unit).is_ok(),
        None => true,
    }
}
