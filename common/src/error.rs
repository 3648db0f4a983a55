//! Startup configuration errors.
//!
//! Rendering itself never fails; everything that can go wrong is caught once
//! when the dashboard resolves its layout against the drawing surface.

use crate::panel::MAX_FIELDS;

/// Layout or field table that cannot be bound to the surface.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("no container named `{0}` in the layout")]
    MissingContainer(&'static str),

    #[error("container `{0}` lies outside the drawing surface")]
    ContainerOutOfBounds(&'static str),

    #[error("container `{0}` is bound to more than one field")]
    DuplicateContainer(&'static str),

    #[error("field table has {0} entries, at most {max} fit", max = MAX_FIELDS)]
    TooManyFields(usize),

    #[error("gauge area does not fit on the drawing surface")]
    GaugeOutOfBounds,
}
