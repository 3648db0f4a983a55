//! Gauge rendering and reactive field updates for the AQI dashboard.
//!
//! This crate contains the platform-agnostic core shared by every host that
//! renders the dashboard (the desktop simulator today):
//!
//! - [`bands`]: The six AQI bands and their compile-time checked bounds
//! - [`scale`]: AQI value to angle, band and label mapping
//! - [`colors`]: RGB565 color constants
//! - [`config`]: Layout and gauge geometry constants
//! - [`styles`]: Pre-computed text styles
//! - [`reading`]: Sensor reading snapshot keyed by wire name
//! - [`fields`]: Static field table consumed by the reconciler
//! - [`reconcile`]: Present/absent reconciliation and value formatting
//! - [`surface`]: Drawing seam plus the `embedded-graphics` canvas
//! - [`gauge`]: Banded arc, marker and boundary labels
//! - [`panel`]: Named output containers and their visible state
//! - [`dashboard`]: Controller tying the above together per reading
//!
//! # no_std Compatibility
//!
//! The crate is `no_std` outside of tests. All formatted text lives in
//! `heapless::String` buffers and trigonometry goes through `micromath`.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod bands;
pub mod colors;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fields;
pub mod gauge;
pub mod panel;
pub mod reading;
pub mod reconcile;
pub mod scale;
pub mod styles;
pub mod surface;

// Re-export commonly used items
pub use dashboard::Dashboard;
pub use error::ConfigError;
pub use reading::{FieldKey, RawValue, Reading};
pub use reconcile::Reconciled;
pub use surface::{Canvas, Surface};
