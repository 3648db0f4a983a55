//! Dashboard controller.
//!
//! Owns the surface, the gauge renderer and the panel, and turns each
//! incoming [`Reading`] into one complete redraw. No step looks at the
//! previous reading: a reading that lacks a field hides that field, so a
//! sparse or late message can never leave stale values on screen.

use embedded_graphics::primitives::Rectangle;
use tracing::{debug, trace};

use crate::config::GAUGE_AREA;
use crate::error::ConfigError;
use crate::fields::{FIELD_SPECS, FieldSpec};
use crate::gauge::{GaugeGeometry, GaugeRenderer};
use crate::panel::{CONTAINERS, Container, FieldSlot, Panel, contains, draw_header};
use crate::reading::{RawValue, Reading};
use crate::reconcile::{Reconciled, reconcile};
use crate::scale::label_for;
use crate::surface::Surface;

/// Ties the gauge and the readouts to one drawing surface.
pub struct Dashboard<S> {
    surface: S,
    gauge: GaugeRenderer,
    panel: Panel,
    last: Reading,
}

impl<S: Surface> Dashboard<S> {
    /// Dashboard with the built-in layout and field table.
    pub fn new(surface: S) -> Result<Self, ConfigError> {
        Self::with_layout(surface, GAUGE_AREA, &CONTAINERS, &FIELD_SPECS)
    }

    /// Dashboard with a custom layout. Every container and the gauge area are
    /// checked against the surface bounds here, so rendering cannot fail later.
    pub fn with_layout(
        surface: S,
        gauge_area: Rectangle,
        layout: &'static [Container],
        specs: &'static [FieldSpec],
    ) -> Result<Self, ConfigError> {
        let bounds = surface.bounds();
        if !contains(bounds, gauge_area) {
            return Err(ConfigError::GaugeOutOfBounds);
        }
        let geometry = GaugeGeometry::fit(gauge_area).ok_or(ConfigError::GaugeOutOfBounds)?;
        let panel = Panel::resolve(layout, specs, bounds)?;

        Ok(Self {
            surface,
            gauge: GaugeRenderer::new(geometry),
            panel,
            last: Reading::empty(),
        })
    }

    /// Draw the static chrome, place the boundary labels and show the
    /// all-absent state. Call once before any live data.
    pub fn bootstrap(
        &mut self,
        title: &str,
    ) {
        debug!("bootstrapping dashboard");
        draw_header(&mut self.surface, title);
        self.gauge.place_boundary_labels(&mut self.surface);
        self.on_reading(Reading::empty());
    }

    /// Render one reading in full.
    pub fn on_reading(
        &mut self,
        reading: Reading,
    ) {
        trace!(fields = reading.len(), "rendering reading");
        self.last = reading;
        render(&mut self.surface, &self.gauge, &mut self.panel, &self.last);
    }

    /// Render the last reading again.
    pub fn redraw(&mut self) { render(&mut self.surface, &self.gauge, &mut self.panel, &self.last); }

    pub const fn last_reading(&self) -> &Reading { &self.last }

    pub const fn panel(&self) -> &Panel { &self.panel }

    pub const fn gauge(&self) -> &GaugeRenderer { &self.gauge }

    pub const fn surface(&self) -> &S { &self.surface }

    pub const fn surface_mut(&mut self) -> &mut S { &mut self.surface }
}

fn render<S: Surface>(
    surface: &mut S,
    gauge: &GaugeRenderer,
    panel: &mut Panel,
    reading: &Reading,
) {
    apply_field(&mut panel.timestamp, reading);

    gauge.render(surface, reading.aqi());
    match reading.aqi_value() {
        Some(aqi) => {
            let value = RawValue::Number(aqi);
            panel.aqi_value.slot.apply(reconcile(Some(&value), panel.aqi_value.spec));
            panel.aqi_label.apply(Reconciled::visible(label_for(aqi as f32)));
        }
        None => {
            panel.aqi_value.slot.apply(Reconciled::Hidden);
            panel.aqi_label.apply(Reconciled::Hidden);
        }
    }

    for field in &mut panel.fields {
        apply_field(field, reading);
    }

    panel.draw(surface);
}

fn apply_field(
    field: &mut FieldSlot,
    reading: &Reading,
) {
    let update = reconcile(reading.get(field.spec.key), field.spec);
    field.slot.apply(update);
}
