//! AQI gauge: banded arc, position marker and boundary labels.
//!
//! # Render Pass
//!
//! Every reading redraws the whole gauge instead of erasing the old marker:
//! a marker sits on top of a thick curved stroke, and patching just that
//! spot back is unreliable. One pass is:
//!
//! 1. [`GaugeRenderer::draw_bands`] - clear the gauge square, stroke six arcs
//! 2. [`GaugeRenderer::draw_labels`] - re-issue the cached boundary labels
//! 3. [`GaugeRenderer::draw_marker`] - marker at the current AQI, if any
//!
//! Boundary label placement is computed once by
//! [`GaugeRenderer::place_boundary_labels`] and cached for later passes.

use core::f32::consts::FRAC_PI_2;
use core::fmt::Write;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::{String, Vec};
#[cfg(not(test))]
use micromath::F32Ext;
use tracing::debug;

use crate::bands::{AQI_BANDS, BAND_COUNT};
use crate::colors::{BLACK, GRAY, LIGHT_GRAY, WHITE};
use crate::config::{ARC_WIDTH, GAUGE_MARGIN, LABEL_OFFSET, MARKER_OUTLINE_WIDTH, MARKER_RADIUS, SHADOW_OFFSET};
use crate::scale::{START_ANGLE, angle_for, band_for};
use crate::styles::{Align, Font};
use crate::surface::{ArcStroke, Marker, Shadow, Surface, TextSpec};

// =============================================================================
// Geometry
// =============================================================================

/// Center and radius of the gauge, derived once from its screen area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GaugeGeometry {
    center: Point,
    radius: u32,
}

impl GaugeGeometry {
    /// Fit the largest gauge into `area` that still leaves room for the
    /// boundary labels. `None` if the area is too small to hold the arc.
    pub fn fit(area: Rectangle) -> Option<Self> {
        let side = area.size.width.min(area.size.height);
        let radius = (side / 2).checked_sub(GAUGE_MARGIN)?;
        if radius <= ARC_WIDTH {
            return None;
        }
        Some(Self {
            center: area.center(),
            radius,
        })
    }

    pub const fn center(&self) -> Point { self.center }

    /// Radius of the arc centerline.
    pub const fn radius(&self) -> u32 { self.radius }

    /// Point at `distance` from the center in direction `angle`.
    pub fn point_at(
        &self,
        angle: f32,
        distance: f32,
    ) -> Point {
        Point::new(
            self.center.x + (distance * angle.cos()).round() as i32,
            self.center.y + (distance * angle.sin()).round() as i32,
        )
    }

    /// Square covering the arc stroke and every possible marker position,
    /// shadow included.
    pub fn clear_area(&self) -> Rectangle {
        let marker_reach = MARKER_RADIUS + MARKER_OUTLINE_WIDTH + SHADOW_OFFSET as u32;
        let reach = self.radius + marker_reach.max(ARC_WIDTH / 2 + 1);
        Rectangle::with_center(self.center, Size::new_equal(reach * 2 + 1))
    }
}

// =============================================================================
// Boundary Labels
// =============================================================================

/// Text placed outside the arc at one band boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryLabel {
    pub text: String<8>,
    pub position: Point,
    /// Tangent orientation in radians.
    pub rotation: f32,
}

const LABEL_SPEC: TextSpec = TextSpec::new(Font::Label, LIGHT_GRAY, Align::Center);

// =============================================================================
// Renderer
// =============================================================================

/// Draws the gauge onto a [`Surface`]. Holds only its geometry and the
/// cached label placement.
pub struct GaugeRenderer {
    geometry: GaugeGeometry,
    labels: Vec<BoundaryLabel, BAND_COUNT>,
}

impl GaugeRenderer {
    pub const fn new(geometry: GaugeGeometry) -> Self {
        Self {
            geometry,
            labels: Vec::new(),
        }
    }

    pub const fn geometry(&self) -> &GaugeGeometry { &self.geometry }

    /// Cached boundary labels, empty until placed.
    pub fn labels(&self) -> &[BoundaryLabel] { &self.labels }

    /// Clear the gauge and stroke the six bands end to end.
    ///
    /// Idempotent: always one clear and exactly six strokes.
    pub fn draw_bands<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        surface.clear_region(self.geometry.clear_area(), BLACK);

        let mut start = START_ANGLE;
        for band in &AQI_BANDS {
            let end = angle_for(band.upper_bound);
            surface.stroke_arc(&ArcStroke {
                center: self.geometry.center,
                radius: self.geometry.radius,
                start,
                sweep: end - start,
                width: ARC_WIDTH,
                color: band.color,
            });
            start = end;
        }
    }

    /// Draw the marker at `aqi` on the arc. `None` leaves only the bands,
    /// which is how the gauge shows "no data".
    pub fn draw_marker<S: Surface>(
        &self,
        surface: &mut S,
        aqi: Option<f32>,
    ) {
        let Some(aqi) = aqi else {
            return;
        };
        if band_for(aqi).is_none() {
            debug!(aqi, "AQI outside scale, marker clamped to arc end");
        }

        let center = self.geometry.point_at(angle_for(aqi), self.geometry.radius as f32);
        surface.fill_marker(&Marker {
            center,
            radius: MARKER_RADIUS,
            fill: WHITE,
            outline: BLACK,
            outline_width: MARKER_OUTLINE_WIDTH,
            shadow: Some(Shadow {
                offset: Point::new(SHADOW_OFFSET, SHADOW_OFFSET),
                color: GRAY,
            }),
        });
    }

    /// Compute the boundary labels on first use, then draw them.
    ///
    /// Later calls reuse the cached placement; the labels are a static
    /// annotation of the scale.
    pub fn place_boundary_labels<S: Surface>(
        &mut self,
        surface: &mut S,
    ) {
        if self.labels.is_empty() {
            self.labels = self.compute_labels();
        }
        self.draw_labels(surface);
    }

    /// Draw the cached labels. Does nothing before they are placed.
    pub fn draw_labels<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        for label in &self.labels {
            let spec = TextSpec {
                rotation: label.rotation,
                ..LABEL_SPEC
            };
            surface.draw_text(&label.text, label.position, &spec);
        }
    }

    /// One full pass: bands, cached labels, marker.
    pub fn render<S: Surface>(
        &self,
        surface: &mut S,
        aqi: Option<f32>,
    ) {
        self.draw_bands(surface);
        self.draw_labels(surface);
        self.draw_marker(surface, aqi);
    }

    fn compute_labels(&self) -> Vec<BoundaryLabel, BAND_COUNT> {
        let distance = (self.geometry.radius + LABEL_OFFSET) as f32;
        let mut labels = Vec::new();
        for band in &AQI_BANDS {
            let angle = angle_for(band.upper_bound);
            let mut text = String::new();
            write!(text, "{}", band.upper_bound).ok();
            labels
                .push(BoundaryLabel {
                    text,
                    position: self.geometry.point_at(angle, distance),
                    rotation: angle + FRAC_PI_2,
                })
                .ok();
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bands::AQI_MAX;
    use crate::config::GAUGE_AREA;
    use crate::scale::END_ANGLE;
    use crate::surface::recording::{Op, RecordingSurface};

    fn renderer() -> GaugeRenderer { GaugeRenderer::new(GaugeGeometry::fit(GAUGE_AREA).unwrap()) }

    fn surface() -> RecordingSurface { RecordingSurface::new(Size::new(480, 320)) }

    fn distance(
        a: Point,
        b: Point,
    ) -> f32 {
        let d = a - b;
        ((d.x * d.x + d.y * d.y) as f32).sqrt()
    }

    #[test]
    fn test_fit_rejects_tiny_area() {
        let tiny = Rectangle::new(Point::zero(), Size::new(60, 60));
        assert!(GaugeGeometry::fit(tiny).is_none());
    }

    #[test]
    fn test_fit_leaves_label_margin() {
        let geometry = GaugeGeometry::fit(GAUGE_AREA).unwrap();
        assert_eq!(geometry.radius(), GAUGE_AREA.size.width / 2 - GAUGE_MARGIN);
        assert_eq!(geometry.center(), GAUGE_AREA.center());
    }

    #[test]
    fn test_draw_bands_six_strokes() {
        let gauge = renderer();
        let mut surface = surface();
        gauge.draw_bands(&mut surface);
        assert_eq!(surface.strokes(), 6);
        assert!(matches!(surface.ops[0], Op::Clear(..)), "bands must clear first");
    }

    #[test]
    fn test_draw_bands_idempotent() {
        let gauge = renderer();
        let mut surface = surface();

        gauge.draw_bands(&mut surface);
        let first = surface.take();
        gauge.draw_bands(&mut surface);
        let second = surface.take();

        assert_eq!(first, second, "repeated passes must issue identical operations");
        assert_eq!(second.iter().filter(|op| matches!(op, Op::Arc(_))).count(), 6);
    }

    #[test]
    fn test_bands_are_contiguous() {
        let gauge = renderer();
        let mut surface = surface();
        gauge.draw_bands(&mut surface);

        let arcs: std::vec::Vec<ArcStroke> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Arc(arc) => Some(*arc),
                _ => None,
            })
            .collect();

        assert_eq!(arcs[0].start, START_ANGLE);
        for pair in arcs.windows(2) {
            assert!((pair[0].start + pair[0].sweep - pair[1].start).abs() < 1e-5, "gap between bands");
        }
        let last = arcs[arcs.len() - 1];
        assert!((last.start + last.sweep - END_ANGLE).abs() < 1e-5);
        for (arc, band) in arcs.iter().zip(&AQI_BANDS) {
            assert_eq!(arc.color, band.color);
            assert!(arc.sweep > 0.0);
        }
    }

    #[test]
    fn test_marker_skipped_without_aqi() {
        let gauge = renderer();
        let mut surface = surface();
        gauge.draw_marker(&mut surface, None);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn test_marker_on_arc() {
        let gauge = renderer();
        let mut surface = surface();
        gauge.draw_marker(&mut surface, Some(105.0));

        let markers = surface.markers();
        assert_eq!(markers.len(), 1);
        let geometry = gauge.geometry();
        let expected = geometry.point_at(angle_for(105.0), geometry.radius() as f32);
        assert_eq!(markers[0].center, expected);
        assert!((distance(markers[0].center, geometry.center()) - geometry.radius() as f32).abs() <= 1.0);
        assert_eq!(markers[0].outline, BLACK, "outline contrasts with every band");
        assert!(markers[0].shadow.is_some());
    }

    #[test]
    fn test_marker_clamped_past_scale() {
        let gauge = renderer();
        let mut at_max = surface();
        let mut beyond = surface();
        gauge.draw_marker(&mut at_max, Some(AQI_MAX));
        gauge.draw_marker(&mut beyond, Some(900.0));
        assert_eq!(at_max.markers(), beyond.markers());
    }

    #[test]
    fn test_boundary_labels_placed_once() {
        let mut gauge = renderer();
        let mut surface = surface();
        gauge.place_boundary_labels(&mut surface);

        assert_eq!(surface.texts(), ["50", "100", "150", "200", "300", "500"]);
        let placed = gauge.labels().to_vec();

        gauge.place_boundary_labels(&mut surface);
        assert_eq!(gauge.labels(), placed.as_slice());
    }

    #[test]
    fn test_boundary_labels_outside_arc() {
        let mut gauge = renderer();
        let mut surface = surface();
        gauge.place_boundary_labels(&mut surface);

        let geometry = *gauge.geometry();
        let expected = (geometry.radius() + LABEL_OFFSET) as f32;
        for (label, band) in gauge.labels().iter().zip(&AQI_BANDS) {
            assert!((distance(label.position, geometry.center()) - expected).abs() <= 1.0);
            assert!((label.rotation - (angle_for(band.upper_bound) + FRAC_PI_2)).abs() < 1e-5);
        }
    }

    #[test]
    fn test_render_pass_order() {
        let mut gauge = renderer();
        let mut surface = surface();
        gauge.place_boundary_labels(&mut surface);
        surface.take();

        gauge.render(&mut surface, Some(42.0));
        let ops = surface.take();
        assert!(matches!(ops.first(), Some(Op::Clear(..))));
        assert!(matches!(ops.last(), Some(Op::Marker(_))), "marker drawn on top");
        assert_eq!(ops.iter().filter(|op| matches!(op, Op::Text(..))).count(), 6);
    }

    #[test]
    fn test_clear_area_covers_marker_and_shadow() {
        let gauge = renderer();
        let area = gauge.geometry().clear_area();
        let mut surface = surface();
        for aqi in [0.0, 125.0, 250.0, 375.0, 500.0] {
            gauge.draw_marker(&mut surface, Some(aqi));
        }
        for marker in surface.markers() {
            let reach = (MARKER_RADIUS + MARKER_OUTLINE_WIDTH) as i32 + SHADOW_OFFSET;
            for corner in [
                marker.center + Point::new(reach, reach),
                marker.center - Point::new(reach, reach),
            ] {
                assert!(area.contains(corner), "{corner:?} outside the cleared square");
            }
        }
    }
}
