//! Drawing seam between the dashboard and the display.
//!
//! The gauge and the panel only speak [`Surface`]: an immediate-mode 2D context
//! with region clears, stroked arcs, a filled marker disc and text. [`Canvas`]
//! implements it for any `embedded-graphics` target, so the same code drives the
//! desktop simulator window and a real TFT.
//!
//! All angles are radians, clockwise from the positive x axis (y points down).
//! Draw errors from the underlying target are discarded: a failed pixel write is
//! not something the dashboard can recover from mid-frame.

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Arc, Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle},
    text::Text,
};
use heapless::String;

use crate::styles::{Align, Font};

/// A stroked arc segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcStroke {
    pub center: Point,
    pub radius: u32,
    /// Start angle in radians.
    pub start: f32,
    /// Clockwise sweep in radians.
    pub sweep: f32,
    pub width: u32,
    pub color: Rgb565,
}

/// Drop shadow under a filled shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shadow {
    pub offset: Point,
    pub color: Rgb565,
}

/// Filled disc with an outline, used for the gauge marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub center: Point,
    pub radius: u32,
    pub fill: Rgb565,
    pub outline: Rgb565,
    pub outline_width: u32,
    pub shadow: Option<Shadow>,
}

/// How a piece of text is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextSpec {
    pub font: Font,
    pub color: Rgb565,
    pub align: Align,
    /// Rotation hint in radians. Surfaces that cannot rotate glyphs draw upright.
    pub rotation: f32,
    /// Glyph pixels outside this area are dropped.
    pub clip: Option<Rectangle>,
}

impl TextSpec {
    /// Upright text.
    pub const fn new(
        font: Font,
        color: Rgb565,
        align: Align,
    ) -> Self {
        Self {
            font,
            color,
            align,
            rotation: 0.0,
            clip: None,
        }
    }

    /// Same text, clipped to `area`.
    #[must_use]
    pub const fn clipped(
        self,
        area: Rectangle,
    ) -> Self {
        Self {
            clip: Some(area),
            ..self
        }
    }
}

/// 2D immediate-mode drawing context.
pub trait Surface {
    /// Drawable area. Read once at startup to derive the layout.
    fn bounds(&self) -> Rectangle;

    /// Fill `area` with `color`, erasing whatever was there.
    fn clear_region(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    );

    /// Stroke one arc segment.
    fn stroke_arc(
        &mut self,
        arc: &ArcStroke,
    );

    /// Draw the marker disc, shadow first.
    fn fill_marker(
        &mut self,
        marker: &Marker,
    );

    /// Draw `text` anchored at `anchor` (vertically centered on it).
    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        spec: &TextSpec,
    );
}

// =============================================================================
// embedded-graphics Canvas
// =============================================================================

/// Capacity of the transliteration buffer used by [`Canvas::draw_text`].
const GLYPH_BUFFER: usize = 64;

/// [`Surface`] over any `embedded-graphics` RGB565 draw target.
pub struct Canvas<D> {
    target: D,
}

impl<D> Canvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub const fn new(target: D) -> Self { Self { target } }

    /// Borrow the wrapped target, e.g. to push it to a window.
    pub const fn target(&self) -> &D { &self.target }
}

impl<D> Surface for Canvas<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn bounds(&self) -> Rectangle { self.target.bounding_box() }

    fn clear_region(
        &mut self,
        area: Rectangle,
        color: Rgb565,
    ) {
        self.target.fill_solid(&area, color).ok();
    }

    fn stroke_arc(
        &mut self,
        arc: &ArcStroke,
    ) {
        Arc::with_center(
            arc.center,
            arc.radius * 2,
            Angle::from_radians(arc.start),
            Angle::from_radians(arc.sweep),
        )
        .into_styled(PrimitiveStyle::with_stroke(arc.color, arc.width))
        .draw(&mut self.target)
        .ok();
    }

    fn fill_marker(
        &mut self,
        marker: &Marker,
    ) {
        let diameter = marker.radius * 2;

        if let Some(shadow) = marker.shadow {
            Circle::with_center(marker.center + shadow.offset, diameter)
                .into_styled(PrimitiveStyle::with_fill(shadow.color))
                .draw(&mut self.target)
                .ok();
        }

        let style = PrimitiveStyleBuilder::new()
            .fill_color(marker.fill)
            .stroke_color(marker.outline)
            .stroke_width(marker.outline_width)
            .build();
        Circle::with_center(marker.center, diameter)
            .into_styled(style)
            .draw(&mut self.target)
            .ok();
    }

    fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        spec: &TextSpec,
    ) {
        let glyphs = transliterate(text);
        let character_style = MonoTextStyle::new(spec.font.mono(), spec.color);
        let styled = Text::with_text_style(&glyphs, anchor, character_style, spec.align.text_style());
        match spec.clip {
            Some(area) => styled.draw(&mut self.target.clipped(&area)).ok(),
            None => styled.draw(&mut self.target).ok(),
        };
    }
}

/// Replace characters the ISO 8859-1 fonts lack with ASCII spellings.
fn transliterate(text: &str) -> String<GLYPH_BUFFER> {
    let mut out = String::new();
    for c in text.chars() {
        let pushed = match c {
            'Ω' => out.push_str("ohm"),
            _ => out.push(c),
        };
        if pushed.is_err() {
            break;
        }
    }
    out
}

// =============================================================================
// Recording Surface (tests)
// =============================================================================

/// Test double that records every operation instead of drawing.
#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(Rectangle, Rgb565),
        Arc(ArcStroke),
        Marker(Marker),
        Text(std::string::String, Point, TextSpec),
    }

    pub struct RecordingSurface {
        pub bounds: Rectangle,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new(size: Size) -> Self {
            Self {
                bounds: Rectangle::new(Point::zero(), size),
                ops: Vec::new(),
            }
        }

        pub fn strokes(&self) -> usize { self.ops.iter().filter(|op| matches!(op, Op::Arc(_))).count() }

        pub fn markers(&self) -> Vec<Marker> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Marker(marker) => Some(*marker),
                    _ => None,
                })
                .collect()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text, ..) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn take(&mut self) -> Vec<Op> { std::mem::take(&mut self.ops) }
    }

    /// In-memory RGB565 pixel buffer, for checking what [`Canvas`] puts on
    /// screen.
    pub struct Framebuffer {
        size: Size,
        pixels: Vec<Rgb565>,
    }

    impl Framebuffer {
        pub fn new(size: Size) -> Self {
            Self {
                size,
                pixels: vec![Rgb565::BLACK; (size.width * size.height) as usize],
            }
        }

        pub fn pixel(
            &self,
            point: Point,
        ) -> Rgb565 {
            self.pixels[(point.y as u32 * self.size.width + point.x as u32) as usize]
        }

        /// Points in `area` whose color is not black.
        pub fn lit_in(
            &self,
            area: Rectangle,
        ) -> usize {
            area.points().filter(|&point| self.pixel(point) != Rgb565::BLACK).count()
        }

        /// Non-black points outside `area`.
        pub fn lit_outside(
            &self,
            area: Rectangle,
        ) -> usize {
            self.bounding_box()
                .points()
                .filter(|&point| !area.contains(point) && self.pixel(point) != Rgb565::BLACK)
                .count()
        }
    }

    impl OriginDimensions for Framebuffer {
        fn size(&self) -> Size { self.size }
    }

    impl DrawTarget for Framebuffer {
        type Color = Rgb565;
        type Error = core::convert::Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            let bounds = self.bounding_box();
            for Pixel(point, color) in pixels {
                if bounds.contains(point) {
                    let index = (point.y as u32 * self.size.width + point.x as u32) as usize;
                    self.pixels[index] = color;
                }
            }
            Ok(())
        }
    }

    impl Surface for RecordingSurface {
        fn bounds(&self) -> Rectangle { self.bounds }

        fn clear_region(
            &mut self,
            area: Rectangle,
            color: Rgb565,
        ) {
            self.ops.push(Op::Clear(area, color));
        }

        fn stroke_arc(
            &mut self,
            arc: &ArcStroke,
        ) {
            self.ops.push(Op::Arc(*arc));
        }

        fn fill_marker(
            &mut self,
            marker: &Marker,
        ) {
            self.ops.push(Op::Marker(*marker));
        }

        fn draw_text(
            &mut self,
            text: &str,
            anchor: Point,
            spec: &TextSpec,
        ) {
            self.ops.push(Op::Text(text.into(), anchor, *spec));
        }
    }
}
