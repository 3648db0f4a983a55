//! Named output containers and their visible state.
//!
//! A [`Container`] is a static layout entry: where a readout goes and how it
//! is typeset. The [`Panel`] binds the field table to those containers once at
//! startup and then keeps, per container, whether it is shown and what text
//! it holds. The controller mutates that state with [`Slot::apply`] and asks
//! the panel to draw it.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::pixelcolor::Rgb565;
use heapless::Vec;

use crate::colors::{BLACK, HEADER_BG, LIGHT_GRAY, WHITE};
use crate::config::{
    AQI_LABEL_AREA, AQI_VALUE_AREA, CELL_PADDING, HEADER_HEIGHT, HEADER_TITLE_X, SCREEN_WIDTH, TIMESTAMP_AREA,
    grid_cell,
};
use crate::error::ConfigError;
use crate::fields::{AQI_LABEL_CONTAINER, AQI_VALUE_SPEC, FieldSpec, TIMESTAMP_SPEC};
use crate::reconcile::{DisplayText, Reconciled};
use crate::styles::{Align, Font};
use crate::surface::{Surface, TextSpec};

/// Upper bound on field table entries a panel can bind.
pub const MAX_FIELDS: usize = 32;

// =============================================================================
// Layout
// =============================================================================

/// Static description of one output target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Container {
    pub id: &'static str,
    /// Caption drawn at the left edge, if any.
    pub label: Option<&'static str>,
    pub area: Rectangle,
    /// Alignment of the value text inside `area`.
    pub align: Align,
    pub font: Font,
    pub color: Rgb565,
    pub background: Rgb565,
}

impl Container {
    const fn cell(
        id: &'static str,
        label: &'static str,
        index: u32,
    ) -> Self {
        Self {
            id,
            label: Some(label),
            area: grid_cell(index),
            align: Align::Right,
            font: Font::Label,
            color: WHITE,
            background: BLACK,
        }
    }

    /// Anchor point for text with the given alignment, vertically centered.
    pub fn anchor(
        &self,
        align: Align,
    ) -> Point {
        let y = self.area.center().y;
        let x = match align {
            Align::Left => self.area.top_left.x + CELL_PADDING,
            Align::Center => self.area.center().x,
            Align::Right => self.area.top_left.x + self.area.size.width as i32 - 1 - CELL_PADDING,
        };
        Point::new(x, y)
    }
}

/// Dashboard layout. Cell 11 stays empty so the paired sensor readouts line
/// up in columns.
pub static CONTAINERS: [Container; 32] = [
    Container {
        id: "date-time",
        label: None,
        area: TIMESTAMP_AREA,
        align: Align::Right,
        font: Font::Label,
        color: WHITE,
        background: HEADER_BG,
    },
    Container {
        id: "aqi-value",
        label: None,
        area: AQI_VALUE_AREA,
        align: Align::Center,
        font: Font::Value,
        color: WHITE,
        background: BLACK,
    },
    Container {
        id: "aqi-label",
        label: None,
        area: AQI_LABEL_AREA,
        align: Align::Center,
        font: Font::Label,
        color: WHITE,
        background: BLACK,
    },
    Container::cell("temp-value", "Temp", 0),
    Container::cell("humidity-value", "Humidity", 1),
    Container::cell("pressure-value", "Pressure", 2),
    Container::cell("gas-value", "Gas", 3),
    Container::cell("iaq-value", "IAQ", 4),
    Container::cell("noise-value", "Noise", 5),
    Container::cell("light-value", "Light", 6),
    Container::cell("uv-value", "UV index", 7),
    Container::cell("co2", "CO2", 8),
    Container::cell("tvoc", "TVOC", 9),
    Container::cell("hcho", "HCHO", 10),
    Container::cell("pm1.0_0", "PM1.0 A", 12),
    Container::cell("pm1.0_1", "PM1.0 B", 13),
    Container::cell("pm2.5_0", "PM2.5 A", 14),
    Container::cell("pm2.5_1", "PM2.5 B", 15),
    Container::cell("pm10_0", "PM10 A", 16),
    Container::cell("pm10_1", "PM10 B", 17),
    Container::cell("pm0.3plus_0", ">0.3µm A", 18),
    Container::cell("pm0.3plus_1", ">0.3µm B", 19),
    Container::cell("pm0.5plus_0", ">0.5µm A", 20),
    Container::cell("pm0.5plus_1", ">0.5µm B", 21),
    Container::cell("pm1.0plus_0", ">1.0µm A", 22),
    Container::cell("pm1.0plus_1", ">1.0µm B", 23),
    Container::cell("pm2.5plus_0", ">2.5µm A", 24),
    Container::cell("pm2.5plus_1", ">2.5µm B", 25),
    Container::cell("pm5.0plus_0", ">5.0µm A", 26),
    Container::cell("pm5.0plus_1", ">5.0µm B", 27),
    Container::cell("pm10plus_0", ">10µm A", 28),
    Container::cell("pm10plus_1", ">10µm B", 29),
];

// =============================================================================
// Slots
// =============================================================================

/// Visibility and text of one bound container.
#[derive(Clone, Debug)]
pub struct Slot {
    container: &'static Container,
    visible: bool,
    text: DisplayText,
}

impl Slot {
    /// Bound slots start hidden.
    pub const fn new(container: &'static Container) -> Self {
        Self {
            container,
            visible: false,
            text: DisplayText::new(),
        }
    }

    pub const fn container(&self) -> &'static Container { self.container }

    pub const fn is_visible(&self) -> bool { self.visible }

    /// Text currently shown, `None` while hidden.
    pub fn text(&self) -> Option<&str> { self.visible.then_some(self.text.as_str()) }

    /// Apply one reconciliation result. Touches the visibility flag and, when
    /// visible, the text buffer. Hiding keeps the stale text out of sight.
    pub fn apply(
        &mut self,
        update: Reconciled,
    ) {
        match update {
            Reconciled::Hidden => self.visible = false,
            Reconciled::Visible(text) => {
                self.visible = true;
                self.text = text;
            }
        }
    }

    /// Clear the container, then draw caption and value when visible. Text is
    /// clipped to the container so the next clear erases all of it.
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        let container = self.container;
        surface.clear_region(container.area, container.background);
        if !self.visible {
            return;
        }

        if let Some(label) = container.label {
            surface.draw_text(
                label,
                container.anchor(Align::Left),
                &TextSpec::new(Font::Label, LIGHT_GRAY, Align::Left).clipped(container.area),
            );
        }
        surface.draw_text(
            &self.text,
            container.anchor(container.align),
            &TextSpec::new(container.font, container.color, container.align).clipped(container.area),
        );
    }
}

/// A slot together with the field spec feeding it.
#[derive(Clone, Debug)]
pub struct FieldSlot {
    pub spec: &'static FieldSpec,
    pub slot: Slot,
}

// =============================================================================
// Panel
// =============================================================================

/// Every output container bound for the lifetime of the dashboard.
pub struct Panel {
    pub(crate) timestamp: FieldSlot,
    pub(crate) aqi_value: FieldSlot,
    pub(crate) aqi_label: Slot,
    pub(crate) fields: Vec<FieldSlot, MAX_FIELDS>,
}

impl Panel {
    /// Bind the field table to `layout`, checking every container exists,
    /// is used once and lies within `bounds`.
    pub fn resolve(
        layout: &'static [Container],
        specs: &'static [FieldSpec],
        bounds: Rectangle,
    ) -> Result<Self, ConfigError> {
        if specs.len() > MAX_FIELDS {
            return Err(ConfigError::TooManyFields(specs.len()));
        }

        let mut bound: Vec<&'static str, { MAX_FIELDS + 3 }> = Vec::new();
        let mut bind = |id: &'static str| -> Result<Slot, ConfigError> {
            if bound.contains(&id) {
                return Err(ConfigError::DuplicateContainer(id));
            }
            let container = find(layout, id, bounds)?;
            bound.push(id).map_err(|_| ConfigError::TooManyFields(specs.len()))?;
            Ok(Slot::new(container))
        };

        let timestamp = FieldSlot {
            spec: &TIMESTAMP_SPEC,
            slot: bind(TIMESTAMP_SPEC.container)?,
        };
        let aqi_value = FieldSlot {
            spec: &AQI_VALUE_SPEC,
            slot: bind(AQI_VALUE_SPEC.container)?,
        };
        let aqi_label = bind(AQI_LABEL_CONTAINER)?;

        let mut fields = Vec::new();
        for spec in specs {
            let slot = bind(spec.container)?;
            fields
                .push(FieldSlot { spec, slot })
                .map_err(|_| ConfigError::TooManyFields(specs.len()))?;
        }

        Ok(Self {
            timestamp,
            aqi_value,
            aqi_label,
            fields,
        })
    }

    /// Look up a bound container by id.
    pub fn slot(
        &self,
        id: &str,
    ) -> Option<&Slot> {
        self.slots().find(|slot| slot.container.id == id)
    }

    /// Every bound slot: timestamp, AQI value, AQI label, then the fields in
    /// table order.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        [&self.timestamp.slot, &self.aqi_value.slot, &self.aqi_label]
            .into_iter()
            .chain(self.fields.iter().map(|field| &field.slot))
    }

    /// Redraw every container.
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
    ) {
        for slot in self.slots() {
            slot.draw(surface);
        }
    }
}

fn find(
    layout: &'static [Container],
    id: &'static str,
    bounds: Rectangle,
) -> Result<&'static Container, ConfigError> {
    let container = layout
        .iter()
        .find(|container| container.id == id)
        .ok_or(ConfigError::MissingContainer(id))?;
    if !contains(bounds, container.area) {
        return Err(ConfigError::ContainerOutOfBounds(id));
    }
    Ok(container)
}

/// True when `inner` lies entirely within `outer`.
pub(crate) fn contains(
    outer: Rectangle,
    inner: Rectangle,
) -> bool {
    outer.intersection(&inner) == inner
}

/// Header bar with the dashboard title. Static chrome, drawn once.
pub fn draw_header<S: Surface>(
    surface: &mut S,
    title: &str,
) {
    let bar = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, HEADER_HEIGHT));
    surface.clear_region(bar, HEADER_BG);
    surface.draw_text(
        title,
        Point::new(HEADER_TITLE_X, HEADER_HEIGHT as i32 / 2),
        &TextSpec::new(Font::Title, WHITE, Align::Left),
    );
}
