//! Layout and gauge configuration constants.
//!
//! # Pre-computed Layout Constants
//!
//! Every container rectangle and the gauge area derive from the constants below
//! at compile time. `const` assertions keep the grid inside the screen.
//!
//! ```text
//! +------------------------------------------------------------+
//! | title                                          date-time   |  header
//! +-----------------------+------------------------------------+
//! |                       |  Temp      23.5 °C | Humidity  40 %|
//! |        gauge          |  Pressure ...      | Gas     ...   |
//! |     (aqi-value)       |  ...               | ...           |
//! |      aqi-label        |                    |               |
//! +-----------------------+------------------------------------+
//! ```

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (3.5" 480x320 TFT).
pub const SCREEN_WIDTH: u32 = 480;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Header bar height in pixels.
pub const HEADER_HEIGHT: u32 = 26;

/// Left padding of the header title.
pub const HEADER_TITLE_X: i32 = 6;

/// Inner horizontal padding of every text container.
pub const CELL_PADDING: i32 = 4;

// =============================================================================
// Gauge Configuration
// =============================================================================

/// Square region reserved for the gauge, left of the readout grid.
pub const GAUGE_AREA: Rectangle = Rectangle::new(Point::new(0, 30), Size::new(220, 220));

/// Stroke width of the band arcs.
pub const ARC_WIDTH: u32 = 15;

/// Distance of the boundary labels outside the arc radius.
pub const LABEL_OFFSET: u32 = 20;

/// Space kept between the arc radius and the edge of the gauge area.
/// Leaves room for the boundary labels.
pub const GAUGE_MARGIN: u32 = LABEL_OFFSET + 8;

/// Marker disc radius.
pub const MARKER_RADIUS: u32 = 8;

/// Marker outline width.
pub const MARKER_OUTLINE_WIDTH: u32 = 2;

/// Drop shadow offset of the marker, both axes.
pub const SHADOW_OFFSET: i32 = 2;

const _: () = assert!(GAUGE_AREA.size.width / 2 > GAUGE_MARGIN + ARC_WIDTH);
const _: () = assert!(GAUGE_AREA.size.height / 2 > GAUGE_MARGIN + ARC_WIDTH);

// =============================================================================
// Gauge Readouts
// =============================================================================

/// Numeric AQI readout in the middle of the ring.
pub const AQI_VALUE_AREA: Rectangle = Rectangle::new(Point::new(50, 123), Size::new(120, 32));

/// Health category below the gauge opening.
pub const AQI_LABEL_AREA: Rectangle = Rectangle::new(Point::new(0, 254), Size::new(220, 16));

/// Timestamp, right half of the header.
pub const TIMESTAMP_AREA: Rectangle = Rectangle::new(Point::new(240, 0), Size::new(240, HEADER_HEIGHT));

// =============================================================================
// Readout Grid
// =============================================================================

/// Left edge of the readout grid.
pub const GRID_X: i32 = 224;

/// Top edge of the readout grid.
pub const GRID_Y: i32 = 30;

/// Grid columns.
pub const GRID_COLUMNS: u32 = 2;

/// Grid rows.
pub const GRID_ROWS: u32 = 16;

/// Width of one readout cell.
pub const CELL_WIDTH: u32 = 128;

/// Height of one readout cell.
pub const CELL_HEIGHT: u32 = 18;

const _: () = assert!(GRID_X as u32 + GRID_COLUMNS * CELL_WIDTH <= SCREEN_WIDTH);
const _: () = assert!(GRID_Y as u32 + GRID_ROWS * CELL_HEIGHT <= SCREEN_HEIGHT);

/// Rectangle of grid cell `index`, filled row by row.
pub const fn grid_cell(index: u32) -> Rectangle {
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    Rectangle::new(
        Point::new(
            GRID_X + (column * CELL_WIDTH) as i32,
            GRID_Y + (row * CELL_HEIGHT) as i32,
        ),
        Size::new(CELL_WIDTH, CELL_HEIGHT),
    )
}
