//! Static field table.
//!
//! One [`FieldSpec`] per readout maps a reading key to the container that
//! shows it, together with its unit and formatting rule. The table is the only
//! place that knows which metrics the dashboard displays; the reconciler and
//! the controller just walk it.

use crate::reading::FieldKey;

/// How a present value is turned into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// Stringified as delivered.
    Verbatim,
    /// Parsed as a number and shown with exactly this many fractional digits.
    Fixed(u8),
    /// Ohms below 1000, kilo-ohms with one decimal from 1000 up.
    Resistance,
}

/// Declarative description of one displayed metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// Reading key the value is looked up by.
    pub key: FieldKey,
    /// Id of the container showing the value.
    pub container: &'static str,
    /// Unit suffix, appended after a space.
    pub unit: Option<&'static str>,
    pub format: ValueFormat,
}

impl FieldSpec {
    const fn new(
        key: FieldKey,
        container: &'static str,
        unit: Option<&'static str>,
        format: ValueFormat,
    ) -> Self {
        Self {
            key,
            container,
            unit,
            format,
        }
    }
}

const MASS: Option<&str> = Some("µg/m³");

/// Timestamp readout in the header.
pub static TIMESTAMP_SPEC: FieldSpec = FieldSpec::new(FieldKey::Timestamp, "date-time", None, ValueFormat::Verbatim);

/// Numeric AQI readout in the middle of the gauge.
pub static AQI_VALUE_SPEC: FieldSpec = FieldSpec::new(FieldKey::Aqi, "aqi-value", None, ValueFormat::Verbatim);

/// Container showing the AQI health category.
pub const AQI_LABEL_CONTAINER: &str = "aqi-label";

/// Every metric readout, in display order.
pub static FIELD_SPECS: [FieldSpec; 29] = [
    FieldSpec::new(FieldKey::Temperature, "temp-value", Some("°C"), ValueFormat::Fixed(1)),
    FieldSpec::new(FieldKey::RelativeHumidity, "humidity-value", Some("%"), ValueFormat::Fixed(1)),
    FieldSpec::new(FieldKey::Pressure, "pressure-value", Some("hPa"), ValueFormat::Fixed(1)),
    FieldSpec::new(FieldKey::Gas, "gas-value", None, ValueFormat::Resistance),
    FieldSpec::new(FieldKey::Iaq, "iaq-value", None, ValueFormat::Fixed(1)),
    FieldSpec::new(FieldKey::Noise, "noise-value", Some("dB"), ValueFormat::Fixed(1)),
    FieldSpec::new(FieldKey::VisibleLight, "light-value", Some("lx"), ValueFormat::Fixed(0)),
    FieldSpec::new(FieldKey::UvIndex, "uv-value", None, ValueFormat::Fixed(1)),
    FieldSpec::new(FieldKey::Co2, "co2", Some("ppm"), ValueFormat::Fixed(0)),
    FieldSpec::new(FieldKey::Tvoc, "tvoc", Some("mg/m³"), ValueFormat::Fixed(2)),
    FieldSpec::new(FieldKey::Hcho, "hcho", Some("mg/m³"), ValueFormat::Fixed(3)),
    FieldSpec::new(FieldKey::Pm1_0, "pm1.0_0", MASS, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Pm1_1, "pm1.0_1", MASS, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Pm2_5_0, "pm2.5_0", MASS, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Pm2_5_1, "pm2.5_1", MASS, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Pm10_0, "pm10_0", MASS, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Pm10_1, "pm10_1", MASS, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count0_3_0, "pm0.3plus_0", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count0_3_1, "pm0.3plus_1", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count0_5_0, "pm0.5plus_0", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count0_5_1, "pm0.5plus_1", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count1_0_0, "pm1.0plus_0", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count1_0_1, "pm1.0plus_1", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count2_5_0, "pm2.5plus_0", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count2_5_1, "pm2.5plus_1", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count5_0_0, "pm5.0plus_0", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count5_0_1, "pm5.0plus_1", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count10_0, "pm10plus_0", None, ValueFormat::Verbatim),
    FieldSpec::new(FieldKey::Count10_1, "pm10plus_1", None, ValueFormat::Verbatim),
];
