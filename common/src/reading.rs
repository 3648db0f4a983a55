//! Sensor reading snapshot.
//!
//! A [`Reading`] is an immutable set of optional values keyed by [`FieldKey`].
//! Any subset of keys may be present: sensors go offline per device and per
//! message, and the dashboard hides whatever is missing.

use heapless::String;

/// Capacity of a text value carried by a reading.
pub const RAW_TEXT_CAPACITY: usize = 32;

/// A raw value as delivered by the stream.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String<RAW_TEXT_CAPACITY>),
}

impl RawValue {
    /// Build a text value, `None` if it does not fit.
    pub fn text(value: &str) -> Option<Self> { String::try_from(value).ok().map(Self::Text) }

    /// Numeric interpretation: numbers as-is, text parsed after trimming.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self { Self::Number(value) }
}

/// Every field the dashboard knows about, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Timestamp,
    Aqi,
    // Particulate mass, two sensors
    Pm1_0,
    Pm2_5_0,
    Pm10_0,
    Pm1_1,
    Pm2_5_1,
    Pm10_1,
    // Particle counts per 0.1 L, two sensors
    Count0_3_0,
    Count0_5_0,
    Count1_0_0,
    Count2_5_0,
    Count5_0_0,
    Count10_0,
    Count0_3_1,
    Count0_5_1,
    Count1_0_1,
    Count2_5_1,
    Count5_0_1,
    Count10_1,
    // Ambient
    Temperature,
    RelativeHumidity,
    Pressure,
    Gas,
    Iaq,
    Noise,
    VisibleLight,
    UvIndex,
    // Gas sensors
    Co2,
    Tvoc,
    Hcho,
}

impl FieldKey {
    /// Number of keys.
    pub const COUNT: usize = Self::ALL.len();

    /// All keys in declaration order.
    pub const ALL: [Self; 31] = [
        Self::Timestamp,
        Self::Aqi,
        Self::Pm1_0,
        Self::Pm2_5_0,
        Self::Pm10_0,
        Self::Pm1_1,
        Self::Pm2_5_1,
        Self::Pm10_1,
        Self::Count0_3_0,
        Self::Count0_5_0,
        Self::Count1_0_0,
        Self::Count2_5_0,
        Self::Count5_0_0,
        Self::Count10_0,
        Self::Count0_3_1,
        Self::Count0_5_1,
        Self::Count1_0_1,
        Self::Count2_5_1,
        Self::Count5_0_1,
        Self::Count10_1,
        Self::Temperature,
        Self::RelativeHumidity,
        Self::Pressure,
        Self::Gas,
        Self::Iaq,
        Self::Noise,
        Self::VisibleLight,
        Self::UvIndex,
        Self::Co2,
        Self::Tvoc,
        Self::Hcho,
    ];

    /// Key name used in stream payloads.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Aqi => "aqi",
            Self::Pm1_0 => "pm10_0",
            Self::Pm2_5_0 => "pm25_0",
            Self::Pm10_0 => "pm100_0",
            Self::Pm1_1 => "pm10_1",
            Self::Pm2_5_1 => "pm25_1",
            Self::Pm10_1 => "pm100_1",
            Self::Count0_3_0 => "pm03plus_0",
            Self::Count0_5_0 => "pm05plus_0",
            Self::Count1_0_0 => "pm10plus_0",
            Self::Count2_5_0 => "pm25plus_0",
            Self::Count5_0_0 => "pm50plus_0",
            Self::Count10_0 => "pm100plus_0",
            Self::Count0_3_1 => "pm03plus_1",
            Self::Count0_5_1 => "pm05plus_1",
            Self::Count1_0_1 => "pm10plus_1",
            Self::Count2_5_1 => "pm25plus_1",
            Self::Count5_0_1 => "pm50plus_1",
            Self::Count10_1 => "pm100plus_1",
            Self::Temperature => "temperature",
            Self::RelativeHumidity => "relative_humidity",
            Self::Pressure => "pressure",
            Self::Gas => "gas",
            Self::Iaq => "iaq",
            Self::Noise => "noise",
            Self::VisibleLight => "visible_light_lux",
            Self::UvIndex => "uv_index",
            Self::Co2 => "co2",
            Self::Tvoc => "tvoc",
            Self::Hcho => "hcho",
        }
    }

    /// Look up a key by payload name. Older payloads send `humidity`.
    pub fn from_wire(name: &str) -> Option<Self> {
        if name == "humidity" {
            return Some(Self::RelativeHumidity);
        }
        Self::ALL.into_iter().find(|key| key.wire_name() == name)
    }

    const fn index(self) -> usize { self as usize }
}

/// Snapshot of sensor state at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    values: [Option<RawValue>; FieldKey::COUNT],
}

impl Reading {
    /// A reading with every field absent. Used to seed the display at startup.
    pub const fn empty() -> Self {
        Self {
            values: [const { None }; FieldKey::COUNT],
        }
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(
        mut self,
        key: FieldKey,
        value: impl Into<RawValue>,
    ) -> Self {
        self.set(key, value.into());
        self
    }

    /// Set a field.
    pub fn set(
        &mut self,
        key: FieldKey,
        value: RawValue,
    ) {
        self.values[key.index()] = Some(value);
    }

    /// Raw value of a field, `None` when absent.
    pub fn get(
        &self,
        key: FieldKey,
    ) -> Option<&RawValue> {
        self.values[key.index()].as_ref()
    }

    /// Numeric AQI at full precision, `None` when absent, not a number or
    /// not finite.
    pub fn aqi_value(&self) -> Option<f64> {
        self.get(FieldKey::Aqi)
            .and_then(RawValue::as_f64)
            .filter(|aqi| aqi.is_finite())
    }

    /// Numeric AQI narrowed for the gauge math.
    pub fn aqi(&self) -> Option<f32> { self.aqi_value().map(|aqi| aqi as f32) }

    /// Number of present fields.
    pub fn len(&self) -> usize { self.values.iter().filter(|value| value.is_some()).count() }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl Default for Reading {
    fn default() -> Self { Self::empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_indexed_in_order() {
        for (i, key) in FieldKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), i, "{key:?} is out of order in ALL");
        }
    }

    #[test]
    fn test_wire_names_round_trip() {
        for key in FieldKey::ALL {
            assert_eq!(FieldKey::from_wire(key.wire_name()), Some(key));
        }
    }

    #[test]
    fn test_humidity_alias() {
        assert_eq!(FieldKey::from_wire("humidity"), Some(FieldKey::RelativeHumidity));
        assert_eq!(FieldKey::from_wire("radon"), None);
    }

    #[test]
    fn test_empty_reading() {
        let reading = Reading::empty();
        assert!(reading.is_empty());
        assert!(reading.get(FieldKey::Aqi).is_none());
        assert_eq!(reading.aqi(), None);
    }

    #[test]
    fn test_sparse_reading() {
        let reading = Reading::empty().with(FieldKey::Aqi, 75.0);
        assert_eq!(reading.len(), 1);
        assert_eq!(reading.aqi(), Some(75.0));
        assert!(reading.get(FieldKey::Temperature).is_none());
    }

    #[test]
    fn test_aqi_from_text() {
        let text = RawValue::text(" 105 ").unwrap();
        assert_eq!(Reading::empty().with(FieldKey::Aqi, text).aqi(), Some(105.0));

        let garbage = RawValue::text("high").unwrap();
        assert_eq!(Reading::empty().with(FieldKey::Aqi, garbage).aqi(), None);
    }

    #[test]
    fn test_text_capacity() {
        assert!(RawValue::text("16/10/2026, 14:03:22").is_some());
        assert!(RawValue::text(&"x".repeat(RAW_TEXT_CAPACITY + 1)).is_none());
    }
}
