//! Synthetic readings for running the dashboard without a live feed.
//!
//! Every metric follows its own slow sine so the gauge marker sweeps across
//! the bands and the readouts keep changing.

use aqi_dashboard_common::{FieldKey, RawValue, Reading};

/// Phase advance per generated reading.
const STEP: f64 = 1.0;

/// Stateful generator, one reading per timer tick.
#[derive(Debug, Default)]
pub struct DemoFeed {
    t: f64,
}

impl DemoFeed {
    pub const fn new() -> Self { Self { t: 0.0 } }

    /// Next reading, stamped with `unix_secs` as a UTC clock time.
    pub fn next_reading(
        &mut self,
        unix_secs: u64,
    ) -> Reading {
        let t = self.t;
        self.t += STEP;

        let mut reading = Reading::empty()
            .with(FieldKey::Aqi, fake_signal(t, 5.0, 330.0, 0.07).round())
            .with(FieldKey::Temperature, fake_signal(t, 18.0, 26.0, 0.02))
            .with(FieldKey::RelativeHumidity, fake_signal(t, 30.0, 60.0, 0.03))
            .with(FieldKey::Pressure, fake_signal(t, 1005.0, 1020.0, 0.01))
            .with(FieldKey::Gas, fake_signal(t, 600.0, 150_000.0, 0.05).round())
            .with(FieldKey::Iaq, fake_signal(t, 25.0, 200.0, 0.04))
            .with(FieldKey::Noise, fake_signal(t, 35.0, 70.0, 0.3))
            .with(FieldKey::VisibleLight, fake_signal(t, 0.0, 800.0, 0.02))
            .with(FieldKey::UvIndex, fake_signal(t, 0.0, 6.0, 0.02))
            .with(FieldKey::Co2, fake_signal(t, 420.0, 1400.0, 0.04))
            .with(FieldKey::Tvoc, fake_signal(t, 0.05, 0.6, 0.05))
            .with(FieldKey::Hcho, fake_signal(t, 0.01, 0.08, 0.05));

        // Two particle sensors, the second reading slightly high.
        let pm = [
            (FieldKey::Pm1_0, FieldKey::Pm1_1, 2.0, 30.0),
            (FieldKey::Pm2_5_0, FieldKey::Pm2_5_1, 3.0, 55.0),
            (FieldKey::Pm10_0, FieldKey::Pm10_1, 4.0, 80.0),
            (FieldKey::Count0_3_0, FieldKey::Count0_3_1, 300.0, 6000.0),
            (FieldKey::Count0_5_0, FieldKey::Count0_5_1, 90.0, 1800.0),
            (FieldKey::Count1_0_0, FieldKey::Count1_0_1, 20.0, 400.0),
            (FieldKey::Count2_5_0, FieldKey::Count2_5_1, 2.0, 60.0),
            (FieldKey::Count5_0_0, FieldKey::Count5_0_1, 0.0, 12.0),
            (FieldKey::Count10_0, FieldKey::Count10_1, 0.0, 4.0),
        ];
        for (a, b, min, max) in pm {
            let value = fake_signal(t, min, max, 0.07);
            reading.set(a, RawValue::Number(value.round()));
            reading.set(b, RawValue::Number((value * 1.08).round()));
        }

        if let Some(stamp) = RawValue::text(&clock_time(unix_secs)) {
            reading.set(FieldKey::Timestamp, stamp);
        }
        reading
    }
}

fn fake_signal(
    t: f64,
    min: f64,
    max: f64,
    freq: f64,
) -> f64 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// `HH:MM:SS UTC` for a Unix timestamp.
fn clock_time(unix_secs: u64) -> String {
    let secs = unix_secs % 86_400;
    format!("{:02}:{:02}:{:02} UTC", secs / 3600, secs / 60 % 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_signal_bounds() {
        for step in 0..500 {
            let value = fake_signal(f64::from(step) * 0.37, 10.0, 20.0, 0.5);
            assert!((10.0..=20.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn test_readings_complete() {
        let mut feed = DemoFeed::new();
        let reading = feed.next_reading(0);
        for key in FieldKey::ALL {
            assert!(reading.get(key).is_some(), "{key:?} missing from demo reading");
        }
    }

    #[test]
    fn test_aqi_stays_on_scale() {
        let mut feed = DemoFeed::new();
        for _ in 0..200 {
            let aqi = feed.next_reading(0).aqi().unwrap();
            assert!((0.0..=500.0).contains(&aqi));
        }
    }

    #[test]
    fn test_readings_change() {
        let mut feed = DemoFeed::new();
        let first = feed.next_reading(0);
        let second = feed.next_reading(0);
        assert_ne!(first, second);
    }

    #[test]
    fn test_clock_time() {
        assert_eq!(clock_time(0), "00:00:00 UTC");
        assert_eq!(clock_time(86_400 + 3_723), "01:02:03 UTC");
    }
}
