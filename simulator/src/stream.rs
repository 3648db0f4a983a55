//! JSON-lines stream adapter.
//!
//! Each line carries one frame. The envelope form is
//! `{"type": "data", "payload": {...}}`; `notification` frames are accepted
//! and dropped; an object without `type` is taken as a bare reading. Decoding
//! runs on a reader thread and the render loop drains the channel.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use aqi_dashboard_common::{FieldKey, RawValue, Reading};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, trace, warn};

/// A frame that cannot be turned into a reading.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("malformed frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("data frame without an object payload")]
    MissingPayload,

    #[error("unknown frame type `{0}`")]
    UnknownType(String),
}

/// A decoded frame.
#[derive(Debug, PartialEq)]
pub enum Frame {
    Data(Reading),
    Notification,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    payload: Option<Value>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

/// Decode one line into a frame.
pub fn decode_frame(line: &str) -> Result<Frame, FrameError> {
    let envelope: Envelope = serde_json::from_str(line)?;
    match envelope.kind.as_deref() {
        None => Ok(Frame::Data(reading_from(&envelope.fields))),
        Some("data") => match envelope.payload {
            Some(Value::Object(payload)) => Ok(Frame::Data(reading_from(&payload))),
            _ => Err(FrameError::MissingPayload),
        },
        Some("notification") => Ok(Frame::Notification),
        Some(other) => Err(FrameError::UnknownType(other.to_owned())),
    }
}

/// Map known keys to reading fields. `null` means absent; only numbers and
/// strings are kept.
fn reading_from(object: &Map<String, Value>) -> Reading {
    let mut reading = Reading::empty();
    for (name, value) in object {
        let Some(key) = FieldKey::from_wire(name) else {
            trace!(%name, "ignoring unknown key");
            continue;
        };
        let raw = match value {
            Value::Null => None,
            Value::Number(number) => number.as_f64().map(RawValue::Number),
            Value::String(text) => {
                let raw = RawValue::text(text);
                if raw.is_none() {
                    debug!(%name, "text value too long, dropped");
                }
                raw
            }
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                trace!(%name, "unsupported value type, dropped");
                None
            }
        };
        if let Some(raw) = raw {
            reading.set(key, raw);
        }
    }
    reading
}

/// Counters for one pumped stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PumpStats {
    pub readings: u64,
    pub notifications: u64,
    pub rejected: u64,
}

/// Decode every line of `reader` and forward readings in arrival order.
/// Stops at end of input, on a read error, or when the receiver is gone.
pub fn pump<R: BufRead>(
    reader: R,
    tx: &Sender<Reading>,
) -> PumpStats {
    let mut stats = PumpStats::default();
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!(%err, "input read failed, stopping stream");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match decode_frame(&line) {
            Ok(Frame::Data(reading)) => {
                stats.readings += 1;
                if tx.send(reading).is_err() {
                    debug!("receiver dropped, stopping stream");
                    break;
                }
            }
            Ok(Frame::Notification) => {
                stats.notifications += 1;
                debug!(line = index + 1, "notification frame ignored");
            }
            Err(err) => {
                stats.rejected += 1;
                warn!(line = index + 1, %err, "skipping frame");
            }
        }
    }
    stats
}

/// Start the reader thread.
pub fn spawn<R: BufRead + Send + 'static>(reader: R) -> std::io::Result<Receiver<Reading>> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new().name("frame-reader".into()).spawn(move || {
        let stats = pump(reader, &tx);
        info!(
            readings = stats.readings,
            notifications = stats.notifications,
            rejected = stats.rejected,
            "input stream ended"
        );
    })?;
    Ok(rx)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn data(line: &str) -> Reading {
        match decode_frame(line) {
            Ok(Frame::Data(reading)) => reading,
            other => panic!("expected data frame, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope() {
        let reading = data(r#"{"type":"data","payload":{"aqi":105,"temperature":17.25}}"#);
        assert_eq!(reading.aqi(), Some(105.0));
        assert_eq!(reading.get(FieldKey::Temperature), Some(&RawValue::Number(17.25)));
        assert_eq!(reading.len(), 2);
    }

    #[test]
    fn test_large_counts_keep_every_digit() {
        let reading = data(r#"{"pm03plus_0":16777217,"pm10_0":123456.789}"#);
        assert_eq!(reading.get(FieldKey::Count0_3_0), Some(&RawValue::Number(16_777_217.0)));
        assert_eq!(reading.get(FieldKey::Pm10_0), Some(&RawValue::Number(123_456.789)));
    }

    #[test]
    fn test_bare_reading() {
        let reading = data(r#"{"aqi":42,"humidity":55.5,"pm25_0":7}"#);
        assert_eq!(reading.aqi(), Some(42.0));
        assert_eq!(reading.get(FieldKey::RelativeHumidity), Some(&RawValue::Number(55.5)));
        assert_eq!(reading.get(FieldKey::Pm2_5_0), Some(&RawValue::Number(7.0)));
    }

    #[test]
    fn test_null_and_unknown_keys_absent() {
        let reading = data(r#"{"aqi":null,"wind":3,"co2":true,"timestamp":"2024-05-01 12:00"}"#);
        assert_eq!(reading.get(FieldKey::Aqi), None);
        assert_eq!(reading.get(FieldKey::Co2), None);
        assert_eq!(reading.get(FieldKey::Timestamp), RawValue::text("2024-05-01 12:00").as_ref());
        assert_eq!(reading.len(), 1);
    }

    #[test]
    fn test_notification_ignored() {
        let frame = decode_frame(r#"{"type":"notification","message":"PM2.5 high"}"#).unwrap();
        assert_eq!(frame, Frame::Notification);
    }

    #[test]
    fn test_rejected_frames() {
        assert!(matches!(decode_frame("{aqi: 3"), Err(FrameError::Json(_))));
        assert!(matches!(decode_frame("[1, 2]"), Err(FrameError::Json(_))));
        assert!(matches!(decode_frame(r#"{"type":"data"}"#), Err(FrameError::MissingPayload)));
        assert!(matches!(
            decode_frame(r#"{"type":"data","payload":[1]}"#),
            Err(FrameError::MissingPayload)
        ));
        assert!(matches!(decode_frame(r#"{"type":"ping"}"#), Err(FrameError::UnknownType(kind)) if kind == "ping"));
    }

    #[test]
    fn test_pump_keeps_order_and_skips_bad_lines() {
        let input = concat!(
            "{\"aqi\":10}\n",
            "not json\n",
            "\n",
            "{\"type\":\"notification\"}\n",
            "{\"type\":\"data\",\"payload\":{\"aqi\":20}}\n",
            "{\"aqi\":30}\n",
        );
        let (tx, rx) = mpsc::channel();
        let stats = pump(Cursor::new(input), &tx);
        drop(tx);

        let aqis: Vec<Option<f32>> = rx.iter().map(|reading| reading.aqi()).collect();
        assert_eq!(aqis, [Some(10.0), Some(20.0), Some(30.0)]);
        assert_eq!(
            stats,
            PumpStats {
                readings: 3,
                notifications: 1,
                rejected: 1,
            }
        );
    }

    #[test]
    fn test_pump_stops_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let stats = pump(Cursor::new("{\"aqi\":1}\n{\"aqi\":2}\n"), &tx);
        assert_eq!(stats.readings, 1);
    }

    #[test]
    fn test_spawned_reader_delivers() {
        let rx = spawn(Cursor::new("{\"aqi\":77}\n")).unwrap();
        let reading = rx.recv().unwrap();
        assert_eq!(reading.aqi(), Some(77.0));
    }
}
