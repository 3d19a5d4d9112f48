//! JSON reading/writing
//!
//! Sensor records arrive either as a bare array or wrapped in the API
//! envelope `{ "data": [...] }`. Samples are written as an array of
//! `[lat, lng, value]` triples.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::geo::GridSample;
use crate::observation::SensorRecord;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordPayload {
    Bare(Vec<SensorRecord>),
    Envelope { data: Vec<SensorRecord> },
}

impl From<RecordPayload> for Vec<SensorRecord> {
    fn from(payload: RecordPayload) -> Self {
        match payload {
            RecordPayload::Bare(records) | RecordPayload::Envelope { data: records } => records,
        }
    }
}

/// Read sensor records from a JSON file
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<SensorRecord>> {
    let file = File::open(path.as_ref())?;
    let payload: RecordPayload = serde_json::from_reader(BufReader::new(file))?;
    Ok(payload.into())
}

/// Parse sensor records from JSON text
pub fn read_records_from_str(json: &str) -> Result<Vec<SensorRecord>> {
    let payload: RecordPayload = serde_json::from_str(json)?;
    Ok(payload.into())
}

/// Write samples as a JSON array of `[lat, lng, value]` triples
pub fn write_samples<P: AsRef<Path>>(samples: &[GridSample], path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, samples)?;
    writer.flush()?;
    Ok(())
}

/// Serialize samples to a JSON string
pub fn write_samples_to_string(samples: &[GridSample]) -> Result<String> {
    Ok(serde_json::to_string(samples)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Metric;

    const ENVELOPE: &str = r#"{
        "data": [
            {"deviceId": "ESP32_001", "temperatura": 25.5, "latitud": 37.1, "longitud": -5.9},
            {"deviceId": "ESP32_002", "temperatura": 26.2, "latitud": null, "longitud": -5.8}
        ],
        "note": "demo"
    }"#;

    #[test]
    fn test_read_envelope() {
        let records = read_records_from_str(ENVELOPE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].readings.get(Metric::Temperature), Some(25.5));
        assert_eq!(records[1].latitude, None);
    }

    #[test]
    fn test_read_bare_array() {
        let records = read_records_from_str(r#"[{"deviceId":"a","latitude":1,"longitude":2}]"#).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].longitude, Some(2.0));
    }

    #[test]
    fn test_read_rejects_garbage() {
        assert!(read_records_from_str(r#"{"rows": 3}"#).is_err());
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("records.json");
        std::fs::write(&input, ENVELOPE).unwrap();
        assert_eq!(read_records(&input).unwrap().len(), 2);

        let output = dir.path().join("samples.json");
        let samples = vec![GridSample::new(1.0, 2.0, 0.5), GridSample::new(3.0, 4.0, 1.0)];
        write_samples(&samples, &output).unwrap();
        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text, "[[1.0,2.0,0.5],[3.0,4.0,1.0]]");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_records("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
