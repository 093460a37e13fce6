//! Accelerometer trace replay
//!
//! Reads samples from CSV, one per line: `timestamp_ms,x,y,z`. Blank
//! lines and lines starting with `#` are skipped, as is a header line.
//! A line that does not parse is reported as a malformed reading and
//! replay continues with the next line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;
use vigil_core::motion::AccelerationSample;
use vigil_core::traits::{MotionSensor, SensorError};

use crate::error::{AppError, Result};

/// Motion sensor that replays a recorded trace
pub struct TraceSensor<R> {
    reader: R,
    line: String,
    line_no: usize,
}

impl TraceSensor<BufReader<File>> {
    /// Open a trace file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| AppError::TraceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceSensor<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_no: 0,
        }
    }

    /// Lines consumed so far
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

/// Parse one `timestamp_ms,x,y,z` record
fn parse_line(line: &str) -> Option<AccelerationSample> {
    let mut fields = line.split(',').map(str::trim);
    let timestamp_ms = fields.next()?.parse().ok()?;
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    let z = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(AccelerationSample::new(x, y, z, timestamp_ms))
}

fn is_header(line: &str) -> bool {
    line.split(',')
        .next()
        .is_some_and(|first| first.trim().eq_ignore_ascii_case("timestamp_ms"))
}

impl<R: BufRead> MotionSensor for TraceSensor<R> {
    async fn next_sample(&mut self) -> core::result::Result<Option<AccelerationSample>, SensorError> {
        loop {
            self.line.clear();
            let read = self.reader.read_line(&mut self.line).map_err(|e| {
                warn!(error = %e, "Trace read failed");
                SensorError::Io
            })?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = self.line.trim();
            if line.is_empty() || line.starts_with('#') || (self.line_no == 1 && is_header(line)) {
                continue;
            }

            return match parse_line(line) {
                Some(sample) => Ok(Some(sample)),
                None => {
                    warn!(line = self.line_no, "Malformed trace line");
                    Err(SensorError::Malformed)
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use std::io::Cursor;

    fn sensor(text: &str) -> TraceSensor<Cursor<Vec<u8>>> {
        TraceSensor::from_reader(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_samples_in_order() {
        let mut trace = sensor("timestamp_ms,x,y,z\n0,0,0,1\n250, 1.5 ,0,-1\n");
        block_on(async {
            let first = trace.next_sample().await.unwrap().unwrap();
            assert_eq!(first, AccelerationSample::new(0.0, 0.0, 1.0, 0));
            let second = trace.next_sample().await.unwrap().unwrap();
            assert_eq!(second, AccelerationSample::new(1.5, 0.0, -1.0, 250));
            assert_eq!(trace.next_sample().await, Ok(None));
            assert_eq!(trace.next_sample().await, Ok(None));
        });
    }

    #[test]
    fn test_skips_comments_and_blanks() {
        let mut trace = sensor("# recorded on a bus\n\n10,0,0,1\n");
        block_on(async {
            let sample = trace.next_sample().await.unwrap().unwrap();
            assert_eq!(sample.timestamp_ms, 10);
            assert_eq!(trace.line_no(), 3);
        });
    }

    #[test]
    fn test_malformed_line_does_not_end_stream() {
        let mut trace = sensor("0,0,0\nabc,1,2,3\n1,2,3,4,5\n500,0,0,2\n");
        block_on(async {
            assert_eq!(trace.next_sample().await, Err(SensorError::Malformed));
            assert_eq!(trace.next_sample().await, Err(SensorError::Malformed));
            assert_eq!(trace.next_sample().await, Err(SensorError::Malformed));
            let sample = trace.next_sample().await.unwrap().unwrap();
            assert_eq!(sample.timestamp_ms, 500);
        });
    }

    #[test]
    fn test_nan_parses_as_sample() {
        let mut trace = sensor("0,NaN,0,1\n");
        block_on(async {
            let sample = trace.next_sample().await.unwrap().unwrap();
            assert!(!sample.is_finite());
        });
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            TraceSensor::open(&dir.path().join("none.csv")),
            Err(AppError::TraceOpen { .. })
        ));
    }
}
