//! Record serialization to stdout or files.

use clap::ValueEnum;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for record writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Error type for output operations.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON array holding every record
    #[default]
    Json,
    /// One compact record per line
    Jsonl,
}

/// How records are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Indent JSON arrays; ignored for JSONL
    pub pretty: bool,
}

impl OutputOptions {
    pub fn new(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Bytes handed to the underlying writer.
    pub bytes_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
}

impl WriteMetrics {
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Byte-counting pass-through writer.
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Serialize `records` into `writer`.
///
/// JSON output is a single array followed by a newline; JSONL output is
/// one compact record per line.
pub fn write_records<W, I>(
    writer: W,
    records: I,
    options: OutputOptions,
) -> Result<WriteMetrics, OutputError>
where
    W: Write,
    I: IntoIterator<Item = Value>,
{
    let start = Instant::now();
    let mut out = CountingWriter {
        inner: BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, writer),
        bytes: 0,
    };
    let mut records_written: u64 = 0;

    match options.format {
        OutputFormat::Json => {
            let records: Vec<Value> = records.into_iter().collect();
            records_written = records.len() as u64;
            if options.pretty {
                serde_json::to_writer_pretty(&mut out, &records)?;
            } else {
                serde_json::to_writer(&mut out, &records)?;
            }
            out.write_all(b"\n")?;
        }
        OutputFormat::Jsonl => {
            for record in records {
                serde_json::to_writer(&mut out, &record)?;
                out.write_all(b"\n")?;
                records_written += 1;

                if records_written % 10000 == 0 {
                    debug!("Written {} records", records_written);
                }
            }
        }
    }
    out.flush()?;

    Ok(WriteMetrics {
        records_written,
        bytes_written: out.bytes,
        total_duration: start.elapsed(),
    })
}

/// Write records to `path`, creating parent directories as needed.
pub fn write_to_file<I>(
    path: &Path,
    records: I,
    options: OutputOptions,
) -> Result<WriteMetrics, OutputError>
where
    I: IntoIterator<Item = Value>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let metrics = write_records(file, records, options)?;

    info!(
        "Wrote {} records to {} ({} bytes, {:.0} records/sec)",
        metrics.records_written,
        path.display(),
        metrics.bytes_written,
        metrics.records_per_second()
    );
    Ok(metrics)
}

/// Write records to stdout.
pub fn write_to_stdout<I>(records: I, options: OutputOptions) -> Result<WriteMetrics, OutputError>
where
    I: IntoIterator<Item = Value>,
{
    let stdout = io::stdout();
    let metrics = write_records(stdout.lock(), records, options)?;
    debug!(
        "Wrote {} records to stdout in {:?}",
        metrics.records_written, metrics.total_duration
    );
    Ok(metrics)
}
