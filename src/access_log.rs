//! Per-request access logging.
//!
//! One line per handled request, appended to a daily file under the log
//! directory. A logging fault never fails the request being handled.

use std::path::PathBuf;

use chrono::Local;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::http::response::StatusCode;

#[derive(Debug, Clone)]
pub struct AccessLog {
    dir: PathBuf,
}

impl AccessLog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Appends one entry for a handled request:
    ///
    /// ```text
    /// [dd/MM/yyyy:HH:mm:ss:SSSS zzzz] "<request line>" <status> <bytes>
    /// ```
    ///
    /// The log directory and the current day's file are created lazily.
    /// A write fault is reported as a warning and otherwise swallowed.
    pub async fn record(&self, request_line: &str, status: StatusCode, body_len: usize) {
        if let Err(err) = self.append(request_line, status, body_len).await {
            warn!("access log write failed: {}", err);
        }
    }

    async fn append(
        &self,
        request_line: &str,
        status: StatusCode,
        body_len: usize,
    ) -> std::io::Result<()> {
        let now = Local::now();

        fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(format!("{}.log", now.format("%Y%m%d")));
        let entry = format!(
            "[{}:{:04} {}] \"{}\" {} {}\n",
            now.format("%d/%m/%Y:%H:%M:%S"),
            now.timestamp_subsec_millis(),
            now.format("%z"),
            request_line,
            status.as_u16(),
            body_len,
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(entry.as_bytes()).await?;

        Ok(())
    }
}
