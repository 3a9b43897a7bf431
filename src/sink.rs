//! Durable gesture log: one flat CSV file per process run, header written
//! once, one line appended per completed gesture.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::GestureRecord;

pub const CSV_HEADER: &str = "Timestamp,StartX,StartY,Dx,Dy,Surface,Distance,Speed,Angle,\
Duration,Category,BeforeX,BeforeY,BeforeZ,DuringX,DuringY,DuringZ";

pub struct GestureLog {
    path: PathBuf,
    file: File,
}

impl GestureLog {
    /// Creates (or reopens) `gesture_<epochMs>.csv` under `dir` and writes
    /// the column header if the file holds no data yet.
    pub fn create(dir: &Path, epoch_ms: i64) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let path = dir.join(format!("gesture_{epoch_ms}.csv"));
        Self::open(path)
    }

    /// Opens `path` in append mode, writing the header exactly once.
    pub fn open(path: PathBuf) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open gesture log {}", path.display()))?;

        let mut log = Self { path, file };
        log.ensure_header()?;
        Ok(log)
    }

    fn ensure_header(&mut self) -> Result<()> {
        let len = self
            .file
            .metadata()
            .with_context(|| format!("failed to stat gesture log {}", self.path.display()))?
            .len();
        if len == 0 {
            writeln!(self.file, "{CSV_HEADER}")
                .with_context(|| format!("failed to write header to {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Appends a single record line. Pure append; prior lines are never
    /// rewritten, so a failed call cannot corrupt earlier records.
    pub fn append(&mut self, record: &GestureRecord) -> Result<()> {
        writeln!(self.file, "{}", record.csv_line())
            .with_context(|| format!("failed to append to {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
