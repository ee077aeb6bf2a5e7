use crate::draw::Draw;
use crate::error::{DrawError, Result};
use crate::groups::Entrant;
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Supplies the entrants of a draw.
pub trait EntrantSource {
    fn entrants(&self) -> Result<Vec<Entrant>>;
}

/// Receives a complete draw.
pub trait DrawSink {
    fn write_draw(&mut self, draw: &Draw) -> Result<()>;
}

/// Format of the written report.
#[derive(ValueEnum, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum ReportFormat {
    /// Buckets and matches as plain text lines.
    #[default]
    Text,
    /// The whole draw as a JSON document.
    Json,
}

impl ReportFormat {
    /// Renders the whole report in memory.
    pub fn render(self, draw: &Draw) -> Result<String> {
        match self {
            ReportFormat::Text => Ok(draw.to_string()),
            ReportFormat::Json => {
                let mut report = serde_json::to_string_pretty(draw)?;
                report.push('\n');
                Ok(report)
            }
        }
    }
}

/// Parses one entrant per line. Empty lines are skipped, every other line is kept verbatim.
pub fn parse_entrants(text: &str) -> Vec<Entrant> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(Entrant::from)
        .collect()
}

/// Reads the entrants from a text file.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[inline]
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EntrantSource for FileSource {
    fn entrants(&self) -> Result<Vec<Entrant>> {
        let text = fs::read_to_string(&self.path).map_err(|source| DrawError::ReadEntrants {
            path: self.path.clone(),
            source,
        })?;
        Ok(parse_entrants(&text))
    }
}

impl EntrantSource for Vec<Entrant> {
    #[inline]
    fn entrants(&self) -> Result<Vec<Entrant>> {
        Ok(self.clone())
    }
}

/// Writes the report to a file, replacing its content.
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
    format: ReportFormat,
}

impl FileSink {
    #[inline]
    pub fn new(path: impl AsRef<Path>, format: ReportFormat) -> Self {
        FileSink {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }
}

impl DrawSink for FileSink {
    fn write_draw(&mut self, draw: &Draw) -> Result<()> {
        // Render first, so a failure never leaves a partial report behind
        let report = self.format.render(draw)?;
        fs::write(&self.path, report).map_err(|source| DrawError::WriteDraw {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), format = ?self.format, "draw written");
        Ok(())
    }
}

impl DrawSink for String {
    #[inline]
    fn write_draw(&mut self, draw: &Draw) -> Result<()> {
        self.push_str(&draw.to_string());
        Ok(())
    }
}
