//! Output formatting and writing utilities
//!
//! Documents and data go to stdout; status messages go to stderr so that
//! rendered output can be piped straight into other tools.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Formatting of serializable values per output format
pub trait OutputFormatter {
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // Human output uses pretty JSON for structured data
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
    status: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout/stderr
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writers(
            format,
            use_color,
            quiet,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        )
    }

    /// Create an output writer with custom data and status writers
    pub fn with_writers(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
        status: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
            status,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    fn status_line(&mut self, content: &str) -> Result<()> {
        writeln!(self.status, "{}", content)?;
        self.status.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.status_line(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.status_line(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.status_line(&message.green().to_string())
        } else {
            self.status_line(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.status_line(&message.yellow().to_string())
        } else {
            self.status_line(&format!("WARNING: {}", message))
        }
    }

    /// Write a rendered document verbatim
    pub fn document(&mut self, content: &str) -> Result<()> {
        trace!(bytes = content.len(), "Outputting document");
        self.writeln(content)
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");
        self.writeln(formatted.trim_end())
    }
}
