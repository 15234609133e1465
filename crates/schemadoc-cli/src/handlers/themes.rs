//! Themes command handler

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::OutputWriter;
use schemadoc_core::render::default_registry;

/// Handle the themes command
pub fn handle_themes(output: &mut OutputWriter) -> Result<()> {
    let names = default_registry().names();

    if output.format() == OutputFormat::Human {
        for name in names {
            output.writeln(name)?;
        }
        Ok(())
    } else {
        output.data(&names)
    }
}
