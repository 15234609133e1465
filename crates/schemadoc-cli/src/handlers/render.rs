//! Render command handler

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{ErrorContext, Result};
use crate::logging::Timer;
use crate::output::OutputWriter;
use schemadoc_core::adapter::UNAVAILABLE_PREFIX;
use std::fs;
use tracing::{info, instrument};

use super::utils::{describer, read_schema};

/// Handle the render command
#[instrument(skip(config, output), fields(file = %args.schema.display()))]
pub fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let theme = args
        .theme
        .clone()
        .unwrap_or_else(|| config.render.theme.clone());
    let adapter = args.extract.adapter_for(&args.schema);
    let timer = Timer::with_details("render_command", &format!("theme: {theme}, adapter: {adapter}"));

    output.info(&format!(
        "Rendering {} with theme {}",
        args.schema.display(),
        theme
    ))?;

    let source = read_schema(&args.schema)?;
    let describer = describer(&args.extract, args.indent, config);
    let document = if args.safe {
        let document = describer.describe_safe(&source, &adapter, &theme);
        if document.starts_with(UNAVAILABLE_PREFIX) {
            output.warning("Schema could not be described, writing placeholder text")?;
        }
        document
    } else {
        describer.describe(&source, &adapter, &theme)?
    };
    info!(
        bytes = document.len(),
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Schema rendered"
    );

    match &args.output_file {
        Some(path) => {
            fs::write(path, format!("{document}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output.success(&format!("✓ Documentation saved to {}", path.display()))?;
        }
        None => output.document(&document)?,
    }

    Ok(())
}
