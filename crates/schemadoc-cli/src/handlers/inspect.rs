//! Inspect command handler

use crate::cli::InspectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::Timer;
use crate::output::OutputWriter;
use tracing::{info, instrument};

use super::utils::{describer, read_schema};

/// Handle the inspect command
#[instrument(skip(config, output), fields(file = %args.schema.display()))]
pub fn handle_inspect(args: InspectArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::new("inspect_command");
    let adapter = args.extract.adapter_for(&args.schema);

    output.info(&format!("Inspecting {}", args.schema.display()))?;

    let source = read_schema(&args.schema)?;
    let model = describer(&args.extract, None, config).model(&source, &adapter)?;
    info!(fields = model.fields.len(), "Schema model extracted");

    output.data(&model)
}
