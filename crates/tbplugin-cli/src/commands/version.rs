use tbplugin_core::VERSION;

use crate::{error::CliResult, output::OutputManager};

pub const BIN_NAME: &str = "textbringer-plugin-generator";

/// `textbringer-plugin-generator 0.1.0`
pub fn version_line() -> String {
    format!("{BIN_NAME} {VERSION}")
}

pub fn execute(output: &OutputManager) -> CliResult<()> {
    output.result(&version_line())?;
    Ok(())
}
