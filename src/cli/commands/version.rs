//! Version command implementation

use anyhow::Result;

use crate::cli::Output;

/// Show version information
pub async fn execute(output: &Output) -> Result<()> {
    output.header(crate::PKG_NAME);
    output.key_value("Version:", crate::VERSION);
    output.key_value("Description:", crate::PKG_DESCRIPTION);
    Ok(())
}
