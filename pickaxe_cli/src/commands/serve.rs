//! MCP server command implementation.

use log::info;

use pickaxe_core::StudioConfig;
use pickaxe_mcp::PickaxeMcpServer;

use crate::errors::CliError;

/// Start the MCP server on stdio.
///
/// Studio discovery happens here, once; zero configured studios aborts
/// before any protocol connection is accepted.
pub fn serve() -> Result<(), CliError> {
    let config = StudioConfig::from_env().map_err(|e| CliError::Config(e.to_string()))?;

    // Diagnostics go to stderr; stdout carries the MCP protocol.
    info!(
        "Pickaxe MCP server initialized with studios: {}",
        config.studio_names().join(", ")
    );
    if let Some(default) = config.default_studio() {
        info!("Default studio: {}", default);
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Server(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(async {
        let server = PickaxeMcpServer::new(config);
        server
            .serve_stdio()
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    })
}
