//! Studios listing command implementation.

use pickaxe_core::StudioConfig;

use crate::errors::CliError;

/// Print configured studios and the current default to stdout.
pub fn studios() -> Result<(), CliError> {
    let config = StudioConfig::from_env().map_err(|e| CliError::Config(e.to_string()))?;

    for name in config.studio_names() {
        println!("{}", name);
    }
    match config.default_studio() {
        Some(default) => println!("default: {}", default),
        None => println!("default: (none - set PICKAXE_DEFAULT_STUDIO)"),
    }
    Ok(())
}
