use clap::{Parser, Subcommand};

/// Defines the top-level interface for the Pickaxe CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "pickaxe-mcp")]
#[command(version, about = "Pickaxe MCP server: manage Pickaxe studios from AI assistants.")]
pub struct PickaxeCli {
    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: PickaxeCliCommand,
}

/// Defines the available subcommands of the Pickaxe CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum PickaxeCliCommand {
    /// Start the MCP server on stdio.
    Serve,
    /// List studios configured in the environment and the current default.
    Studios,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = PickaxeCli::parse_from(["pickaxe-mcp", "serve"]);
        assert_eq!(cli.command, PickaxeCliCommand::Serve);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_studios_verbose() {
        let cli = PickaxeCli::parse_from(["pickaxe-mcp", "--verbose", "studios"]);
        assert_eq!(cli.command, PickaxeCliCommand::Studios);
        assert!(cli.verbose);
    }
}
