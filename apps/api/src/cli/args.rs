use clap::{Parser, Subcommand};

/// Resume assistant backed by a hosted chat-completion model.
#[derive(Debug, Parser)]
#[command(name = "hiresense", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the JSON API over HTTP
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Numbered menu on stdin/stdout
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["hiresense", "serve", "--port", "8081"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { port: Some(8081) }));
    }

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::try_parse_from(["hiresense", "interactive"]).unwrap();
        assert!(matches!(cli.command, Command::Interactive));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["hiresense"]).is_err());
    }
}
