use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fscan")]
#[command(
    author,
    version,
    about = "Check emails, SMS, links and news claims for fraud and misinformation"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Configuration file path (defaults to ./fscan.toml, then the user config dir)
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    /// Analysis endpoint, overriding the configuration file
    #[clap(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds, overriding the configuration file
    #[clap(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log output (-v for info, -vv for debug)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single piece of text and print the verdict
    Analyze {
        /// Text to analyze (reads --file or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[clap(short, long, conflicts_with = "text")]
        file: Option<String>,

        /// Print the result as JSON
        #[clap(long, default_value_t = false)]
        json: bool,
    },

    /// Prompt for text repeatedly and analyze each entry
    Interactive,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_with_globals() {
        let cli = Cli::parse_from([
            "fscan",
            "analyze",
            "win a free phone",
            "--endpoint",
            "http://localhost:9000/analyze",
            "-vv",
        ]);

        assert_eq!(cli.global.endpoint.as_deref(), Some("http://localhost:9000/analyze"));
        assert_eq!(cli.global.verbose, 2);
        match cli.command {
            Commands::Analyze { text, file, json } => {
                assert_eq!(text.as_deref(), Some("win a free phone"));
                assert!(file.is_none());
                assert!(!json);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        assert!(Cli::try_parse_from(["fscan", "analyze", "text", "--file", "msg.txt"]).is_err());
    }
}
