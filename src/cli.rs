use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Season Performance Points ranking engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Reset the database schema and seed the league reference set
    Setup {
        /// Also load the demo player dataset
        #[arg(long)]
        demo: bool,
    },
    /// Score every player of a season and print the summary
    Recalculate {
        /// Season (defaults to the configured season)
        #[arg(short, long)]
        season: Option<i32>,
        /// Number of top players to print
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },
    /// Print season overview statistics
    Overview {
        #[arg(short, long)]
        season: Option<i32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recalculate() {
        let cli = Cli::try_parse_from(["spp_ranking", "recalculate", "--season", "2022"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Recalculate {
                season: Some(2022),
                top: 10
            }
        );
    }

    #[test]
    fn test_parse_setup_and_serve() {
        let cli = Cli::try_parse_from(["spp_ranking", "setup", "--demo"]).unwrap();
        assert_eq!(cli.command, Command::Setup { demo: true });

        let cli = Cli::try_parse_from(["spp_ranking", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: 3000 });
    }
}
