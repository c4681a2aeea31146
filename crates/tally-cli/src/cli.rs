use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Tally — multiplayer table counter service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Tally server
    Serve(ServeArgs),
    /// Print the default configuration
    Defaults,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<String>,
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    pub bind: Option<String>,
    /// Number of seats at the table (overrides the config file)
    #[arg(long)]
    pub seats: Option<usize>,
    /// Life total every player starts with (overrides the config file)
    #[arg(long)]
    pub starting_life: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["tally", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve(_)));
    }

    #[test]
    fn parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "tally",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--seats",
            "6",
            "--starting-life",
            "30",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".into()));
            assert_eq!(args.seats, Some(6));
            assert_eq!(args.starting_life, Some(30));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_serve_with_config() {
        let cli = Cli::try_parse_from(["tally", "serve", "--config", "tally.toml"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.config, Some("tally.toml".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["tally", "defaults"]).unwrap();
        assert!(matches!(cli.command, Command::Defaults));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["tally", "--verbose", "defaults"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["tally", "--format", "json", "defaults"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
