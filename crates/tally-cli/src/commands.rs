use colored::Colorize;

use tally_server::{ServerConfig, TallyServer};

use crate::cli::{Cli, Command, OutputFormat, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Defaults => cmd_defaults(&cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_path(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse()?;
    }
    if let Some(seats) = args.seats {
        config.table.seats = seats;
    }
    if let Some(starting_life) = args.starting_life {
        config.table.starting_life = starting_life;
    }

    println!(
        "{} Tally server on {} ({} seats, {} starting life)",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.table.seats,
        config.table.starting_life,
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(TallyServer::new(config).serve())?;
    Ok(())
}

fn cmd_defaults(format: &OutputFormat) -> anyhow::Result<()> {
    let config = ServerConfig::default();
    match format {
        OutputFormat::Text => println!("{}", toml::to_string_pretty(&config)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}
