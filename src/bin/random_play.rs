use std::path::PathBuf;

use clap::Parser;
use holdem_play::arena::agent::RandomAgent;
use holdem_play::arena::{Agent, TableSimulationBuilder};
use holdem_play::holdem::TableConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "random-play")]
#[command(about = "Play a game of No-Limit Hold'em between random agents")]
struct Cli {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    players: u8,

    /// Seed for the table and the agents
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many plays even if nobody has won
    #[arg(short, long, default_value_t = 100)]
    max_plays: usize,

    /// JSON table config, missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the last state as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => TableConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => TableConfig::default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);

    let agents: Vec<Box<dyn Agent>> = (0..u64::from(cli.players))
        .map(|i| Box::new(RandomAgent::seeded(seed.wrapping_add(i + 1))) as Box<dyn Agent>)
        .collect();
    let mut sim = TableSimulationBuilder::default()
        .agents(agents)
        .config(config)
        .seed(seed)
        .max_plays(cli.max_plays)
        .build()?;

    let last = sim.run().await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&last)?);
        return Ok(());
    }
    println!("Seed: {seed}");
    println!("Plays: {}", sim.plays());
    for player in last.players() {
        println!(
            "{:>10}: {:>6} chips{}",
            player.name,
            last.chips(player.seat),
            if last.seating().is_active(player.seat) {
                ""
            } else {
                " (out)"
            }
        );
    }
    Ok(())
}
