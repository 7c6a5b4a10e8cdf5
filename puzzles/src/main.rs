//! Daily puzzle solver.
//!
//! Reads `day1.txt`, `day3.txt` or `day4.txt` from the data directory and
//! prints both answers for that day.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use puzzles::core::types::{Answers, Day};
use puzzles::exit_codes;
use puzzles::io::config::{DEFAULT_CONFIG_PATH, PuzzlesConfig, load_config};
use puzzles::logging;
use puzzles::solve::solve_from_dir;

#[derive(Parser)]
#[command(
    name = "puzzles",
    version,
    about = "Solve the daily puzzles from their static input files"
)]
struct Cli {
    /// Config file (TOML). A missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory holding the dayN.txt inputs (overrides the config).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the part 1 and part 2 answers for a day (1, 3 or 4).
    Solve {
        day: Day,

        /// Print answers as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = effective_config(&cli)?;
    match cli.command {
        Command::Solve { day, json } => cmd_solve(&cfg, day, json),
        Command::Config => cmd_config(&cfg),
    }
}

fn effective_config(cli: &Cli) -> Result<PuzzlesConfig> {
    let mut cfg = load_config(&cli.config)?;
    if let Some(data_dir) = &cli.data_dir {
        cfg.data_dir = data_dir.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_solve(cfg: &PuzzlesConfig, day: Day, json: bool) -> Result<()> {
    let answers = solve_from_dir(&cfg.data_dir, day)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&answers)?);
    } else {
        print!("{}", format_answers(&answers));
    }
    Ok(())
}

fn cmd_config(cfg: &PuzzlesConfig) -> Result<()> {
    print!("{}", cfg.to_toml()?);
    Ok(())
}

/// Plain-text answers; a sentinel answer prints as `NaN`.
fn format_answers(answers: &Answers) -> String {
    let show = |part: Option<i64>| part.map_or_else(|| "NaN".to_string(), |n| n.to_string());
    format!(
        "Part 1: {}\nPart 2: {}\n",
        show(answers.part1),
        show(answers.part2)
    )
}
