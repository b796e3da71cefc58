//! Tournament CLI
//!
//! Run matches between shogi engines.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use beam_engine::BeamEngine;
use random_engine::RandomEngine;
use shogi_core::Engine;
use tournament::{MatchConfig, MatchReport, MatchRunner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Shogi Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [options]");
    println!("  tournament help");
    println!();
    println!("Options:");
    println!("  --games N, -g N      Games to play");
    println!("  --depth D, -d D      Beam search depth");
    println!("  --width W, -w W      Beam search width");
    println!("  --max-plies P        Plies before a game is drawn");
    println!("  --config FILE        Load settings from a TOML file");
    println!("  --table FILE         Value table for plain `beam` engines");
    println!("  --output FILE        Write the match report as JSON");
    println!();
    println!("Engines:");
    println!("  random          - Uniformly random legal action");
    println!("  beam            - Beam search (value table from --table, else random)");
    println!("  beam:PATH       - Beam search with the table at PATH (.json or text)");
    println!();
    println!("Examples:");
    println!("  tournament match beam random --games 20 --depth 3 --width 5");
    println!("  tournament match beam:tables/v2.json beam:tables/v1.json --config match.toml");
}

fn create_engine(spec: &str, config: &MatchConfig) -> anyhow::Result<Box<dyn Engine>> {
    let (name, arg) = match spec.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (spec, None),
    };
    match name.to_lowercase().as_str() {
        "random" => Ok(Box::new(RandomEngine::new())),
        "beam" => {
            let path = arg.map(PathBuf::from).or_else(|| config.value_table.clone());
            match path {
                Some(path) => {
                    let engine = BeamEngine::from_file(&path)
                        .with_context(|| format!("loading value table for {spec}"))?;
                    Ok(Box::new(engine))
                }
                None => {
                    warn!(engine = spec, "no value table given, using a random one");
                    Ok(Box::new(BeamEngine::with_random_table(&mut rand::thread_rng())))
                }
            }
        }
        _ => bail!("unknown engine: {spec}"),
    }
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> anyhow::Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("{flag} needs a value"))
}

fn run_match(args: &[String]) -> anyhow::Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("match requires two engine specifications");
    }

    let engine1_spec = &args[0];
    let engine2_spec = &args[1];

    // The config file is applied first so that flags override it.
    let mut config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = flag_value(args, i, "--config")?;
            MatchConfig::load(Path::new(path))?
        }
        None => MatchConfig::default(),
    };
    let mut output = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => {
                config.games = flag_value(args, i, "--games")?.parse()?;
                i += 1;
            }
            "--depth" | "-d" => {
                config.depth = flag_value(args, i, "--depth")?.parse()?;
                i += 1;
            }
            "--width" | "-w" => {
                config.width = flag_value(args, i, "--width")?.parse()?;
                i += 1;
            }
            "--max-plies" => {
                config.max_plies = flag_value(args, i, "--max-plies")?.parse()?;
                i += 1;
            }
            "--table" => {
                config.value_table = Some(PathBuf::from(flag_value(args, i, "--table")?));
                i += 1;
            }
            "--output" | "-o" => {
                output = Some(PathBuf::from(flag_value(args, i, "--output")?));
                i += 1;
            }
            "--config" => i += 1,
            other => bail!("unknown option: {other}"),
        }
        i += 1;
    }

    let mut engine1 = create_engine(engine1_spec, &config)?;
    let mut engine2 = create_engine(engine2_spec, &config)?;

    info!(
        engine1 = engine1.name(),
        engine2 = engine2.name(),
        games = config.games,
        depth = config.depth,
        width = config.width,
        "starting match"
    );

    let runner = MatchRunner::new(config);
    let (result, games) = runner.run_match_with_log(engine1.as_mut(), engine2.as_mut());

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        engine1_spec, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);

    if let Some(path) = output {
        let report = MatchReport {
            engine1: engine1_spec.clone(),
            engine2: engine2_spec.clone(),
            result,
            games,
        };
        let json = serde_json::to_string_pretty(&report)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}")
        }
    }
}
