//! Sortfall headless runner
//!
//! Loads levels and lets the autopilot play each one at a fixed tick.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use sortfall::autopilot;
use sortfall::consts::NOMINAL_TICK_MS;
use sortfall::score::{ScoreSubmission, name_is_valid};
use sortfall::{
    GameManifest, GamePhase, LevelConfig, Session, SpriteMetrics, load_level, parse_pairs,
};

const BUNDLED_LEVEL: &str = include_str!("../levels/kitchen.txt");

/// Catch-and-sort arcade simulation, played by an autopilot
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Data directory containing game.txt
    #[arg(short, long, conflicts_with = "level")]
    data_dir: Option<PathBuf>,

    /// Single level file to play
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// Simulated seconds per level
    #[arg(short, long, default_value_t = 120)]
    seconds: u64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Player name attached to submissions
    #[arg(short, long, default_value = "autopilot")]
    name: String,

    /// Base URL the submission payload is appended to
    #[arg(long)]
    score_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn levels(args: &Args) -> Result<Vec<LevelConfig>, Box<dyn Error>> {
    let sprites = SpriteMetrics::default();

    if let Some(path) = &args.level {
        return Ok(vec![load_level(path, &sprites)?]);
    }
    if let Some(dir) = &args.data_dir {
        let manifest = GameManifest::load(dir)?;
        if manifest.levels.is_empty() {
            return Err(format!("{} lists no levels", dir.display()).into());
        }
        return manifest
            .levels
            .iter()
            .map(|path| Ok(load_level(path, &sprites)?))
            .collect::<Result<_, Box<dyn Error>>>();
    }

    log::info!("No level given, playing the bundled one");
    let pairs = parse_pairs(BUNDLED_LEVEL)?;
    Ok(vec![LevelConfig::from_pairs(&pairs, &sprites)?])
}

/// Play one level to game over or the time limit; returns the score
fn play(level: LevelConfig, seed: Option<u64>, seconds: u64) -> u64 {
    let mut session = match seed {
        Some(seed) => Session::seeded(level, seed),
        None => Session::new(level),
    };

    let steps = seconds * 1000 / u64::from(NOMINAL_TICK_MS);
    for _ in 0..steps {
        let input = autopilot::decide(&session);
        session.tick(&input, NOMINAL_TICK_MS);
        for event in session.drain_events() {
            log::trace!("{event:?}");
        }
        if session.phase() == GamePhase::GameOver {
            break;
        }
    }

    let state = session.state();
    log::info!(
        "{}: {:?} after {:.1}s, {} deliveries, {} lives left",
        session.level().title,
        state.phase,
        state.elapsed_ms as f64 / 1000.0,
        state.container_hits,
        state.lives
    );
    session.final_score().unwrap_or_else(|| state.score())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let levels = levels(&args)?;
    log::info!("Sortfall starting: {} level(s)", levels.len());

    let submit = name_is_valid(&args.name);
    if !submit {
        log::warn!(
            "Name {:?} is too short, scores will not be submitted",
            args.name
        );
    }

    for (index, level) in levels.into_iter().enumerate() {
        let seed = args.seed.map(|seed| seed.wrapping_add(index as u64));
        let title = level.title.clone();
        let score = play(level, seed, args.seconds);
        println!("{title}: {score}");

        if submit {
            let submission = ScoreSubmission::new(score, title, args.name.as_str());
            match &args.score_url {
                Some(base) => log::info!("Submit: {}", submission.url(base)),
                None => log::info!("Submission payload: {}", submission.encode()),
            }
        }
    }

    Ok(())
}
