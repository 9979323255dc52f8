use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use rand::rngs::StdRng;
use rand::SeedableRng;

use taquin::app::App;
use taquin::assets::Assets;
use taquin::config::Settings;
use taquin::persist::{load_scores, save_scores};
use taquin::{BestScores, Session};

#[derive(Parser, Debug)]
#[command(about = "Sliding-tile puzzle for the terminal")]
struct Args {
    /// Settings file (TOML)
    #[arg(long, value_name = "FILE", default_value = "taquin.toml")]
    config: PathBuf,

    /// Best-score file (JSON)
    #[arg(long, value_name = "FILE", default_value = "taquin-scores.json")]
    scores: PathBuf,

    /// Seed for the shuffle RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the menu and start a game of this size
    #[arg(long, value_parser = clap::value_parser!(u8).range(3..=5))]
    size: Option<u8>,

    /// Forget all best scores before starting
    #[arg(long)]
    reset_scores: bool,

    /// Write the effective settings to --config and exit
    #[arg(long)]
    write_config: bool,
}

fn run(args: Args) -> taquin::Result<()> {
    let settings = Settings::load(&args.config)?;
    if args.write_config {
        return settings.save(&args.config);
    }

    let mut best = load_scores(&args.scores).unwrap_or_else(|e| {
        log::warn!("ignoring best scores: {e}");
        BestScores::default()
    });
    if args.reset_scores {
        best.clear();
        save_scores(&args.scores, &best)?;
        log::info!("cleared best scores");
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let assets = match &settings.assets_dir {
        Some(dir) => Assets::load(dir),
        None => Assets::none(),
    };

    let mut session = Session::new(settings, best, rng);
    if let Some(size) = args.size {
        session.start(size as usize)?;
    }

    App::new(session, assets, args.scores).run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => {
            println!("Thanks for playing Taquin!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("taquin: {e}");
            ExitCode::FAILURE
        }
    }
}
