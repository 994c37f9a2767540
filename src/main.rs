//! shadowchess: play classical chess or the Shadows variant in the terminal.

use anyhow::Context;
use clap::Parser;
use log::info;
use shadowchess::bridge::Level;
use shadowchess::console::{run_console, ClassicalConsole, Mode, ShadowsConsole};
use shadowchess::shadows::ShadowsParams;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_enum, default_value_t = Mode::Classical)]
    mode: Mode,

    /// UCI engine used for hints (path or name such as "stockfish")
    #[arg(short, long)]
    engine: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Level::Medium)]
    level: Level,

    /// Seed for the boss AI; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 0.30)]
    summon_chance: f64,

    /// The boss leaves a minion on every cell it leaves
    #[arg(long)]
    shadow_trail: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    info!("starting in {:?} mode", args.mode);

    match args.mode {
        Mode::Classical => {
            let mut console = ClassicalConsole::new(args.engine, args.level);
            run_console(&mut console).context("console loop failed")?;
        }
        Mode::Shadows => {
            let mut params = ShadowsParams::new()
                .summon_chance(args.summon_chance)
                .shadow_trail(args.shadow_trail);
            if let Some(seed) = args.seed {
                params = params.seed(seed);
            }
            let mut console = ShadowsConsole::new(params);
            run_console(&mut console).context("console loop failed")?;
        }
    }
    Ok(())
}
