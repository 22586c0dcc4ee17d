use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use compass::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod script;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Replay and sample pointer gestures against the compass engine")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay a JSON pointer script and emit one frame per event
    Replay {
        #[arg(long)]
        script: PathBuf,
        /// JSON config; missing fields take defaults
        #[arg(long)]
        config: Option<PathBuf>,
        /// Frames output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a seeded random gesture as a JSON pointer script
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 16)]
        steps: usize,
        #[arg(long, value_enum, default_value_t = HandleArg::Body)]
        handle: HandleArg,
    },
    /// Print version and default configuration
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum HandleArg {
    Body,
    RotateTip,
    LegTip,
}

impl From<HandleArg> for Handle {
    fn from(h: HandleArg) -> Self {
        match h {
            HandleArg::Body => Handle::Body,
            HandleArg::RotateTip => Handle::RotateTip,
            HandleArg::LegTip => Handle::LegTip,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Replay {
            script,
            config,
            out,
        } => replay(script, config, out),
        Action::Sample {
            seed,
            steps,
            handle,
        } => sample(seed, steps, handle.into()),
        Action::Report => report(),
    }
}

fn replay(script: PathBuf, config: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    tracing::info!(script = %script.display(), config = ?config, out = ?out, "replay");
    let cfg = script::load_config(config.as_deref())?;
    let events = script::load_script(&script)?;
    let mut adapter = PointerAdapter::new(CompassState::new(cfg)?);
    let frames = adapter
        .replay(events.iter().copied())
        .with_context(|| format!("replaying {}", script.display()))?;
    let state = adapter.state();
    tracing::info!(
        events = events.len(),
        rotation_deg = state.rotation_deg(),
        spread_deg = state.spread_deg(),
        radius = state.drawing_radius(),
        "replay_done"
    );
    script::write_frames(out.as_deref(), &frames)
}

fn sample(seed: u64, steps: usize, handle: Handle) -> Result<()> {
    tracing::info!(seed, steps, handle = ?handle, "sample");
    let cfg = SampleCfg {
        handle,
        steps,
        ..SampleCfg::default()
    };
    let events = sample_path(cfg, seed);
    println!("{}", serde_json::to_string_pretty(&events)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "version": compass::VERSION,
        "default_config": CompassCfg::default(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
