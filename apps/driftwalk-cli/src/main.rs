use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use driftwalk_assets::{ResourceTracker, SourceKind, SourceManifest};
use driftwalk_audio::RecordingAudio;
use driftwalk_feedback::ProximityFeedback;
use driftwalk_input::{Action, InputState};
use driftwalk_kernel::ScenePreset;
use driftwalk_render::DebugTextRenderer;
use driftwalk_scheduler::{ExperienceConfig, FrameScheduler};
use driftwalk_tools::WorldInspector;
use glam::Vec3;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "driftwalk-cli", about = "Headless driver for the walking experience")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SceneArg {
    Underwater,
    Backrooms,
}

impl From<SceneArg> for ScenePreset {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Underwater => ScenePreset::Underwater,
            SceneArg::Backrooms => ScenePreset::Backrooms,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and the built-in resource manifest
    Info,
    /// Print the default experience configuration as YAML
    DumpConfig,
    /// Load placeholder resources, enter, and walk for a number of ticks
    Simulate {
        /// Number of ticks to run after entering
        #[arg(short, long, default_value = "120")]
        ticks: u64,
        /// Seconds per tick
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Experience configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the configured scene
        #[arg(short, long, value_enum)]
        scene: Option<SceneArg>,
        /// Key codes held for the whole run, resolved through the keymap
        #[arg(long = "hold", default_value = "KeyW")]
        hold: Vec<String>,
        /// Print a frame description every N ticks (0 disables)
        #[arg(long, default_value = "30")]
        every: u64,
        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: f32,
        /// Viewport height in pixels
        #[arg(long, default_value = "720")]
        height: f32,
    },
    /// Print the eased proximity channels across the reference distance
    Proximity {
        /// Reference distance
        #[arg(short, long, default_value = "10.0")]
        max: f32,
        /// Number of rows
        #[arg(long, default_value = "10")]
        steps: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("driftwalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", driftwalk_render::crate_info());
            println!("tools: {}", driftwalk_tools::crate_info());
            let manifest = SourceManifest::builtin();
            println!("Resources ({}):", manifest.len());
            for source in manifest.sources() {
                println!("  {:<20} {:?} {}", source.name, source.kind, source.path);
            }
        }
        Commands::DumpConfig => {
            print!("{}", ExperienceConfig::default().to_yaml_string()?);
        }
        Commands::Simulate {
            ticks,
            dt,
            config,
            scene,
            hold,
            every,
            width,
            height,
        } => {
            let mut config = match config {
                Some(path) => ExperienceConfig::load(path)?,
                None => ExperienceConfig::default(),
            };
            if let Some(scene) = scene {
                config.scene = scene.into();
            }
            simulate(config, ticks, dt, &hold, every, (width, height));
        }
        Commands::Proximity { max, steps } => {
            let mut feedback = ProximityFeedback::new(Default::default());
            feedback.capture_reference(Vec3::ZERO, Vec3::new(0.0, 0.0, -max));
            println!(
                "{:>8} {:>7} {:>7} {:>7} {:>7}",
                "distance", "factor", "bloom", "volume", "grain"
            );
            let steps = steps.max(1);
            for i in 0..=steps {
                let d = max * (steps - i) as f32 / steps as f32;
                if let Some(v) = feedback.evaluate(d) {
                    println!(
                        "{:>8.2} {:>7.3} {:>7.3} {:>7.3} {:>7.3}",
                        d, v.factor, v.bloom_strength, v.ambient_volume, v.film_grain
                    );
                }
            }
        }
    }

    Ok(())
}

fn simulate(
    config: ExperienceConfig,
    ticks: u64,
    dt: f32,
    hold: &[String],
    every: u64,
    viewport: (f32, f32),
) {
    let manifest = SourceManifest::builtin();
    let mut audio = RecordingAudio::new();
    for source in manifest.sources() {
        if source.kind == SourceKind::Audio {
            audio.load(source.name.as_str());
        }
    }
    let keymap = config.keymap.clone();
    let mut scheduler = FrameScheduler::new(config, audio, DebugTextRenderer::new());
    scheduler.set_viewport(viewport.0, viewport.1);

    let mut tracker = ResourceTracker::new(manifest);
    tracker.load_all_placeholders();
    for event in tracker.drain_events() {
        scheduler.handle_resource_event(&event, tracker.catalog());
    }

    let mut input = InputState::new();
    input.apply(&Action::Activate);
    input.apply(&Action::PointerLock(true));
    for code in hold {
        let action = keymap.translate(code, true);
        if action == Action::Noop {
            tracing::warn!(%code, "key not bound, ignored");
        }
        input.apply(&action);
    }

    for _ in 0..ticks {
        let snapshot = input.take_snapshot();
        let report = scheduler.tick(&snapshot, dt);
        for event in &report.events {
            println!("tick {:>4}: {:?}", report.tick, event);
        }
        if every > 0 && report.tick % every == 0 {
            print!("{}", report.output);
            let p = scheduler.rig().position();
            println!(
                "Player: ({:.2}, {:.2}, {:.2}) phase={} hovered={}",
                p.x,
                p.y,
                p.z,
                report.phase.name(),
                report.hovered
            );
            if let Some(values) = report.proximity {
                println!(
                    "Proximity: factor={:.3} bloom={:.3} volume={:.3} grain={:.3}",
                    values.factor, values.bloom_strength, values.ambient_volume, values.film_grain
                );
            }
        }
    }

    println!("{}", WorldInspector::summary(scheduler.world()));
    for info in WorldInspector::list_entities(scheduler.world()) {
        println!("  {info}");
    }
    println!(
        "Frame time: avg={:?} fps={:.1}",
        scheduler.timer().average(),
        scheduler.timer().fps()
    );
}
