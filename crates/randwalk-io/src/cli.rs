use crate::{RunManifest, DEFAULT_ARTIFACT_DIR};
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use randwalk_core::{Ensemble, RunConfig, SeedStrategy, WalkParams};
use randwalk_playback::{render_animation, Frame, FrameRenderer, Playback, PlaybackScheduler};
use randwalk_sampler::{compute_statistics, StatisticsSeries};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "randwalk")]
#[command(about = "Random walk ensembles with running mean and variance")]
#[command(long_about = "Simulates ensembles of 2D random walks, summarizes them step by step \
                        and schedules the frames an animation renderer consumes")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate one ensemble and print its manifest as JSON
    Run(RunArgs),

    /// Simulate several ensembles with randomized parameters
    Batch {
        /// Number of runs
        #[arg(long, default_value = "10")]
        runs: usize,

        /// How walks draw their randomness
        #[arg(long, value_enum, default_value = "shared")]
        strategy: StrategyType,

        /// Directory artifact names are resolved against
        #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
        out_dir: PathBuf,
    },

    /// Simulate one ensemble and play every animation frame through a logging renderer
    Frames(RunArgs),
}

#[derive(Args, Clone, Debug)]
pub struct RunArgs {
    /// Logical animation steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Largest single substep displacement
    #[arg(long)]
    pub max_step: Option<f64>,

    /// Number of walks in the ensemble
    #[arg(long)]
    pub walks: Option<usize>,

    /// Random seed (drawn from entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// How walks draw their randomness
    #[arg(long, value_enum, default_value = "shared")]
    pub strategy: StrategyType,

    /// Walk parameters as JSON, e.g. '{"num_steps": 200}'
    #[arg(long)]
    pub params: Option<String>,

    /// Directory artifact names are resolved against
    #[arg(long, default_value = DEFAULT_ARTIFACT_DIR)]
    pub out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyType {
    #[value(name = "shared")]
    Shared,
    #[value(name = "per-walk")]
    PerWalk,
}

impl From<StrategyType> for SeedStrategy {
    fn from(strategy: StrategyType) -> Self {
        match strategy {
            StrategyType::Shared => SeedStrategy::SharedStream,
            StrategyType::PerWalk => SeedStrategy::PerWalk,
        }
    }
}

impl RunArgs {
    /// Resolves flags over JSON params over defaults, then validates.
    pub fn to_config(&self) -> anyhow::Result<RunConfig> {
        let mut params = match &self.params {
            Some(json) => serde_json::from_str::<WalkParams>(json)
                .with_context(|| format!("invalid --params JSON: {json}"))?,
            None => WalkParams::default(),
        };
        if let Some(steps) = self.steps {
            params.num_steps = steps;
        }
        if let Some(max_step) = self.max_step {
            params.max_step = max_step;
        }
        if let Some(walks) = self.walks {
            params.num_walks = walks;
        }
        params.validate()?;

        let config = match self.seed {
            Some(seed) => RunConfig::new(params, seed),
            None => RunConfig::from_entropy(params),
        };
        Ok(config.with_strategy(self.strategy.into()))
    }
}

/// One simulated run: its ensemble, statistics and manifest.
pub struct RunOutput {
    pub ensemble: Ensemble,
    pub stats: StatisticsSeries,
    pub manifest: RunManifest,
}

pub fn simulate(config: &RunConfig, out_dir: &Path) -> anyhow::Result<RunOutput> {
    info!(
        seed = config.seed,
        num_steps = config.params.num_steps,
        max_step = config.params.max_step,
        num_walks = config.params.num_walks,
        strategy = config.strategy.as_str(),
        "simulating ensemble"
    );

    let ensemble = randwalk_sampler::run(config)?;
    let stats = compute_statistics(&ensemble)?;
    let manifest = RunManifest::new(config, out_dir).with_statistics(&stats);

    if let (Some(mean), Some(variance)) = (stats.final_mean(), stats.final_variance()) {
        info!(
            run_key = %manifest.run_key,
            final_mean_x = mean.x(),
            final_mean_y = mean.y(),
            final_variance = variance,
            "ensemble summarized"
        );
    }

    Ok(RunOutput { ensemble, stats, manifest })
}

pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run(args) => {
            let config = args.to_config()?;
            let output = simulate(&config, &args.out_dir)?;
            println!("{}", output.manifest.to_json_pretty()?);
        }

        Commands::Batch { runs, strategy, out_dir } => {
            run_batch(runs, strategy.into(), &out_dir)?;
        }

        Commands::Frames(args) => {
            let config = args.to_config()?;
            let output = simulate(&config, &args.out_dir)?;
            let summary = play_frames(&config, &output)?;
            info!(
                frames = summary.frames,
                held = summary.held,
                max_variance = summary.max_variance,
                "playback finished"
            );
            println!("{}", output.manifest.to_json_pretty()?);
        }
    }

    Ok(())
}

/// Runs `runs` simulations, each with fresh random parameters and seed.
pub fn run_batch(runs: usize, strategy: SeedStrategy, out_dir: &Path) -> anyhow::Result<Vec<RunManifest>> {
    let mut rng = rand::thread_rng();
    let mut manifests = Vec::with_capacity(runs);

    for run in 0..runs {
        let config = RunConfig::from_entropy(WalkParams::sample(&mut rng)).with_strategy(strategy);
        debug!(run, run_key = %config.run_key(), "batch run");
        let output = simulate(&config, out_dir)?;
        println!("{}", output.manifest.to_json()?);
        manifests.push(output.manifest);
    }

    info!(runs, "batch complete");
    Ok(manifests)
}

/// Totals gathered while playing an animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackSummary {
    pub frames: usize,
    pub held: usize,
    pub max_variance: f64,
}

/// Renderer stand-in that logs each frame instead of drawing it.
#[derive(Default)]
pub struct LoggingRenderer {
    summary: PlaybackSummary,
}

impl LoggingRenderer {
    pub fn summary(&self) -> &PlaybackSummary {
        &self.summary
    }
}

impl FrameRenderer for LoggingRenderer {
    type Error = anyhow::Error;

    fn render(&mut self, frame: &Frame<'_>) -> anyhow::Result<()> {
        let variance = frame.variances.last().copied().unwrap_or_default();
        debug!(
            logical = frame.logical_frame,
            raw = frame.raw_index,
            held = frame.held,
            variance,
            bounds = ?frame.bounds,
            "frame"
        );
        self.summary.frames += 1;
        self.summary.held += frame.held as usize;
        self.summary.max_variance = self.summary.max_variance.max(variance);
        Ok(())
    }
}

pub fn play_frames(config: &RunConfig, output: &RunOutput) -> anyhow::Result<PlaybackSummary> {
    let scheduler = PlaybackScheduler::for_params(&config.params);
    let playback = Playback::new(scheduler, &output.ensemble, &output.stats)?;
    let mut renderer = LoggingRenderer::default();
    render_animation(&playback, &mut renderer)?;
    Ok(renderer.summary().clone())
}
