use anyhow::Context;
use clap::Parser;
use generator::scene::build_frame;
use log::info;
use output::sink::JsonLinesSink;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;
use workflow::source::load_frames;

mod generator;
mod output;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the LiDAR detection post-processing core")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Replay recorded detection frames (JSON array) instead of synthesizing them
    #[arg(long)]
    frames: Option<PathBuf>,
    /// Number of synthetic frames to generate when no recording is given
    #[arg(long, default_value_t = 10)]
    synthetic: u64,
    #[arg(long)]
    seed: Option<u64>,
    /// Longitudinal offset from sensor origin to vehicle origin, in meters
    #[arg(long)]
    center_shift: Option<f64>,
    /// Single score threshold applied to every configured class
    #[arg(long)]
    threshold: Option<f32>,
    /// Append every frame output as a JSON line
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        WorkflowConfig::default()
    };
    workflow_config.apply_overrides(args.center_shift, args.threshold, args.seed);
    if args.output.is_some() {
        workflow_config.output = args.output;
    }

    let runner = Runner::new(&workflow_config)?;

    let frames = if let Some(path) = args.frames {
        load_frames(path)?
    } else {
        (0..args.synthetic)
            .map(|seq| build_frame(&workflow_config.generator, seq))
            .collect::<anyhow::Result<Vec<_>>>()
            .context("synthesizing detection frames")?
    };
    info!("processing {} frames", frames.len());

    let mut sink = workflow_config
        .output
        .as_ref()
        .map(JsonLinesSink::open)
        .transpose()?;

    for frame in &frames {
        let result = runner.execute(frame);
        let report = &result.output.report;
        let labels = result
            .label_counts
            .iter()
            .map(|(label, count)| format!("{}={}", label, count))
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "frame {} -> emitted {}/{} (malformed {}, below threshold {}, unmapped {}) nearest {} [{}]",
            frame.header.seq,
            report.emitted,
            report.received,
            report.malformed,
            report.below_threshold,
            report.unmapped,
            result
                .nearest_range
                .map(|range| format!("{:.2} m", range))
                .unwrap_or_else(|| "-".into()),
            labels
        );

        if let Some(sink) = sink.as_mut() {
            sink.write(&result.output)?;
        }
    }

    if let Some(sink) = sink.as_mut() {
        sink.flush()?;
    }

    let metrics = runner.metrics();
    println!(
        "Run -> frames {}, detections {}, emitted {}, rejected {}, malformed {}",
        metrics.frames, metrics.received, metrics.emitted, metrics.rejected, metrics.malformed
    );

    Ok(())
}
