// SPDX-License-Identifier: Apache-2.0
//! Planar developer CLI: replay recorded surface captures through the
//! tracker and print per-frame change summaries.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
#![allow(clippy::print_stdout, clippy::module_name_repetitions)]

mod capture;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use planar_core::{normalize, Backend, PlaneRecord, PlaneTracker};
use planar_port::{dispatch, PlaneSink};
use tracing::debug;

use crate::capture::{classify, detect_backend, WireFrame};

#[derive(Parser)]
#[command(name = "planar", about = "Replay recorded surface captures", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report which backend shape a capture uses.
    Detect {
        /// Capture file (JSON array of frames).
        capture: PathBuf,
    },
    /// Replay a capture through the tracker and summarize each frame.
    Replay {
        /// Capture file (JSON array of frames).
        capture: PathBuf,
        /// Force a backend shape instead of detecting it from the capture.
        #[arg(long, value_enum)]
        backend: Option<BackendArg>,
        /// Print each changed surface id as it happens.
        #[arg(long, short)]
        verbose: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Transform,
    Timestamped,
    Indexed,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Transform => Backend::Transform,
            BackendArg::Timestamped => Backend::Timestamped,
            BackendArg::Indexed => Backend::Indexed,
        }
    }
}

/// Prints one line per changed surface, prefixed by frame index.
struct PrintSink {
    frame: usize,
}

impl PlaneSink for PrintSink {
    fn planes_added(&mut self, planes: &[PlaneRecord]) {
        for plane in planes {
            println!("frame {}: + {}", self.frame, plane.id);
        }
    }
    fn planes_updated(&mut self, planes: &[PlaneRecord]) {
        for plane in planes {
            println!("frame {}: ~ {}", self.frame, plane.id);
        }
    }
    fn planes_removed(&mut self, planes: &[PlaneRecord]) {
        for plane in planes {
            println!("frame {}: - {}", self.frame, plane.id);
        }
    }
}

fn load_capture(path: &PathBuf) -> Result<Vec<WireFrame>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading capture {}", path.display()))?;
    serde_json::from_str(&text).context("capture is not a JSON array of frames")
}

/// Session backend: forced by flag, otherwise detected from the first record
/// of the capture and fixed for the whole replay.
fn session_backend(frames: &[WireFrame], forced: Option<BackendArg>) -> Backend {
    if let Some(arg) = forced {
        return arg.into();
    }
    frames
        .iter()
        .flatten()
        .next()
        .map_or(Backend::Indexed, detect_backend)
}

fn cmd_detect(path: &PathBuf) -> Result<()> {
    let frames = load_capture(path)?;
    let backend = session_backend(&frames, None);
    println!("{backend:?}");
    Ok(())
}

fn cmd_replay(path: &PathBuf, forced: Option<BackendArg>, verbose: bool) -> Result<()> {
    let frames = load_capture(path)?;
    let backend = session_backend(&frames, forced);
    debug!(?backend, frames = frames.len(), "replaying capture");

    let mut tracker = PlaneTracker::new();
    let mut table = Table::new();
    table.set_header(["frame", "added", "updated", "removed", "tracked"]);

    for (ix, frame) in frames.iter().enumerate() {
        let mut batch = Vec::with_capacity(frame.len());
        for record in frame {
            let raw = classify(record, backend)
                .with_context(|| format!("frame {ix}: bad record for {backend:?} backend"))?;
            batch.push(normalize(&raw));
        }
        let delta = tracker.step(&batch);
        if verbose {
            dispatch(&delta, &mut PrintSink { frame: ix });
        }
        let stats = delta.stats();
        table.add_row([
            ix.to_string(),
            stats.added.to_string(),
            stats.updated.to_string(),
            stats.removed.to_string(),
            tracker.len().to_string(),
        ]);
    }

    println!("{table}");
    println!(
        "replayed {} frames ({backend:?} backend), {} surfaces still tracked",
        frames.len(),
        tracker.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Detect { capture } => cmd_detect(&capture),
        Command::Replay {
            capture,
            backend,
            verbose,
        } => cmd_replay(&capture, backend, verbose),
    }
}
