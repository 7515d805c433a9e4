//! Merge Sort Studio - Terminal Entry Point
//!
//! Generates a merge sort trace for a typed, loaded, shared or random array
//! and plays it back in the terminal, one step per line.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mergesort_studio::{
    config::StudioConfig,
    generate_trace, i18n,
    input::{self, InputPolicy},
    trace::{Step, TraceExport, Value},
    AutoPlayer, Language, PlaybackEvent,
};

/// Animate merge sort step by step
#[derive(Debug, Parser)]
#[command(name = "mergesort-studio", version, about)]
struct Args {
    /// Comma or space separated values, e.g. "5,3,5,1"
    #[arg(long, conflicts_with_all = ["file", "link"])]
    values: Option<String>,

    /// Load values from a .json array or a text file
    #[arg(long, conflicts_with = "link")]
    file: Option<PathBuf>,

    /// Share link or query carrying `data=...`
    #[arg(long)]
    link: Option<String>,

    /// Seed for the random array
    #[arg(long)]
    seed: Option<u64>,

    /// Required number of values (overrides config)
    #[arg(long)]
    size: Option<usize>,

    /// Playback speed (overrides config)
    #[arg(long)]
    speed: Option<u32>,

    /// Description language: en or ja
    #[arg(long)]
    lang: Option<Language>,

    /// Config file (.toml or .json) instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the trace as JSON to this path ("-" for stdout) and exit
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print every step immediately instead of animating
    #[arg(long)]
    no_play: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(args.log_file.as_ref())?;

    tracing::info!("Starting Merge Sort Studio");

    let mut config = match &args.config {
        Some(path) => StudioConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StudioConfig::load_or_default(),
    };
    if let Some(size) = args.size {
        config.input = config.input.with_size(size);
    }
    if let Some(speed) = args.speed {
        config.playback.initial_speed = speed;
    }
    let language = args.lang.unwrap_or(config.language);
    i18n::set_language(language);

    let values = acquire_input(&args, &config.input)?;
    tracing::info!(share = %input::encode_share_query(&values), "input ready");

    let trace = generate_trace(&values);

    if let Some(path) = &args.json {
        let export = TraceExport::new(&trace, language);
        if path.as_os_str() == "-" {
            println!("{}", export.to_json()?);
        } else {
            export.save_to_file(path)?;
        }
        return Ok(());
    }

    let mut out = std::io::stdout().lock();

    if args.no_play {
        for (cursor, step) in trace.iter().enumerate() {
            render(&mut out, step, cursor, trace.len())?;
        }
        return Ok(());
    }

    let total = trace.len();
    let mut player = AutoPlayer::new(trace, &config.playback);
    let events = player.events();

    let first = player.snapshot();
    render(&mut out, &first.step, first.cursor, total)?;

    player.set_playing(true)?;
    if !player.is_playing() {
        return Ok(());
    }

    for event in events.iter() {
        match event {
            PlaybackEvent::CursorMoved { cursor } => {
                // The ticker may already be further along; draw the step the event names
                if let Some(step) = player.step_at(cursor) {
                    render(&mut out, &step, cursor, total)?;
                }
            }
            PlaybackEvent::Stopped { cursor } => {
                tracing::info!(cursor, "playback finished");
                break;
            }
            PlaybackEvent::Started { .. } | PlaybackEvent::Reset { .. } => {}
        }
    }

    Ok(())
}

fn init_logging(
    log_file: Option<&PathBuf>,
) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,mergesort_studio=debug"))
    };

    // Terminal output is the animation itself, so logs go to stderr
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let name = path
                .file_name()
                .context("--log-file must name a file")?;
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter())
                .with(stderr_layer)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter())
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

fn acquire_input(args: &Args, policy: &InputPolicy) -> anyhow::Result<Vec<Value>> {
    if let Some(text) = &args.values {
        return Ok(input::parse_values(text, policy)?);
    }
    if let Some(path) = &args.file {
        return Ok(input::load_file(path, policy)?);
    }
    if let Some(link) = &args.link {
        return Ok(input::decode_share_link(link, policy)?);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(input::random_values(policy, &mut rng))
}

fn render(out: &mut impl Write, step: &Step, cursor: usize, total: usize) -> std::io::Result<()> {
    let cells: Vec<String> = step
        .array
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            if step.is_highlighted(idx) {
                format!("[{value:>2}]")
            } else if step.in_active_range(idx) {
                format!(" {value:>2} ")
            } else if step.active_range.is_some() {
                format!(" {:>2} ", "··")
            } else {
                format!(" {value:>2} ")
            }
        })
        .collect();

    let code = step
        .annotation
        .map(|line| format!("  | {:>2}: {}", line.line() + 1, line.text().trim()))
        .unwrap_or_default();

    writeln!(
        out,
        "{:>4}/{:<4} {:<9} {}{}",
        cursor,
        total.saturating_sub(1),
        step.kind.label(),
        cells.join(""),
        code
    )?;
    writeln!(out, "          {}", step.description())?;
    out.flush()
}
