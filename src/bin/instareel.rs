use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "instareel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print composition metadata for a props file.
    Meta(MetaArgs),
    /// Print the caption pages derived from a props file.
    Pages(PropsArgs),
    /// Evaluate a single frame tree.
    Frame(FrameArgs),
    /// Evaluate a frame range as JSON lines.
    Frames(FramesArgs),
    /// Build props for one clip from an analysis file and clip picks.
    Props(IngestArgs),
}

#[derive(Parser, Debug)]
struct PropsArgs {
    /// Input props JSON.
    #[arg(long)]
    props: PathBuf,

    /// Timeline frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Silence gap (ms) that starts a new caption page.
    #[arg(long, default_value_t = instareel::SWITCH_CAPTIONS_EVERY_MS)]
    combine_within_ms: f64,

    /// Clamp word end times to the clip window.
    #[arg(long, default_value_t = false)]
    clamp_words: bool,

    /// Directory `videoSrc` is resolved under.
    #[arg(long)]
    public_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MetaArgs {
    /// Input props JSON.
    #[arg(long)]
    props: PathBuf,

    /// Timeline frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: PropsArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    input: PropsArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the reel duration.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Frames per chunk (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Output JSON lines path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print a SHA-256 of the output to stderr.
    #[arg(long, default_value_t = false)]
    digest: bool,
}

#[derive(Parser, Debug)]
struct IngestArgs {
    /// Transcription analysis JSON.
    #[arg(long)]
    analysis: PathBuf,

    /// Clip picks JSON (array).
    #[arg(long)]
    clips: PathBuf,

    /// Clip index (0-based).
    #[arg(long, default_value_t = 0)]
    index: usize,

    /// Source video passed through as `videoSrc`.
    #[arg(long)]
    video_src: String,

    /// Output props path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Meta(args) => cmd_meta(args),
        Command::Pages(args) => cmd_pages(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Props(args) => cmd_props(args),
    }
}

fn read_props(path: &Path) -> anyhow::Result<instareel::InstaReelProps> {
    instareel::InstaReelProps::from_path(path)
        .with_context(|| format!("load props '{}'", path.display()))
}

fn load_reel(args: &PropsArgs) -> anyhow::Result<instareel::Reel> {
    let props = read_props(&args.props)?;
    let overrun = if args.clamp_words {
        instareel::WordOverrun::Clamp
    } else {
        instareel::WordOverrun::Allow
    };
    let config = instareel::ReelConfig {
        fps: instareel::Fps::new(args.fps, 1)?,
        captions: instareel::CaptionOptions {
            combine_within_ms: args.combine_within_ms,
            overrun,
        },
        public_dir: args.public_dir.clone(),
        ..instareel::ReelConfig::default()
    };
    instareel::Reel::new(props, config)
        .with_context(|| format!("build reel from '{}'", args.props.display()))
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    let Some(path) = out else {
        return Ok(Box::new(BufWriter::new(std::io::stdout().lock())));
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(f)))
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    let mut w = open_output(out)?;
    serde_json::to_writer_pretty(&mut w, value).context("serialize JSON")?;
    writeln!(w)?;
    w.flush()?;
    if let Some(path) = out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_meta(args: MetaArgs) -> anyhow::Result<()> {
    let props = read_props(&args.props)?;
    let meta = instareel::calculate_metadata(
        &props,
        instareel::Fps::new(args.fps, 1)?,
        instareel::Canvas::default(),
    )?;
    write_json(None, &meta)
}

fn cmd_pages(args: PropsArgs) -> anyhow::Result<()> {
    let reel = load_reel(&args)?;
    write_json(None, &reel.pages())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let reel = load_reel(&args.input)?;
    let tree = instareel::render_frame(&reel, instareel::FrameIndex(args.frame))?;
    write_json(args.out.as_deref(), &tree)
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let reel = load_reel(&args.input)?;
    let end = args.end.unwrap_or(reel.duration_frames());
    let range =
        instareel::FrameRange::new(instareel::FrameIndex(args.start), instareel::FrameIndex(end))?;
    let threading = instareel::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let (trees, stats) = instareel::render_frames_with_stats(&reel, range, &threading)?;

    let mut hasher = sha2::Sha256::new();
    let mut w = open_output(args.out.as_deref())?;
    for tree in &trees {
        let line = serde_json::to_vec(tree).context("serialize frame tree")?;
        hasher.update(&line);
        hasher.update(b"\n");
        w.write_all(&line)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;

    eprintln!(
        "frames={} captioned={} active={}",
        stats.frames_total, stats.frames_with_captions, stats.frames_with_active_token
    );
    if args.digest {
        let digest = hasher.finalize();
        let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
        eprintln!("sha256={hex}");
    }
    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_props(args: IngestArgs) -> anyhow::Result<()> {
    let analysis = instareel::Analysis::from_path(&args.analysis)
        .with_context(|| format!("load analysis '{}'", args.analysis.display()))?;
    let clips = instareel::ingest::clip::clip_specs_from_path(&args.clips)
        .with_context(|| format!("load clip specs '{}'", args.clips.display()))?;
    let spec = clips.get(args.index).with_context(|| {
        format!(
            "clip index {} out of range ({} clips)",
            args.index,
            clips.len()
        )
    })?;

    let props = instareel::props_for_clip(args.video_src, spec, analysis.words());
    props.validate()?;
    tracing::info!(name = %instareel::reel_name(args.index, spec), "built props");
    write_json(args.out.as_deref(), &props)
}
