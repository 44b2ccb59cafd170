use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use badgeforge::{
    BADGE_HEIGHT, BADGE_WIDTH, CropRect, FrameFile, FrameSequence, SourceImage, SpeedLevel,
    TimelineLimits, decode, encode, render_sprite, sample_frame,
};

#[derive(Parser, Debug)]
#[command(name = "badgeforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the header of a frame file.
    Info(InfoArgs),
    /// Export a frame file as a single-row sprite sheet PNG.
    Export(ExportArgs),
    /// Threshold one or more still images into a frame file.
    Convert(ConvertArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input frame file (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input frame file (JSON).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input images, one per frame, in playback order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Output frame file path.
    #[arg(long)]
    out: PathBuf,

    /// Luma threshold in 0-255; luma >= threshold maps to a lit pixel.
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Invert the black/white classification.
    #[arg(long, default_value_t = false)]
    invert: bool,

    /// Crop rectangle `x,y,w,h` in source pixels (defaults to the full image).
    #[arg(long, value_parser = parse_crop)]
    crop: Option<(f64, f64, f64, f64)>,

    /// Speed level (1-8) stored in the file.
    #[arg(long)]
    speed: Option<u8>,

    /// Maximum number of frames to accept.
    #[arg(long, default_value_t = 24)]
    max_frames: usize,
}

fn parse_crop(s: &str) -> Result<(f64, f64, f64, f64), String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("crop must be four numbers 'x,y,w,h': {e}"))?;
    match parts[..] {
        [x, y, w, h] => Ok((x, y, w, h)),
        _ => Err(format!("crop must be four numbers 'x,y,w,h', got {}", parts.len())),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Export(args) => cmd_export(args),
        Command::Convert(args) => cmd_convert(args),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let file = FrameFile::from_path(&args.in_path)?;
    let (seq, speed) = decode(&file)?;
    println!(
        "version {} | {}x{} | {} frames | speed {}",
        file.version,
        file.width,
        file.height,
        seq.len(),
        speed.map_or_else(|| "-".to_owned(), |s| format!("{} ({} fps)", s.0, s.fps())),
    );
    if let Some(created) = file.meta.and_then(|m| m.created_at) {
        println!("created {created}");
    }
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let file = FrameFile::from_path(&args.in_path)?;
    let (seq, _speed) = decode(&file)?;
    let sprite = render_sprite(&seq)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &sprite.png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{}, {} frames)",
        args.out.display(),
        sprite.width,
        sprite.height,
        sprite.frame_count
    );
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let limits = TimelineLimits::new(args.max_frames)?;
    if args.images.len() > limits.max_frames {
        anyhow::bail!(
            "{} input images exceed the frame limit of {}",
            args.images.len(),
            limits.max_frames
        );
    }

    let mut frames = Vec::with_capacity(args.images.len());
    for path in &args.images {
        let img = image::open(path)
            .with_context(|| format!("decode image '{}'", path.display()))?
            .to_rgba8();
        let (w, h) = img.dimensions();
        let src = SourceImage::new(w, h, img.as_raw())?;
        let crop = match args.crop {
            Some((x, y, cw, ch)) => CropRect {
                x,
                y,
                width: cw,
                height: ch,
            },
            None => CropRect::full(&src),
        };
        frames.push(sample_frame(
            &src,
            crop,
            BADGE_WIDTH,
            BADGE_HEIGHT,
            args.threshold,
            args.invert,
        )?);
    }

    let seq = FrameSequence::from_frames(frames)?;
    let file = encode(&seq, args.speed.map(SpeedLevel));
    file.write_path(&args.out)?;

    eprintln!("wrote {} ({} frames)", args.out.display(), seq.len());
    Ok(())
}
