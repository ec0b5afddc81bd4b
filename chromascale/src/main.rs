//! chromascale command-line driver
//!
//! Per-frame loop around the core pipeline: load a frame, resize it in
//! linear light, convert to the output container's color space, save.
//! A frame that fails is logged and skipped so the rest of a sequence
//! still gets processed; only setup problems abort the run.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{error, info};

use chromascale::color::{DEFAULT_GAMMA, GammaTables, convert_image};
use chromascale::io::{
    FileKind, YuvLayout, bmp_dimensions, detect_file_kind, detect_sequence, numbered_output,
    read_bmp, read_yuv, sniff_file_kind, write_bmp, write_yuv,
};
use chromascale::resample::resize_frame;
use chromascale::{ColorSpace, EdgeMethod, Image};

/// Smallest accepted output dimension
const MIN_DIMENSION: u32 = 1;
/// Largest accepted output dimension
const MAX_DIMENSION: u32 = 4096;

#[derive(Parser, Debug)]
#[command(name = "chromascale")]
#[command(about = "Resize BMP or raw YUV 4:2:0 images with a gamma-correct Lanczos filter")]
struct Args {
    /// Gamma value used to linearize pixel data; 1.0 disables correction
    #[arg(short, long, default_value_t = DEFAULT_GAMMA)]
    gamma: f64,

    /// Output:input scale ratio
    #[arg(short = 'r', long, default_value_t = 2.0)]
    scale: f64,

    /// Input width in pixels (required for YUV input)
    #[arg(short, long)]
    width: Option<u32>,

    /// Input height in lines (required for YUV input)
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Chroma-plane ordering of raw YUV files
    #[arg(short = 'y', long, value_enum, default_value_t = LayoutArg::I420)]
    layout: LayoutArg,

    /// Edge handling at the image boundary
    #[arg(short, long, value_enum, default_value_t = EdgeArg::Repeat)]
    edge: EdgeArg,

    /// Source image file (.bmp or .yuv)
    input: PathBuf,

    /// Destination image file (.bmp or .yuv)
    output: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LayoutArg {
    I420,
    Yv12,
    Nv12,
    Nv21,
}

impl From<LayoutArg> for YuvLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::I420 => YuvLayout::I420,
            LayoutArg::Yv12 => YuvLayout::Yv12,
            LayoutArg::Nv12 => YuvLayout::Nv12,
            LayoutArg::Nv21 => YuvLayout::Nv21,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum EdgeArg {
    Repeat,
    Mirror,
    Nocontrib,
}

impl From<EdgeArg> for EdgeMethod {
    fn from(arg: EdgeArg) -> Self {
        match arg {
            EdgeArg::Repeat => EdgeMethod::Repeat,
            EdgeArg::Mirror => EdgeMethod::Mirror,
            EdgeArg::Nocontrib => EdgeMethod::NoContrib,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !args.input.exists() {
        bail!("input file {} cannot be opened", args.input.display());
    }
    if !(args.scale > 0.0) {
        bail!("scale ratio must be positive");
    }

    let in_kind = sniff_file_kind(&args.input)?;
    // Without a recognizable output extension, keep the input container
    // to avoid a color space conversion
    let out_kind = detect_file_kind(&args.output).unwrap_or(in_kind);

    // Input dimensions: BMP carries them in its header, YUV needs them
    // on the command line
    let (in_w, in_h) = match in_kind {
        FileKind::Bmp => {
            let file = File::open(&args.input)
                .with_context(|| format!("opening {}", args.input.display()))?;
            bmp_dimensions(file).context("cannot determine BMP dimensions")?
        }
        FileKind::Yuv => match (args.width, args.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
            _ => bail!("width and height must be supplied when the input is a YUV file"),
        },
    };

    let out_w = (in_w as f64 * args.scale + 0.5) as u32;
    let out_h = (in_h as f64 * args.scale + 0.5) as u32;
    for dim in [out_w, out_h] {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dim) {
            bail!("output dimension {dim} outside {MIN_DIMENSION}..{MAX_DIMENSION}");
        }
    }

    let dims = (in_kind == FileKind::Yuv).then_some((in_w, in_h));
    let seq = detect_sequence(&args.input, in_kind, dims)?;
    let tables = GammaTables::new(args.gamma)?;
    let edge = EdgeMethod::from(args.edge);
    let layout = YuvLayout::from(args.layout);
    let multi_out = seq.total_frames() > 1;

    info!(
        "{} frame(s): {}x{} -> {}x{}, gamma {}, {:?} edges",
        seq.total_frames(),
        in_w,
        in_h,
        out_w,
        out_h,
        args.gamma,
        edge
    );

    let mut failures = 0u32;
    let mut out_frame = seq.start_frame();
    for file_index in 0..seq.num_files() {
        let in_path = seq.nth_file(file_index);
        for sub_frame in 0..seq.frames_per_file() {
            let out_path = if multi_out {
                numbered_output(&args.output, out_frame)
            } else {
                args.output.clone()
            };

            if let Err(err) = process_frame(
                &in_path, &out_path, in_kind, out_kind, sub_frame, (in_w, in_h),
                (out_w, out_h), &tables, edge, layout,
            ) {
                error!("skipping frame {}: {err:#}", out_frame);
                failures += 1;
            }
            out_frame += 1;
        }
    }

    if failures > 0 {
        info!(
            "finished with {failures} of {} frame(s) skipped",
            seq.total_frames()
        );
    }
    Ok(())
}

/// Load, resize, convert, and save a single frame.
#[allow(clippy::too_many_arguments)]
fn process_frame(
    in_path: &Path,
    out_path: &Path,
    in_kind: FileKind,
    out_kind: FileKind,
    sub_frame: u32,
    (in_w, in_h): (u32, u32),
    (out_w, out_h): (u32, u32),
    tables: &GammaTables,
    edge: EdgeMethod,
    layout: YuvLayout,
) -> Result<()> {
    let file =
        File::open(in_path).with_context(|| format!("opening {}", in_path.display()))?;
    let src = match in_kind {
        FileKind::Bmp => read_bmp(file).context("reading BMP frame")?,
        FileKind::Yuv => read_yuv(file, ColorSpace::Yuv420, in_w, in_h, sub_frame, layout)
            .context("reading YUV frame")?,
    };
    if src.dimensions() != (in_w, in_h) {
        bail!(
            "frame is {}x{}, expected {in_w}x{in_h}",
            src.width(),
            src.height()
        );
    }

    let resized = resize_frame(&src, out_w, out_h, tables, edge).context("resizing frame")?;

    let target_space = match out_kind {
        FileKind::Bmp => ColorSpace::Rgb,
        FileKind::Yuv => ColorSpace::Yuv420,
    };
    let output = if resized.color_space() == target_space {
        resized
    } else {
        let mut converted = Image::fixed8(target_space, out_w, out_h)?;
        convert_image(&resized, &mut converted).context("converting color space")?;
        converted
    };

    let file =
        File::create(out_path).with_context(|| format!("creating {}", out_path.display()))?;
    let mut writer = BufWriter::new(file);
    match out_kind {
        FileKind::Bmp => write_bmp(&output, &mut writer).context("writing BMP frame")?,
        FileKind::Yuv => {
            write_yuv(&output, &mut writer, layout).context("writing YUV frame")?
        }
    }
    info!("{} -> {}", in_path.display(), out_path.display());
    Ok(())
}
