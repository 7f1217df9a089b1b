use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

use placard::{
    BatchRequest, FieldSnapshot, Rasterizer, RenderConfig, Rgba8, render_batch, render_one,
    split_nonblank_lines,
};

#[derive(Parser, Debug)]
#[command(name = "placard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one text string to a PNG.
    Single(SingleArgs),
    /// Render one PNG per line of an input file and bundle them into a ZIP.
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Text color as a hex color.
    #[arg(long, default_value = "#FFFFFF")]
    text_color: Rgba8,

    /// Canvas fill as a hex color.
    #[arg(long, default_value = "#10B981")]
    background_color: Rgba8,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(50..=1000))]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 300, value_parser = clap::value_parser!(u32).range(50..=1000))]
    height: u32,

    /// Font size in pixels.
    #[arg(long, default_value_t = 45, value_parser = clap::value_parser!(u32).range(8..=200))]
    font_size: u32,

    /// Font family fallback chain (best effort, resolved from system fonts).
    #[arg(long, default_value = "Segoe UI, system-ui, -apple-system, Helvetica")]
    font_family: String,
}

impl StyleArgs {
    fn into_config(self, text: String) -> RenderConfig {
        RenderConfig {
            text,
            text_color: self.text_color,
            background_color: self.background_color,
            width: self.width,
            height: self.height,
            font_size_px: self.font_size,
            font_family: self.font_family,
        }
    }
}

#[derive(Parser, Debug)]
struct SingleArgs {
    /// Text to draw.
    #[arg(long, default_value = "create")]
    text: String,

    /// Output PNG path. Defaults to a name derived from the text.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    style: StyleArgs,

    /// Print the active field values as JSON before rendering.
    #[arg(long)]
    dump_config: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input text file, one image per non-blank line.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output ZIP path.
    #[arg(long, default_value = "generated-images.zip")]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    /// Print the active field values as JSON before rendering.
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Single(args) => cmd_single(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn cmd_single(args: SingleArgs) -> anyhow::Result<()> {
    let config = args.style.into_config(args.text);
    config.validate()?;

    if args.dump_config {
        eprintln!("{}", FieldSnapshot::new(&config.text, &config).to_json()?);
    }

    let mut raster = Rasterizer::new();
    let export = render_one(&mut raster, &config)?;

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(&export.file_name));
    ensure_parent_dir(&out)?;
    std::fs::write(&out, &export.bytes)
        .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read batch input '{}'", args.in_path.display()))?;
    let items = split_nonblank_lines(&raw);

    let config = args.style.into_config(String::new());
    config.validate()?;

    if args.dump_config {
        eprintln!("{}", FieldSnapshot::new(&raw, &config).to_json()?);
    }

    let mut raster = Rasterizer::new();
    let request = BatchRequest::new(items, config);
    let archive = render_batch(&mut raster, &request)?;

    if archive.entry_count == 0 {
        eprintln!("no renderable items; writing an empty archive");
    }

    ensure_parent_dir(&args.out)?;
    std::fs::write(&args.out, &archive.bytes)
        .with_context(|| format!("write zip '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} entries)",
        args.out.display(),
        archive.entry_count
    );
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
