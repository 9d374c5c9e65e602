use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use scanraster::{
    Bitmap, BlendMode, DataMap as _, FillStyle, Paint, PathShape, Pixel, Point, Rect, RenderOpts,
    Renderer, kurbo,
};

#[derive(Parser, Debug)]
#[command(name = "scanraster", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw the demo scene and write it as a PNG.
    Demo(DemoArgs),
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Image width in pixels.
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Anti-alias shape edges.
    #[arg(long)]
    antialias: bool,

    /// Blend mode for the translucent overlay.
    #[arg(long, value_enum, default_value_t = BlendChoice::Blend)]
    blend: BlendChoice,

    /// Renderer options JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BlendChoice {
    Replace,
    Blend,
    Mask,
}

impl From<BlendChoice> for BlendMode {
    fn from(v: BlendChoice) -> Self {
        match v {
            BlendChoice::Replace => BlendMode::Replace,
            BlendChoice::Blend => BlendMode::Blend,
            BlendChoice::Mask => BlendMode::Mask,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo(args) => cmd_demo(args),
    }
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let opts = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            RenderOpts::from_json_str(&json)?
        }
        None => RenderOpts::default(),
    };
    let renderer = Renderer::new(opts);

    let w = i32::try_from(args.width).context("width too large")?;
    let h = i32::try_from(args.height).context("height too large")?;
    let mut bitmap = Bitmap::new(w, h, Pixel::rgb(24, 28, 36))?;
    draw_scene(&renderer, &mut bitmap, &args)?;

    let img = bitmap.to_rgba_image();
    image::save_buffer_with_format(
        &args.out,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    let stats = renderer.pool_stats();
    tracing::info!(
        out = %args.out.display(),
        allocated = stats.allocated,
        reused = stats.reused,
        "demo written"
    );
    Ok(())
}

fn draw_scene(renderer: &Renderer, bitmap: &mut Bitmap, args: &DemoArgs) -> anyhow::Result<()> {
    let (w, h) = (f64::from(args.width), f64::from(args.height));
    let smooth = FillStyle::REPLACE.antialiased(args.antialias);

    let disc = kurbo::Circle::new((w * 0.5, h * 0.5), w.min(h) / 3.0);
    renderer
        .fill(bitmap, &disc, Paint::Constant(Pixel::rgb(230, 90, 60)), smooth)
        .context("fill disc")?;

    let overlay = kurbo::Rect::new(w * 0.1, h * 0.55, w * 0.7, h * 0.9);
    let style = FillStyle::with_blend(args.blend.into()).antialiased(args.antialias);
    renderer
        .fill(
            bitmap,
            &overlay,
            Paint::Constant(Pixel::new(160, 60, 140, 230)),
            style,
        )
        .context("fill overlay")?;

    let ellipse = kurbo::Ellipse::new((w * 0.5, h * 0.5), (w * 0.42, h * 0.2), 0.3);
    renderer
        .outline(bitmap, &PathShape::new(&ellipse, 0.1), Paint::Constant(Pixel::WHITE))
        .context("outline ellipse")?;

    let tile = checker(8, Pixel::rgb(250, 250, 250), Pixel::rgb(40, 40, 40))?;
    let (cw, ch) = (bitmap.width(), bitmap.height());
    bitmap.push_clip(Rect::from_coords(cw / 2, 0, cw - 1, ch / 4));
    let result = renderer.fill(
        bitmap,
        &Rect::from_coords(0, 0, cw - 1, ch - 1),
        Paint::copy_at(&tile, Point::new(cw / 2, 0)),
        FillStyle::REPLACE,
    );
    bitmap.pop_clip()?;
    result.context("fill clipped checker")?;
    Ok(())
}

fn checker(cell: i32, a: Pixel, b: Pixel) -> anyhow::Result<Bitmap> {
    let mut tile = Bitmap::new(cell * 2, cell * 2, a)?;
    for y in 0..cell * 2 {
        for x in 0..cell * 2 {
            if (x / cell + y / cell) % 2 == 1 {
                tile.set(x, y, b);
            }
        }
    }
    Ok(tile)
}
