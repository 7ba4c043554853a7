use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chromeshot::{Appearance, Canvas, ChromeConfig, RenderSettings, WallpaperGenerator, WallpaperStyle};

#[derive(Parser, Debug)]
#[command(name = "chromeshot", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose and render a configured window as a PNG.
    Frame(FrameArgs),
    /// Render a standalone wallpaper as a PNG.
    Wallpaper(WallpaperArgs),
    /// Print the palette for a wallpaper style as JSON.
    Palette(PaletteArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Window configuration JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct WallpaperArgs {
    /// ocean, sunset, meadow, solid or high_contrast.
    #[arg(long, value_parser = parse_enum::<WallpaperStyle>)]
    style: WallpaperStyle,

    /// Pin the appearance; unset follows `--ambient`.
    #[arg(long, value_parser = parse_enum::<Appearance>)]
    appearance: Option<Appearance>,

    #[arg(long, value_parser = parse_enum::<Appearance>, default_value = "light")]
    ambient: Appearance,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    #[arg(long, value_parser = parse_enum::<WallpaperStyle>)]
    style: WallpaperStyle,

    #[arg(long, value_parser = parse_enum::<Appearance>, default_value = "light")]
    appearance: Appearance,
}

/// Accept the same snake_case names the JSON configuration uses.
fn parse_enum<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.trim().to_ascii_lowercase()))
        .map_err(|e| format!("'{s}': {e}"))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Wallpaper(args) => cmd_wallpaper(args),
        Command::Palette(args) => cmd_palette(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = ChromeConfig::load(&args.config)
        .with_context(|| format!("load config '{}'", args.config.display()))?;
    let assets_root = args.config.parent().unwrap_or_else(|| Path::new("."));
    let ambient = cfg.ambient;

    let chrome = cfg.into_chrome(assets_root)?;
    let frame = chrome
        .render(ambient, &RenderSettings::default())
        .context("render window")?;

    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_wallpaper(args: WallpaperArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "wallpaper size must be non-zero, got {}x{}",
        args.width,
        args.height
    );
    let canvas = Canvas {
        width: args.width,
        height: args.height,
    };
    let frame = WallpaperGenerator::new(args.style)
        .override_appearance(args.appearance)
        .render_frame(canvas, args.ambient, &RenderSettings::default())
        .context("render wallpaper")?;

    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let pal = chromeshot::palette(args.style, args.appearance);
    let json = serde_json::to_string_pretty(&pal).context("serialize palette")?;
    println!("{json}");
    Ok(())
}
