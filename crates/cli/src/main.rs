#![deny(unsafe_code)]
//! CLI binary for the texdeform texture-deformation generator.
//!
//! Subcommands:
//! - `render <texture>`: warp a texture, run N ticks, write the frame as PNG
//! - `styles`: print the available warp styles

mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use error::CliError;
use texdeform_core::{Generator, Preset};
use texdeform_deformation::{TextureDeformation, WarpStyle, DEFAULT_STYLE};
use texdeform_io::ImageFileLoader;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "texdeform", about = "Animated texture-deformation generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Warp a texture, run N ticks, and write the published frame as PNG.
    Render {
        /// Texture image (power-of-two width and height). Ignored with --preset.
        texture: Option<String>,

        /// Raster width in pixels.
        #[arg(short = 'W', long, default_value_t = 128)]
        width: usize,

        /// Raster height in pixels.
        #[arg(short = 'H', long, default_value_t = 128)]
        height: usize,

        /// Warp style name or numeric id (out-of-range ids show the texture undeformed).
        #[arg(short, long)]
        style: Option<String>,

        /// Number of ticks to render before writing the frame.
        #[arg(short, long, default_value_t = 1)]
        ticks: usize,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Directory that relative texture locators resolve against.
        #[arg(long)]
        root: Option<PathBuf>,

        /// JSON preset file; replaces texture, size, style, and ticks.
        #[arg(long)]
        preset: Option<PathBuf>,
    },
    /// List available warp styles.
    Styles,
}

fn initialise_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the preset for a render from either a preset file or the flags.
fn resolve_preset(
    texture: Option<String>,
    width: usize,
    height: usize,
    style: Option<String>,
    ticks: usize,
    preset: Option<PathBuf>,
) -> Result<Preset, CliError> {
    if let Some(path) = preset {
        return Ok(Preset::from_path(&path)?);
    }

    let texture = texture
        .ok_or_else(|| CliError::Input("a texture path or --preset is required".into()))?;
    let style = match style {
        Some(s) => s.parse::<WarpStyle>()?,
        None => DEFAULT_STYLE,
    };

    let mut p = Preset::new(&texture, width, height);
    p.params = serde_json::json!({ "style": style.id() });
    p.ticks = ticks;
    p.validate()?;
    Ok(p)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Styles => {
            if cli.json {
                let styles: Vec<_> = WarpStyle::ALL
                    .iter()
                    .map(|s| serde_json::json!({"id": s.id(), "name": s.name()}))
                    .collect();
                let info = serde_json::json!({
                    "styles": styles,
                    "default": DEFAULT_STYLE.name(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Styles:");
                for s in WarpStyle::ALL {
                    let marker = if s == DEFAULT_STYLE { " (default)" } else { "" };
                    println!("  {:>2}  {}{marker}", s.id(), s.name());
                }
            }
        }
        Command::Render {
            texture,
            width,
            height,
            style,
            ticks,
            output,
            root,
            preset,
        } => {
            let preset = resolve_preset(texture, width, height, style, ticks, preset)?;

            let loader = match root {
                Some(root) => ImageFileLoader::with_root(root),
                None => ImageFileLoader::new(),
            };
            let style = WarpStyle::from_params(&preset.params)?;
            let mut deform = TextureDeformation::load(
                preset.width,
                preset.height,
                &loader,
                &preset.texture,
                style,
            )?;

            (0..preset.ticks).try_for_each(|_| deform.tick())?;

            texdeform_io::write_png(deform.output(), deform.width(), deform.height(), &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "texture": preset.texture,
                    "width": deform.width(),
                    "height": deform.height(),
                    "ticks": preset.ticks,
                    "params": deform.params(),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} with {} ({}x{}, {} ticks) -> {}",
                    preset.texture,
                    deform.style(),
                    deform.width(),
                    deform.height(),
                    preset.ticks,
                    output.display()
                );
            }
            deform.close();
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    initialise_tracing();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
