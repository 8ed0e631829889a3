//! qrcanvas command-line entrypoint

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use qrcanvas::helper::{to_svg_string, to_text};
use qrcanvas::presets::{Placement, RESUME_FOLDER_URL};
use qrcanvas::{logging, Config, Error, QrCodeEcc, RenderOptions, Result};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "qrcanvas",
    version,
    about = "Render a link as a QR code bitmap, SVG or console text"
)]
struct Cli {
    /// Text to encode. Defaults to the configured payload, then the resume folder link.
    payload: Option<String>,

    /// Optional TOML configuration file with [render] and [logging] tables
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page placement preset (`compact` = 128px, `showcase` = 160px)
    #[arg(long, value_name = "NAME")]
    preset: Option<Placement>,

    /// Error correction level (L, M, Q or H)
    #[arg(long, value_name = "LEVEL")]
    ecl: Option<QrCodeEcc>,

    /// Bitmap edge length in pixels
    #[arg(long, value_name = "PX")]
    size: Option<u32>,

    /// Quiet zone in modules
    #[arg(long, value_name = "MODULES")]
    margin: Option<u32>,

    /// Force a QR version (1-40) instead of the smallest fitting one
    #[arg(long, value_name = "N")]
    qr_version: Option<u32>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "png")]
    format: OutputFormat,

    /// Output file. Required for PNG; SVG and text go to stdout without it.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Png,
    Svg,
    Text,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(Error::Config(format!(
                "Unsupported output format '{other}', expected png/svg/text"
            ))),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("qrcanvas: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => {
            let mut config = Config::default();
            config.logging.apply_env_overrides();
            config
        }
    };
    logging::init(&config.logging)?;
    if let Some(path) = cli.config.as_deref() {
        info!("Using configuration file: {}", path.display());
    }

    let options = resolve_options(&cli, std::mem::take(&mut config.render));
    info!(
        ecl = %options.error_correction_level,
        pixel_size = options.pixel_size,
        margin = options.margin,
        "rendering QR code"
    );

    match cli.format {
        OutputFormat::Png => {
            let path = cli.output.as_deref().ok_or_else(|| {
                Error::Config("PNG output needs --output <PATH>".to_string())
            })?;
            let bitmap = qrcanvas::render(&options)?;
            bitmap.save(path)?;
            info!(path = %path.display(), "wrote PNG");
        }
        OutputFormat::Svg => {
            let qr = qrcanvas::encode(&options)?;
            emit(cli.output.as_deref(), &to_svg_string(&qr, options.margin)?)?;
        }
        OutputFormat::Text => {
            let qr = qrcanvas::encode(&options)?;
            emit(cli.output.as_deref(), &to_text(&qr, options.margin)?)?;
        }
    }
    Ok(())
}

/// Flags win over the preset, the preset over the config file.
fn resolve_options(cli: &Cli, base: RenderOptions) -> RenderOptions {
    let payload = cli
        .payload
        .clone()
        .or_else(|| Some(base.payload.clone()).filter(|p| !p.is_empty()))
        .unwrap_or_else(|| RESUME_FOLDER_URL.to_string());

    let mut options = match cli.preset {
        Some(placement) => RenderOptions {
            error_correction_level: base.error_correction_level,
            version: base.version,
            ..placement.options(payload)
        },
        None => RenderOptions { payload, ..base },
    };
    if let Some(ecl) = cli.ecl {
        options.error_correction_level = ecl;
    }
    if let Some(size) = cli.size {
        options.pixel_size = size;
    }
    if let Some(margin) = cli.margin {
        options.margin = margin;
    }
    if let Some(version) = cli.qr_version {
        options.version = Some(version);
    }
    options
}

fn emit(path: Option<&std::path::Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(dir)?;
            }
            fs::write(path, contents)?;
            info!(path = %path.display(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
