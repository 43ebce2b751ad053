use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pearlerizer::models::config::{parse_color_list, resolve_config_path, CONFIG_ENV_VAR};
use pearlerizer::models::{AppConfig, ConfigOverrides};
use pearlerizer::services::{extract_palette, format_palette, run_batch, Pearlerizer};

#[derive(Parser)]
#[command(name = "pearlerizer")]
#[command(about = "Turn images into palette-limited bead-sprite patterns")]
#[command(version)]
struct Cli {
    /// YAML config file (falls back to $PEARLERIZER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every image in the input directory
    Run {
        /// Directory containing the source images
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory receiving the PNG patterns
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        quant: QuantArgs,
    },
    /// Convert a single image
    Convert {
        /// Source image
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        quant: QuantArgs,
    },
    /// Print the colors found in a palette image
    Palette {
        /// Palette image
        file: PathBuf,

        /// Print a JSON array instead of one color per line
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct QuantArgs {
    /// Palette image whose distinct colors are allowed in the output
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000")
    #[arg(long)]
    colors: Option<String>,

    /// Edge length of one block in pixels
    #[arg(short, long)]
    block_size: Option<u32>,

    /// Final output width; derives the block size from the image width
    #[arg(short, long)]
    width: Option<u32>,
}

impl QuantArgs {
    fn into_overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            block_size: self.block_size,
            target_width: self.width,
            palette: self.palette,
            colors: self.colors.as_deref().map(parse_color_list),
            ..Default::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config, std::env::var_os(CONFIG_ENV_VAR));

    match cli.command {
        Some(Commands::Run {
            input,
            output,
            quant,
        }) => {
            init_logging("pearlerizer=info");
            let overrides = ConfigOverrides {
                input_dir: input,
                output_dir: output,
                ..quant.into_overrides()
            };
            run_batch_command(config_path.as_deref(), overrides)
        }
        Some(Commands::Convert {
            input,
            output,
            quant,
        }) => {
            init_logging("pearlerizer=warn");
            run_convert_command(config_path.as_deref(), &input, &output, quant.into_overrides())
        }
        Some(Commands::Palette { file, json }) => {
            init_logging("pearlerizer=warn");
            run_palette_command(&file, json)
        }
        None => run_status_command(config_path.as_deref()),
    }
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_or_default(path)?;
    config.apply(overrides);
    config.validate()?;
    Ok(config)
}

fn run_batch_command(config_path: Option<&Path>, overrides: ConfigOverrides) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    let report = run_batch(&config)?;

    println!(
        "Converted {} of {} images into {}",
        report.processed.len(),
        report.total(),
        config.output_dir.display()
    );
    if !report.is_success() {
        for (path, error) in &report.failed {
            eprintln!("  {}: {error}", path.display());
        }
        anyhow::bail!("{} image(s) failed", report.failed.len());
    }
    Ok(())
}

fn run_convert_command(
    config_path: Option<&Path>,
    input: &Path,
    output: &Path,
    overrides: ConfigOverrides,
) -> anyhow::Result<()> {
    let config = load_config(config_path, overrides)?;
    let pearlerizer = Pearlerizer::from_config(&config)?;
    let quantized = pearlerizer
        .process_file(input, output)
        .with_context(|| format!("converting {}", input.display()))?;

    println!(
        "Wrote {} ({}x{}, {} colors)",
        output.display(),
        quantized.width(),
        quantized.height(),
        quantized.used_colors().len()
    );
    Ok(())
}

fn run_palette_command(file: &Path, json: bool) -> anyhow::Result<()> {
    let palette = extract_palette(file)?;
    println!("{}", format_palette(&palette, json)?);
    Ok(())
}

fn run_status_command(config_path: Option<&Path>) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Pearlerizer v{VERSION}");
    println!("Bead-sprite patterns from photos\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV_VAR} = {}",
        std::env::var(CONFIG_ENV_VAR)
            .ok()
            .as_deref()
            .unwrap_or("(not set)")
    );

    let config = AppConfig::load_or_default(config_path)?;
    println!("\nConfiguration:");
    println!(
        "  Source:       {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    );
    println!("  block_size:   {}", config.block_size);
    println!(
        "  target_width: {}",
        config
            .target_width
            .map(|w| w.to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    match &config.colors {
        Some(colors) => println!("  colors:       {}", colors.join(",")),
        None => println!("  palette:      {}", config.palette.display()),
    }
    println!("  input_dir:    {}", config.input_dir.display());
    println!("  output_dir:   {}", config.output_dir.display());

    println!("\nCommands:");
    println!("  pearlerizer run                Convert every image in input_dir");
    println!("  pearlerizer convert IN -o OUT  Convert a single image");
    println!("  pearlerizer palette FILE       List the colors of a palette image");
    println!("\nRun 'pearlerizer --help' for more options.");
    Ok(())
}
