use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use replaykit_formats::{Format, FormatRegistry, GameVersion, Preferences};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod render;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay format registry tooling", long_about = None)]
struct Cli {
    /// Preferences file (defaults to $REPLAYKIT_CONFIG when set)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered replay formats
    List(ListArgs),
    /// Show the descriptor for one format
    Describe(DescribeArgs),
    /// Check whether a format can be used with a game version
    Check(CheckArgs),
    /// Guess candidate formats from a file name
    Detect(DetectArgs),
    /// Print the file name offered when exporting
    ExportName(ExportNameArgs),
    /// Verify the built-in registry invariants
    Validate,
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Only show formats compatible with this game version (defaults to the
    /// preferred `game_version` unless that is `Any`)
    #[arg(long)]
    game_version: Option<GameVersion>,
    /// Show legacy formats even when preferences hide them
    #[arg(long)]
    include_legacy: bool,
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct DescribeArgs {
    /// Format slug (e.g. `gdr-json`) or integer code
    format: Format,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct CheckArgs {
    format: Format,
    game_version: GameVersion,
}

#[derive(Args, Debug)]
struct DetectArgs {
    path: PathBuf,
}

#[derive(Args, Debug)]
struct ExportNameArgs {
    stem: String,
    /// Target format; falls back to `export_format` from preferences
    format: Option<Format>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let preferences = load_preferences(cli.config.as_deref())?;
    let registry = FormatRegistry::canonical().context("built-in format registry is invalid")?;

    match cli.command {
        Command::List(args) => handle_list(&registry, &preferences, args),
        Command::Describe(args) => handle_describe(&registry, args),
        Command::Check(args) => handle_check(&registry, args),
        Command::Detect(args) => handle_detect(&registry, &args.path),
        Command::ExportName(args) => handle_export_name(&registry, &preferences, args),
        Command::Validate => {
            info!(formats = registry.all_formats().len(), "format registry is valid");
            println!("{} formats registered, all invariants hold.", registry.all_formats().len());
            Ok(())
        }
    }
}

fn load_preferences(explicit: Option<&Path>) -> Result<Preferences> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => env::var_os("REPLAYKIT_CONFIG").map(PathBuf::from),
    };

    match path {
        Some(path) => Preferences::load(&path)
            .with_context(|| format!("failed to load preferences from {}", path.display())),
        None => {
            debug!("no preferences file configured, using defaults");
            Ok(Preferences::default())
        }
    }
}

fn handle_list(registry: &FormatRegistry, preferences: &Preferences, args: ListArgs) -> Result<()> {
    let show_legacy = args.include_legacy || preferences.show_legacy;
    let game_version = render::listing_game_version(args.game_version, preferences);
    let descriptors = render::select_descriptors(registry, game_version, show_legacy);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&descriptors)?);
    } else {
        println!("{}", render::descriptor_table(&descriptors));
    }
    Ok(())
}

fn handle_describe(registry: &FormatRegistry, args: DescribeArgs) -> Result<()> {
    let descriptor = registry.describe(args.format);
    if args.json {
        println!("{}", serde_json::to_string_pretty(descriptor)?);
    } else {
        println!("{}", render::descriptor_table(&[descriptor]));
    }
    Ok(())
}

fn handle_check(registry: &FormatRegistry, args: CheckArgs) -> Result<()> {
    registry.check_compatible(args.format, args.game_version)?;
    println!(
        "{} can be used with game version {}",
        registry.describe(args.format).display_name,
        args.game_version
    );
    Ok(())
}

fn handle_detect(registry: &FormatRegistry, path: &Path) -> Result<()> {
    let candidates = registry.detect_from_path(path);
    if candidates.is_empty() {
        bail!("no registered format matches {}", path.display());
    }
    if candidates.len() > 1 {
        warn!(
            path = %path.display(),
            candidates = candidates.len(),
            "file extension is shared by several formats"
        );
    }

    let descriptors: Vec<_> = candidates
        .into_iter()
        .map(|format| registry.describe(format))
        .collect();
    println!("{}", render::descriptor_table(&descriptors));
    Ok(())
}

fn handle_export_name(
    registry: &FormatRegistry,
    preferences: &Preferences,
    args: ExportNameArgs,
) -> Result<()> {
    let format = args
        .format
        .or(preferences.export_format)
        .context("no format given and no export_format in preferences")?;

    if !preferences.game_version.is_wildcard() {
        registry.check_compatible(format, preferences.game_version)?;
    }

    println!("{}", registry.export_file_name(&args.stem, format));
    Ok(())
}
