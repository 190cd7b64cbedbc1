use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "repix", version, about = "Turn pixel JSON into upscaled PNG images")]
struct Cli {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one pixel JSON file to a PNG.
    Render(RenderArgs),
    /// Convert several pixel JSON files, naming outputs `repix_nft_<n>.png`.
    Batch(BatchArgs),
    /// Validate a pixel JSON file and print the dimensions it would render to.
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input pixel JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory to write PNGs into (created if missing).
    #[arg(long)]
    out_dir: PathBuf,

    /// Input pixel JSON files, converted in the order given.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input pixel JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Info(args) => cmd_info(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read pixel data '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let bytes = read_input(&args.in_path)?;
    let map = repix::validate_and_parse(&bytes)
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    let img = repix::rasterize(&map);
    repix::write_png(&args.out, &img)?;

    tracing::info!(
        input = %args.in_path.display(),
        scale_factor = img.scale_factor,
        "rendered"
    );
    println!("Image Size: {}x{} pixels", img.width, img.height);
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let inputs = args.inputs.iter().map(|p| repix::BatchInput::read(p));
    let outcomes = repix::convert_batch(inputs);
    let mut write_failures = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(encoded) => {
                let out = args.out_dir.join(&outcome.file_name);
                if let Err(e) = std::fs::write(&out, &encoded.png) {
                    eprintln!("error writing {}: {e}", out.display());
                    write_failures += 1;
                    continue;
                }
                println!(
                    "{} -> {} ({}x{} pixels)",
                    outcome.name,
                    out.display(),
                    encoded.info.width,
                    encoded.info.height
                );
            }
            Err(e) => eprintln!("error processing {}: {e}", outcome.name),
        }
    }

    let stats = repix::BatchStats::from_outcomes(&outcomes);
    let failed = stats.failed + write_failures;
    eprintln!("converted {} of {} file(s)", stats.total - failed, stats.total);
    if failed > 0 {
        anyhow::bail!("{failed} of {} file(s) failed", stats.total);
    }
    Ok(())
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let bytes = read_input(&args.in_path)?;
    let map = repix::validate_and_parse(&bytes)
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    let info = repix::ImageInfo::of(&map);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!(
        "Logical Size: {}x{} ({} pixel(s) set)",
        info.logical.width, info.logical.height, info.pixels
    );
    println!("Scale Factor: {}", info.scale_factor);
    println!("Image Size: {}x{} pixels", info.width, info.height);
    Ok(())
}
