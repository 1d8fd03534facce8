use std::{path::PathBuf, process::Stdio};

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::process::Command;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use clipset_core::{
    DREAMIX, EDIT_TYPE_MAP_FILE, EditTypeIndex, Ffmpeg, HttpFetcher, RunConfig, RunObserver,
    YOUTUBE, get_root_cache_dir, run_dreamix, run_loveu, run_youtube,
};

#[derive(Parser)]
#[command(name = "clipset")]
#[command(
    about = "Download, crop and caption short clips for text-guided video editing benchmarks"
)]
struct Cli {
    #[command(subcommand)]
    dataset: Dataset,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct CommonArgs {
    /// Folder receiving clips, captions and edit_type_map.json
    #[arg(long = "output_folder")]
    output_folder: PathBuf,

    /// Side length of the square output clips, in pixels
    #[arg(long, default_value_t = 256, value_parser = clap::value_parser!(u32).range(1..))]
    resolution: u32,

    /// Output frame rate
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// Clip length in seconds
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    duration: u32,

    /// Log and skip sources too short for the clip window instead of aborting
    #[arg(long = "skip_mismatched")]
    skip_mismatched: bool,
}

impl From<&CommonArgs> for RunConfig {
    fn from(args: &CommonArgs) -> Self {
        RunConfig {
            output_dir: args.output_folder.clone(),
            resolution: args.resolution,
            fps: args.fps,
            duration: args.duration,
            skip_mismatched: args.skip_mismatched,
        }
    }
}

#[derive(Subcommand)]
enum Dataset {
    /// Videos from the Dreamix project page
    Dreamix {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Curated YouTube-8M clips, downloaded with yt-dlp
    Youtube {
        #[command(flatten)]
        common: CommonArgs,

        /// Where downloaded sources are kept between runs
        #[arg(long = "cache_dir")]
        cache_dir: Option<PathBuf>,
    },
    /// LOVEU-TGVE-2023 videos from a local dataset folder
    Loveu {
        #[command(flatten)]
        common: CommonArgs,

        /// Folder containing LOVEU-TGVE-2023_Dataset.csv and the *_480p folders
        #[arg(long = "loveu_folder")]
        loveu_folder: PathBuf,
    },
}

impl Dataset {
    fn name(&self) -> &'static str {
        match self {
            Dataset::Dreamix { .. } => "dreamix",
            Dataset::Youtube { .. } => "youtube",
            Dataset::Loveu { .. } => "loveu",
        }
    }

    fn common(&self) -> &CommonArgs {
        match self {
            Dataset::Dreamix { common }
            | Dataset::Youtube { common, .. }
            | Dataset::Loveu { common, .. } => common,
        }
    }
}

/// Drives a progress bar from pipeline callbacks
struct ProgressObserver {
    pb: ProgressBar,
}

impl ProgressObserver {
    fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=> "),
        );
        Self { pb }
    }
}

impl RunObserver for ProgressObserver {
    fn started(&self, total: usize) {
        self.pb.set_length(total as u64);
    }

    fn source_started(&self, label: &str) {
        self.pb.set_message(label.to_string());
    }

    fn source_skipped(&self, label: &str, reason: &str) {
        self.pb.println(format!(
            "{} Skipped {}: {}",
            style("!").yellow().bold(),
            label,
            style(reason).dim()
        ));
    }

    fn source_finished(&self, _label: &str) {
        self.pb.inc(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "clipset=debug,clipset_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Fail early when an external tool is missing from PATH
async fn ensure_tool(name: &str, version_flag: &str) -> Result<()> {
    let found = Command::new(name)
        .arg(version_flag)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .is_ok_and(|status| status.success());
    if !found {
        bail!("{} not found on PATH", name);
    }
    Ok(())
}

async fn run(dataset: &Dataset, observer: &ProgressObserver) -> Result<EditTypeIndex> {
    let config = RunConfig::from(dataset.common());
    debug!(dataset = dataset.name(), ?config, "starting run");
    let media = Ffmpeg::new();

    let index = match dataset {
        Dataset::Dreamix { .. } => {
            run_dreamix(&config, DREAMIX, &media, &HttpFetcher::new(), observer).await?
        }
        Dataset::Youtube { cache_dir, .. } => {
            ensure_tool("yt-dlp", "--version").await?;
            let cache_root = cache_dir.clone().unwrap_or_else(get_root_cache_dir);
            run_youtube(
                &config,
                &cache_root,
                YOUTUBE,
                &media,
                &HttpFetcher::new(),
                observer,
            )
            .await?
        }
        Dataset::Loveu { loveu_folder, .. } => {
            run_loveu(&config, loveu_folder, &media, observer).await?
        }
    };

    Ok(index)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    println!(
        "\n{}  {}\n",
        style("clipset").cyan().bold(),
        style(cli.dataset.name()).dim()
    );

    if let Err(e) = ensure_tool("ffmpeg", "-version").await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    let observer = ProgressObserver::new();
    let index = match run(&cli.dataset, &observer).await {
        Ok(index) => index,
        Err(e) => {
            observer.pb.abandon();
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    observer.pb.finish_with_message("done");

    let output_dir = &cli.dataset.common().output_folder;
    println!(
        "\n{} Emitted {} clips",
        style("✓").green().bold(),
        style(index.len()).yellow()
    );
    println!(
        "{} {}\n",
        style("Saved:").dim(),
        style(output_dir.join(EDIT_TYPE_MAP_FILE).display()).cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_flags() {
        let cli = Cli::try_parse_from(["clipset", "dreamix", "--output_folder", "out"]).unwrap();
        let config = RunConfig::from(cli.dataset.common());
        assert_eq!(config.resolution, 256);
        assert_eq!(config.fps, 4);
        assert_eq!(config.duration, 2);
        assert!(!config.skip_mismatched);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn loveu_requires_dataset_folder() {
        let missing = Cli::try_parse_from(["clipset", "loveu", "--output_folder", "out"]);
        assert!(missing.is_err());

        let cli = Cli::try_parse_from([
            "clipset",
            "loveu",
            "--output_folder",
            "out",
            "--loveu_folder",
            "/data/loveu",
            "--fps",
            "8",
        ])
        .unwrap();
        match cli.dataset {
            Dataset::Loveu {
                common,
                loveu_folder,
            } => {
                assert_eq!(loveu_folder, PathBuf::from("/data/loveu"));
                assert_eq!(common.fps, 8);
            }
            _ => panic!("expected loveu subcommand"),
        }
    }

    #[test]
    fn zero_fps_is_rejected() {
        let parsed = Cli::try_parse_from(["clipset", "youtube", "--output_folder", "o", "--fps", "0"]);
        assert!(parsed.is_err());
    }
}
