use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use release_checker::logging::{self, LogTarget};
use release_checker::{
    CheckError, CheckerConfig, CompareStrategy, ComparisonDepth, UpdateChecker,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "release-checker")]
#[command(version, about = "Check a version against a repository's latest release")]
struct Cli {
    /// JSON configuration file (baseUrl, timeoutMs, userAgent)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to a file instead of stderr (defaults to the data directory)
    #[arg(long, global = true, num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Repository {
    /// Repository owner
    #[arg(long)]
    owner: String,

    /// Repository name
    #[arg(long)]
    repo: String,

    /// Version dialect: incremental or boolean
    #[arg(long, default_value_t = CompareStrategy::Incremental)]
    strategy: CompareStrategy,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether a newer release than the current version exists
    Check {
        #[command(flatten)]
        repository: Repository,

        /// Current version (e.g. v1.2.0)
        #[arg(long)]
        current: String,

        /// Significant groups: major, minor, build, revision or a number
        #[arg(long, default_value_t = ComparisonDepth::MINOR)]
        depth: ComparisonDepth,
    },
    /// Print the normalized tag of the latest release
    Latest {
        #[command(flatten)]
        repository: Repository,
    },
}

impl Repository {
    fn checker(&self, config: &CheckerConfig) -> Result<UpdateChecker, CheckError> {
        UpdateChecker::with_config(&self.owner, &self.repo, self.strategy, config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(&LogTarget::from_flag(cli.log_file), cli.log_json)?;

    let config = match &cli.config {
        Some(path) => CheckerConfig::from_file(path)?,
        None => CheckerConfig::default(),
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, config))
}

async fn run(command: Command, config: CheckerConfig) -> anyhow::Result<()> {
    match command {
        Command::Check {
            repository,
            current,
            depth,
        } => {
            let checker = repository.checker(&config)?;
            info!("Checking {} for releases newer than {}", checker, current);
            if checker.is_update_available(&current, depth).await? {
                println!("update available for {}", checker);
            } else {
                println!("{} is up to date", current);
            }
        }
        Command::Latest { repository } => {
            let checker = repository.checker(&config)?;
            println!("{}", checker.latest_version().await?);
        }
    }
    Ok(())
}
