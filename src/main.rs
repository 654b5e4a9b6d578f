use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use herald::cli::{run_release_notes, ReleaseNotesArgs};
use herald::config::{self, Config};
use herald::git_ops::GitRepo;
use herald::github::GitHubClient;
use herald::ui;

#[derive(clap::Parser)]
#[command(
    name = "herald",
    about = "Draft release notes from tagged commits between two GitHub revisions"
)]
struct Args {
    #[arg(
        long,
        value_name = "TAG",
        help = "Release tag to compare from. Defaults to the latest release"
    )]
    from: Option<String>,

    #[arg(
        long,
        value_name = "REF",
        help = "Revision to compare to. Defaults to the configured branch (master)"
    )]
    to: Option<String>,

    #[arg(
        long,
        value_name = "OWNER/NAME",
        help = "GitHub repository. Defaults to the configured slug or the git remote"
    )]
    repo: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Show configured release-note categories and exit")]
    list_categories: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("herald {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list_categories {
        ui::display_categories(&config.categories);
        return Ok(());
    }

    let slug = match resolve_slug(args.repo.as_deref(), &config) {
        Ok(slug) => slug,
        Err(e) => {
            ui::display_error(&format!("Could not determine the GitHub repository: {}", e));
            std::process::exit(1);
        }
    };
    debug!(%slug, "resolved repository");

    let client = match GitHubClient::new(&slug, &config.api) {
        Ok(client) => client,
        Err(e) => {
            ui::display_error(&format!("Failed to set up the GitHub client: {}", e));
            std::process::exit(1);
        }
    };
    ui::display_status(&format!("Comparing revisions of {}", slug));

    let workflow_args = ReleaseNotesArgs {
        from: args.from,
        to: args.to,
    };
    let output = match run_release_notes(&client, &workflow_args, &config) {
        Ok(output) => output,
        Err(e) => {
            ui::display_error(&format!("Failed to draft release notes: {}", e));
            std::process::exit(1);
        }
    };

    for warning in &output.warnings {
        ui::display_boundary_warning(warning);
    }
    ui::display_success(&format!(
        "Grouped {} commits since {}",
        output.grouping.len(),
        output.previous.tag_name
    ));

    println!("{}", output.notes);
    Ok(())
}

/// Picks the repository from the flag, then the config, then the git remote.
fn resolve_slug(flag: Option<&str>, config: &Config) -> herald::Result<String> {
    if let Some(slug) = flag.or(config.repository.slug.as_deref()) {
        return Ok(slug.to_string());
    }
    GitRepo::discover(".")?.github_slug(&config.repository.remote)
}

/// Console logging on stderr, controlled by RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}
