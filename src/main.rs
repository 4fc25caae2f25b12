use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use campaign_score::config::{self, Campaign};
use campaign_score::leaderboard::{self, LeaderboardFilter};
use campaign_score::output;
use campaign_score::scoring::{self, Grade, Platform};

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    /// Leaderboard table with summary
    #[default]
    Table,
    /// Tab-separated values, no headers
    Tsv,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score every post in the campaign and print the leaderboard (default)
    Score {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Only show posts from this platform (instagram, tiktok)
        #[arg(long)]
        platform: Option<Platform>,

        /// Only show posts graded at least this well (S, A, B, C, D, F)
        #[arg(long)]
        min_grade: Option<Grade>,

        /// Show the per-component breakdown for each post
        #[arg(short, long)]
        detail: bool,

        /// Also write the JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print the interaction weights for each platform
    Weights,
    /// Print the grade bands and status labels
    Grades,
    /// Write a template campaign file
    Init {
        /// Where to write it (defaults to ~/.config/campaign-score/campaign.yaml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "campaign-score")]
#[command(about = "Score influencer campaign posts against their targets", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to campaign file (defaults to ~/.config/campaign-score/campaign.yaml)
    #[arg(short, long, global = true)]
    campaign: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "campaign_score=debug"
    } else {
        "campaign_score=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let command = cli.command.unwrap_or(Commands::Score {
        format: OutputFormat::Table,
        platform: None,
        min_grade: None,
        detail: false,
        report: None,
    });

    match command {
        Commands::Weights => {
            println!("{}", output::format_weights_table());
            EXIT_SUCCESS
        }
        Commands::Grades => {
            println!("{}", output::format_grade_table(output::should_use_colors()));
            EXIT_SUCCESS
        }
        Commands::Init { path, force } => run_init(path.or(cli.campaign), force),
        Commands::Score {
            format,
            platform,
            min_grade,
            detail,
            report,
        } => {
            let filter = LeaderboardFilter {
                platform,
                min_grade,
            };
            // Verbose runs always show the per-component breakdown
            run_score(cli.campaign, format, &filter, detail || cli.verbose, report)
        }
    }
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    let path = match path {
        Some(p) => p,
        None => match config::get_campaign_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                return EXIT_CONFIG;
            }
        },
    };

    match config::write_template(&path, force) {
        Ok(written) => {
            println!("Campaign template written to {}", written.display());
            println!("Edit the targets and posts, then run `campaign-score score`.");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Init failed: {:#}", e);
            EXIT_IO
        }
    }
}

fn load_validated(path: Option<PathBuf>) -> Result<Campaign, i32> {
    let campaign = match config::load_campaign(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return Err(EXIT_CONFIG);
        }
    };

    // Validate before scoring; the engine assumes sane inputs
    if let Err(errors) = scoring::validate_campaign(&campaign) {
        eprintln!("Campaign errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(EXIT_CONFIG);
    }

    Ok(campaign)
}

fn run_score(
    path: Option<PathBuf>,
    format: OutputFormat,
    filter: &LeaderboardFilter,
    detail: bool,
    report_path: Option<PathBuf>,
) -> i32 {
    let start_time = Instant::now();

    let campaign = match load_validated(path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let posts = leaderboard::leaderboard(&campaign, filter);
    let summary = leaderboard::summarize(&campaign, &posts);
    let report = output::Report::new(&campaign, &summary, &posts);

    match format {
        OutputFormat::Table => {
            let use_colors = output::should_use_colors();
            println!(
                "{}",
                render_table(&campaign, &summary, &posts, detail, use_colors)
            );
        }
        OutputFormat::Tsv => {
            let tsv = output::format_tsv(&posts);
            if !tsv.is_empty() {
                println!("{}", tsv);
            }
        }
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Output error: {:#}", e);
                return EXIT_IO;
            }
        },
    }

    if let Some(path) = report_path {
        if let Err(e) = output::save_report(&path, &report) {
            eprintln!("Report error: {:#}", e);
            return EXIT_IO;
        }
    }

    tracing::debug!(
        posts = posts.len(),
        elapsed = ?start_time.elapsed(),
        "scoring finished"
    );

    EXIT_SUCCESS
}

fn render_table(
    campaign: &Campaign,
    summary: &leaderboard::CampaignSummary,
    posts: &[leaderboard::ScoredPost],
    detail: bool,
    use_colors: bool,
) -> String {
    let mut sections = vec![output::format_summary(
        campaign.display_name(),
        summary,
        use_colors,
    )];
    if detail {
        sections.extend(
            posts
                .iter()
                .map(|scored| output::format_post_detail(scored, use_colors)),
        );
    } else {
        sections.push(output::format_leaderboard(posts, use_colors));
    }
    sections.join("\n\n")
}
