use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use gwm::commands::{common::render_error, list, navigate, projects};
use gwm::completions::{generate_completions, Shell};
use gwm::config::Config;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "gwm")]
#[command(about = "Navigate and inspect git projects and their worktrees", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List worktrees of every repository in a workspace
    List {
        /// Directory to scan (default: projects_root)
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List main repositories and their linked worktrees
    Projects {
        /// Directory to scan (default: projects_root)
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show which project or worktree the current directory belongs to
    Context {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the directory a target resolves to from here
    ///
    /// Targets: a branch of the current project, `main`, a project name,
    /// or project/branch.
    Resolve {
        target: String,

        /// Print the full resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions and the `gcd` navigation function
    Completions {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },

    /// List navigation targets for shell completion (internal)
    #[command(hide = true)]
    Complete {
        /// Partially typed target
        prefix: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    gwm::logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        render_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        let shell = Shell::from_str(shell)?;
        let mut cmd = Cli::command();
        return generate_completions(&mut cmd, shell);
    }

    let config = Config::load()?;

    match cli.command {
        Commands::List { workspace, json } => list::execute(&config, workspace, json),
        Commands::Projects { workspace, json } => projects::execute(&config, workspace, json),
        Commands::Context { json } => navigate::context(&config, json),
        Commands::Resolve { target, json } => navigate::resolve(&config, &target, json),
        Commands::Complete { prefix } => navigate::complete(&config, prefix),
        Commands::Completions { .. } => Ok(()),
    }
}
