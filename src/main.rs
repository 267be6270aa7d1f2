use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dit::areas::repository::Repository;
use dit::config::Config;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A tiny delta-based version control system",
    long_about = "This is a minimal single-user version control system, written in Rust. \
    It tracks the top level of a working directory, stores only the files that changed \
    in each commit and rebuilds any commit or branch on checkout.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short = 'C', long = "dir", global = true, help = "Run as if started in <dir>")]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "commit",
        about = "Record the changed files as a new commit",
        long_about = "This command commits every untracked or modified file of the working directory. \
        The very first commit also creates the master branch."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "info",
        about = "Show the status of the working directory files"
    )]
    Info,
    #[command(
        name = "content",
        about = "List the files recorded in a commit"
    )]
    Content {
        #[arg(index = 1, help = "The commit id")]
        commit: String,
    },
    #[command(
        name = "branch",
        about = "Create, rename, delete or list branches"
    )]
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },
    #[command(name = "log", about = "Show the history reachable from head")]
    Log,
    #[command(name = "head", about = "Show where head points")]
    Head,
    #[command(
        name = "switch",
        about = "Switch to a branch or commit",
        long_about = "This command restores the working directory to the given branch or commit. \
        It refuses to run while there are uncommitted changes."
    )]
    Switch {
        #[arg(index = 1, help = "Branch name or commit id")]
        target: String,
    },
    #[command(name = "ignore", about = "Ignore files whose name matches a regex")]
    Ignore {
        #[arg(index = 1, help = "Regular expression matched against whole file names")]
        pattern: String,
    },
}

#[derive(Subcommand)]
enum BranchAction {
    #[command(about = "Create a branch at head and switch head to it")]
    Create {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "Rename a branch")]
    Rename {
        #[arg(index = 1)]
        old_name: String,
        #[arg(index = 2)]
        new_name: String,
    },
    #[command(about = "Delete a branch that is not active")]
    Delete {
        #[arg(index = 1)]
        name: String,
    },
    #[command(about = "List branches, the active one is marked with *")]
    List,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::load(cli.dir)?;
    let storage = config.storage();
    let initial_state = storage.load()?;
    let mut repository = Repository::with_state(config.work_dir(), initial_state.clone())?;

    run(&mut repository, cli.command)?;

    let state = repository.into_state();
    if state != initial_state {
        storage.save(&state)?;
    }

    Ok(())
}

fn run(repository: &mut Repository, command: Commands) -> Result<()> {
    let mut stdout = std::io::stdout().lock();

    match command {
        Commands::Commit { message } => {
            let outcome = repository.commit(&message)?;
            writeln!(stdout, "{}", outcome)?;
        }
        Commands::Info => {
            for file_state in repository.info()? {
                writeln!(
                    stdout,
                    "{} {}",
                    file_state.path.display(),
                    file_state.colored_status()
                )?;
            }
        }
        Commands::Content { commit } => {
            for path in repository.commit_content(&commit)? {
                writeln!(stdout, "{}", path.display())?;
            }
        }
        Commands::Branch { action } => match action {
            BranchAction::Create { name } => {
                writeln!(stdout, "{}", repository.create_branch(&name)?)?;
            }
            BranchAction::Rename { old_name, new_name } => {
                writeln!(stdout, "{}", repository.rename_branch(&old_name, &new_name)?)?;
            }
            BranchAction::Delete { name } => {
                writeln!(stdout, "{}", repository.delete_branch(&name)?)?;
            }
            BranchAction::List => {
                for entry in repository.branches() {
                    if entry.is_active {
                        writeln!(stdout, "{}", entry.to_string().green())?;
                    } else {
                        writeln!(stdout, "{}", entry)?;
                    }
                }
            }
        },
        Commands::Log => {
            for entry in repository.log()? {
                writeln!(stdout, "{}", entry)?;
            }
        }
        Commands::Head => {
            writeln!(stdout, "{}", repository.head_description())?;
        }
        Commands::Switch { target } => {
            writeln!(stdout, "{}", repository.switch_to(&target)?)?;
        }
        Commands::Ignore { pattern } => {
            writeln!(stdout, "{}", repository.add_ignore_pattern(&pattern)?)?;
        }
    }

    Ok(())
}
