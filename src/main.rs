use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minigit::areas::repository::Repository;
use minigit::commands::plumbing::cat_file::CatFileMode;
use minigit::commands::porcelain::diff::DiffOptions;
use minigit::commands::porcelain::log::{CommitDisplayFormat, LogOptions};
use minigit::commands::porcelain::status::StatusFormat;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "minigit",
    version = "0.1.0",
    about = "A small content-addressable version control engine",
    long_about = "minigit stores snapshots of a working tree as content-addressed objects, \
    tracks a staging index and a single line of history per branch, \
    and reports status and line diffs between snapshots.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path. \
        Running it again on an existing repository is safe."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "add",
        about = "Add file contents to the index",
        long_about = "This command stores the content of the given files (directories are expanded) \
        and stages them for the next commit."
    )]
    Add {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files or directories to stage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "rm",
        about = "Remove files from the index",
        long_about = "This command unstages the given paths. Working tree files are left untouched."
    )]
    Rm {
        #[arg(index = 1, required = true, num_args = 1.., help = "Files or directories to unstage")]
        paths: Vec<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged snapshot as a new commit on the current branch. \
        The author is read from GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL and GIT_AUTHOR_DATE."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show commit logs",
        long_about = "This command walks the history from HEAD (or the given revision) back to the root commit."
    )]
    Log {
        #[arg(long, help = "Print one commit per line")]
        oneline: bool,
        #[arg(index = 1, help = "Revision to start from")]
        revision: Option<String>,
    },
    #[command(
        name = "status",
        about = "Show the working tree status",
        long_about = "This command lists staged changes, unstaged changes and untracked files."
    )]
    Status {
        #[arg(long, help = "Print machine readable XY codes")]
        porcelain: bool,
    },
    #[command(
        name = "diff",
        about = "Show changes between commits, the index and the working tree",
        long_about = "Without arguments this command compares the HEAD commit with the working tree. \
        With --cached it compares the HEAD commit with the index, and with two revisions it compares their snapshots."
    )]
    Diff {
        #[arg(long, help = "Compare the HEAD commit with the index")]
        cached: bool,
        #[arg(index = 1, num_args = 0.., help = "Two revisions, or paths limiting the diff")]
        args: Vec<String>,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes a file as a blob and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "cat-file",
        about = "Print the content or the type of an object",
        long_about = "This command prints an object of the repository, named by its full or abbreviated ID, \
        a branch or HEAD."
    )]
    CatFile {
        #[arg(short = 'p', long = "pretty", group = "mode", help = "Print the object content")]
        pretty: bool,
        #[arg(short = 't', long = "type", group = "mode", help = "Print the object type")]
        kind: bool,
        #[arg(index = 1)]
        object: String,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists a tree, or the tree of a commit."
    )]
    LsTree {
        #[arg(short, long, help = "Recurse into subtrees")]
        recursive: bool,
        #[arg(index = 1)]
        object: String,
    },
}

fn main() {
    minigit::telemetry::init();

    if !std::io::stdout().is_terminal() || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    if let Err(error) = run(Cli::parse()) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

fn open(path: Option<&Path>) -> Result<Repository> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    Repository::new(&path, Box::new(std::io::stdout()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => open(path.as_deref())?.init(),
        Commands::Add { paths } => open(None)?.add(&paths),
        Commands::Rm { paths } => open(None)?.remove(&paths),
        Commands::Commit { message } => open(None)?.commit(&message).map(|_| ()),
        Commands::Log { oneline, revision } => {
            let format = if oneline {
                CommitDisplayFormat::OneLine
            } else {
                CommitDisplayFormat::Medium
            };

            open(None)?.log(&LogOptions { format, revision })
        }
        Commands::Status { porcelain } => {
            let format = if porcelain {
                StatusFormat::Porcelain
            } else {
                StatusFormat::Long
            };

            open(None)?.status(format)
        }
        Commands::Diff { cached, args } => open(None)?.diff(&DiffOptions { cached, args }),
        Commands::HashObject { write, file } => open(None)?.hash_object(&file, write),
        Commands::CatFile {
            pretty: _,
            kind,
            object,
        } => {
            let mode = if kind {
                CatFileMode::Type
            } else {
                CatFileMode::Pretty
            };

            open(None)?.cat_file(&object, mode)
        }
        Commands::LsTree { recursive, object } => open(None)?.ls_tree(&object, recursive),
    }
}
