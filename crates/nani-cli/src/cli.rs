use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "nani")]
#[command(about = "Tools for managing man pages and notes")]
#[command(version)]
pub struct Cli {
    /// Directory holding man/, notes/ and templates/ (defaults to the
    /// directory containing the nani executable)
    #[arg(long, global = true, env = "NANI_HOME", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Log what nani does to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate, delete, edit or view a man page
    Man(ManArgs),

    /// Generate, delete or edit a note
    Notes(NotesArgs),

    /// List pages in a category
    Ls(LsArgs),

    /// Build the notes site and publish it
    Deploy,

    /// Link content/ to notes/ for the site generator
    Link,

    /// Create man/, notes/, templates/ and a config file
    Init,

    /// Print shell completions
    #[cfg(feature = "completions")]
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// `nani man <name>` with exactly one action
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(false)
        .args(["generate", "delete", "edit", "view"])
))]
pub struct ManArgs {
    /// Name of the man page
    pub name: String,

    /// Generate a new man page
    #[arg(short, long)]
    pub generate: bool,

    /// Delete the man page
    #[arg(short, long)]
    pub delete: bool,

    /// Edit the man page
    #[arg(short, long)]
    pub edit: bool,

    /// Render the man page in the terminal
    #[arg(short, long)]
    pub view: bool,
}

/// `nani notes <name>` with exactly one action
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .multiple(false)
        .args(["generate", "delete", "edit"])
))]
pub struct NotesArgs {
    /// Name of the note
    pub name: String,

    /// Generate a new note
    #[arg(short, long)]
    pub generate: bool,

    /// Delete the note
    #[arg(short, long)]
    pub delete: bool,

    /// Edit the note
    #[arg(short, long)]
    pub edit: bool,
}

/// `nani ls` with exactly one category
#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("category")
        .required(true)
        .multiple(false)
        .args(["man", "notes"])
))]
pub struct LsArgs {
    /// List man pages
    #[arg(short, long)]
    pub man: bool,

    /// List notes
    #[arg(short, long)]
    pub notes: bool,

    /// Output as JSON for machine processing
    #[arg(long)]
    pub json: bool,
}

/// What to do with a single page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Generate,
    Delete,
    Edit,
    View,
}

impl ManArgs {
    pub fn action(&self) -> PageAction {
        if self.generate {
            PageAction::Generate
        } else if self.delete {
            PageAction::Delete
        } else if self.edit {
            PageAction::Edit
        } else {
            PageAction::View
        }
    }
}

impl NotesArgs {
    pub fn action(&self) -> PageAction {
        if self.generate {
            PageAction::Generate
        } else if self.delete {
            PageAction::Delete
        } else {
            PageAction::Edit
        }
    }
}
