use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "docket", bin_name = "docket", version = get_version())]
#[command(about = "Case tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (default: DOCKET_HOME, ./.docket, or the platform dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a case and open it
    #[command(alias = "n")]
    New {
        /// Case title
        title: Option<String>,

        /// Case number, e.g. CS-1042
        #[arg(short, long)]
        number: Option<String>,
    },

    /// List cases (active and post-live by default)
    #[command(alias = "ls")]
    List {
        /// Only archived cases
        #[arg(long)]
        archived: bool,

        /// Only post-live cases
        #[arg(long, conflicts_with = "archived")]
        post_live: bool,

        /// Every case, archived included
        #[arg(long, conflicts_with_all = ["archived", "post_live"])]
        all: bool,
    },

    /// Open a case (make it the selection)
    #[command(alias = "o")]
    Open {
        /// Display index (3, p1, a2) or case number
        #[arg(value_name = "SEL")]
        case: String,
    },

    /// Show a case in full
    #[command(alias = "v")]
    View {
        /// Display index or case number (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,
    },

    /// Set a field: title, number, launch-date, status, special-project,
    /// can-launch-sooner, reopened, content-automated
    Set {
        /// Field name
        field: String,

        /// New value (booleans: true/false, dates: YYYY-MM-DD or none)
        value: String,

        /// Case to edit (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,
    },

    /// Set the workflow status (shorthand for set status)
    Status {
        /// Status name, e.g. "Launched" or "Peer Review"
        label: String,

        /// Case to edit (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,
    },

    /// Toggle the favorite marker
    Fav {
        /// Case to toggle (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,
    },

    /// Archive a case
    Archive {
        /// Case to archive (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Restore an archived case to the active row
    Unarchive {
        /// An archived case (a1, a2, ... or case number)
        #[arg(value_name = "SEL")]
        case: String,
    },

    /// Mark a case post-live
    Postlive {
        /// Case to mark (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,
    },

    /// Return a post-live case to the active row
    Unpostlive {
        /// Case to return (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,
    },

    /// Permanently delete an archived case
    #[command(alias = "rm")]
    Delete {
        /// An archived case
        #[arg(value_name = "SEL")]
        case: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move a case within the active row
    Reorder {
        /// Case to move
        #[arg(value_name = "SEL")]
        case: String,

        /// Drop before this case
        #[arg(long, value_name = "SEL")]
        before: Option<String>,

        /// Drop after this case
        #[arg(long, value_name = "SEL", conflicts_with = "before")]
        after: Option<String>,
    },

    /// Diary entries on the open case
    Diary {
        #[command(subcommand)]
        action: DiaryAction,
    },

    /// Checklist items on the open case
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Product references on the open case
    Ref {
        #[command(subcommand)]
        action: RefAction,
    },

    /// Add a tag to the open case
    Tag {
        tag: String,
    },

    /// Remove a tag from the open case
    Untag {
        tag: String,
    },

    /// Pending checklist items across every case
    Tasks,

    /// Search titles, numbers, diary, checklist and tags
    Search {
        query: String,
    },

    /// Print the status ladder
    Statuses,

    /// Copy the case number to the clipboard
    Copy {
        /// Case to copy from (default: the open case)
        #[arg(value_name = "SEL")]
        case: Option<String>,
    },

    /// Write the full snapshot to a file
    Export {
        /// Output path (default: docket-<date>.json)
        path: Option<PathBuf>,
    },

    /// Replace the store from a snapshot file
    Import {
        path: PathBuf,
    },

    /// Create a .docket store in the working directory
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., report-columns)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DiaryAction {
    /// Add an entry (newest first)
    Add { text: String },

    /// Rewrite entry N, keeping its timestamp
    Edit {
        #[arg(value_name = "N")]
        position: usize,
        text: String,
    },

    /// Remove entry N
    Rm {
        #[arg(value_name = "N")]
        position: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Add an open item (newest first)
    Add { text: String },

    /// Check item N off
    Done {
        #[arg(value_name = "N")]
        position: usize,
    },

    /// Reopen item N
    Undo {
        #[arg(value_name = "N")]
        position: usize,
    },

    /// Rewrite item N
    Edit {
        #[arg(value_name = "N")]
        position: usize,
        text: String,
    },

    /// Remove item N
    Rm {
        #[arg(value_name = "N")]
        position: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum RefAction {
    /// Add a reference
    Add {
        /// Reference name
        #[arg(long)]
        name: String,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        profile: Option<String>,

        #[arg(long)]
        collection: Option<String>,

        #[arg(long)]
        product_id: Option<String>,
    },

    /// Change columns of reference N
    Edit {
        #[arg(value_name = "N")]
        position: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        profile: Option<String>,

        #[arg(long)]
        collection: Option<String>,

        #[arg(long)]
        product_id: Option<String>,
    },

    /// Remove reference N
    Rm {
        #[arg(value_name = "N")]
        position: usize,
    },

    /// Build the plain-text reference report
    Report {
        /// Columns, comma-separated (default: configured report-columns)
        #[arg(long, value_name = "COLS")]
        columns: Option<String>,

        /// Write to a file instead of stdout; without a value, uses
        /// refs-<case>.txt
        #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },
}
