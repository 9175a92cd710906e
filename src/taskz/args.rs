use clap::{Parser, Subcommand};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "taskz")]
#[command(about = "A tiny task list manager for the command line", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a task
    #[command(alias = "a")]
    Add {
        /// Task text (multiple words are joined)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List tasks (the default command)
    #[command(alias = "ls")]
    List {
        /// Filter to apply: all, pending or completed
        #[arg(required = false)]
        filter: Option<String>,
    },

    /// Toggle a task's completed flag
    #[command(alias = "d")]
    Done {
        /// Id of the task, as shown in the list
        id: u64,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Id of the task, as shown in the list
        id: u64,
    },

    /// Delete all tasks
    Clear,

    /// Interactive session: render the list and read commands until quit
    #[command(alias = "i")]
    Ui,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., line-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
