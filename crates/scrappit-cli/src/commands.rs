use clap::{Parser, Subcommand};
use scrappit_core::LineRange;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scrappit")]
#[command(about = "Cut scraps out of a project into a mirrored scrap tree", long_about = None)]
pub struct Cli {
    /// Project folder (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cut line selections from a file into its scrap log
    Cut {
        file: PathBuf,
        /// 1-based line selection, N or N-M; repeatable, cut in given order
        #[arg(long = "lines", value_name = "N[-M]", required = true)]
        lines: Vec<LineRange>,
        /// Create a missing scrap root without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Move a whole file into the timestamped scrap tree
    Archive {
        file: Option<PathBuf>,
        /// Create a missing scrap root without asking
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Locate the companion scrap log for a file
    Companion {
        file: PathBuf,
        /// Open source and scrap log in $VISUAL/$EDITOR, split per settings
        #[arg(long)]
        open: bool,
    },
    /// Print the scrap tree mirrored under the scrap root
    Tree,
    /// Print the effective layered settings
    PrintConfig,
}
