use crate::archiver;
use crate::config::ScrapConfig;
use crate::error::Error;
use crate::prompt::ConfirmPrompt;
use crate::resolver;
use crate::store::{self, ScrapBlock, ScrapRootState};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// A 1-based inclusive line selection, parsed from `N` or `N-M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::LineRange(s.to_string());
        let (start, end) = match s.split_once('-') {
            Some((start, end)) => (
                start.trim().parse::<usize>().map_err(|_| invalid())?,
                end.trim().parse::<usize>().map_err(|_| invalid())?,
            ),
            None => {
                let line = s.trim().parse::<usize>().map_err(|_| invalid())?;
                (line, line)
            }
        };
        if start == 0 || end < start {
            return Err(invalid());
        }
        Ok(LineRange { start, end })
    }
}

/// Result of a cut operation. An empty selection is an outcome, not an error.
#[derive(Debug)]
pub enum CutOutcome {
    NothingSelected,
    Cut {
        log_file: PathBuf,
        blocks_written: usize,
        root_state: ScrapRootState,
    },
}

/// Context object for one command invocation: the effective settings plus
/// the active project folder. All operations take their file and selection
/// arguments explicitly.
pub struct ScrapEngine {
    config: ScrapConfig,
    project_folder: PathBuf,
}

impl ScrapEngine {
    pub fn new(project_folder: PathBuf, config: ScrapConfig) -> Self {
        ScrapEngine {
            config,
            project_folder,
        }
    }

    pub fn project_folder(&self) -> &Path {
        &self.project_folder
    }

    pub fn scrap_root(&self) -> Result<PathBuf, Error> {
        resolver::resolve_scrap_root(&self.project_folder, &self.config)
    }

    /// Cut the selected line ranges out of `file` into its scrap log.
    ///
    /// One block per selection, appended in arrival order in a single
    /// append. The source file is rewritten without the cut lines only
    /// after the append succeeded; a failed write leaves the source intact.
    pub fn cut(
        &self,
        file: &Path,
        selections: &[LineRange],
        prompt: &dyn ConfirmPrompt,
    ) -> Result<CutOutcome, Error> {
        let source = fs::read_to_string(file)?;
        let lines: Vec<&str> = source.lines().collect();

        let today = Local::now().date_naive();
        let mut cut_mask = vec![false; lines.len()];
        let mut blocks = Vec::new();
        for range in selections {
            if range.start > lines.len() {
                continue;
            }
            let end = range.end.min(lines.len());
            let text = lines[range.start - 1..end].join("\n");
            blocks.push(ScrapBlock::new("scrap_cut", today, text));
            for flag in &mut cut_mask[range.start - 1..end] {
                *flag = true;
            }
        }
        if blocks.is_empty() {
            return Ok(CutOutcome::NothingSelected);
        }

        let scrap_root = self.scrap_root()?;
        let root_state = store::ensure_scrap_root(&scrap_root, prompt)?;
        let mirrored = resolver::resolve_mirrored_path(&scrap_root, &self.project_folder, file)?;
        let log_file = store::ensure_scrap_log(&mirrored, &self.config.dotless_suffix(), today)?;
        store::append_scrap_blocks(&log_file, &blocks)?;

        let kept: Vec<&str> = lines
            .iter()
            .zip(&cut_mask)
            .filter(|(_, cut)| !**cut)
            .map(|(line, _)| *line)
            .collect();
        let mut remainder = kept.join("\n");
        if source.ends_with('\n') && !remainder.is_empty() {
            remainder.push('\n');
        }
        fs::write(file, remainder)?;

        debug!(
            "cut {} block(s) from {} to {}",
            blocks.len(),
            file.display(),
            log_file.display()
        );
        Ok(CutOutcome::Cut {
            log_file,
            blocks_written: blocks.len(),
            root_state,
        })
    }

    /// Archive an entire file to the mirrored scrap tree, timestamped now.
    pub fn archive(&self, file: &Path, prompt: &dyn ConfirmPrompt) -> Result<PathBuf, Error> {
        // Guard before touching the filesystem at all
        if file == self.project_folder {
            return Err(Error::ArchiveProjectRoot(file.to_path_buf()));
        }
        let scrap_root = self.scrap_root()?;
        store::ensure_scrap_root(&scrap_root, prompt)?;
        archiver::archive_whole_file(
            file,
            &self.project_folder,
            &scrap_root,
            Local::now().naive_local(),
        )
    }

    /// The existing scrap log for `file`, if scraps have been saved for it.
    pub fn companion(&self, file: &Path) -> Result<Option<PathBuf>, Error> {
        let scrap_root = self.scrap_root()?;
        let mirrored = resolver::resolve_mirrored_path(&scrap_root, &self.project_folder, file)?;
        Ok(store::existing_scrap_log(
            &mirrored,
            &self.config.dotless_suffix(),
        ))
    }
}
