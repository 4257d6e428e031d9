use crate::error::Error;
use crate::prompt::ConfirmPrompt;
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const BLOCK_RULE_WIDTH: usize = 60;

/// One unit of cut text, rendered as a delimited block in the scrap log:
/// a 60-dash rule, a label line carrying the cut date, a rule matching the
/// label length, then the verbatim text.
#[derive(Debug, Clone)]
pub struct ScrapBlock {
    label: String,
    text: String,
}

impl ScrapBlock {
    pub fn new(command: &str, cut_on: NaiveDate, text: String) -> Self {
        ScrapBlock {
            label: format!("{command}: {}", cut_on.format("%d/%m/%Y")),
            text,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "#{}\n#{}\n#{}\n{}\n",
            "-".repeat(BLOCK_RULE_WIDTH),
            self.label,
            "-".repeat(self.label.len()),
            self.text
        )
    }
}

/// Outcome of [`ensure_scrap_root`] when no error occurred.
///
/// `Declined` is a soft outcome: the user refused the creation prompt but the
/// operation continues, matching the plugin's original behavior (the log
/// file's own directory creation will still make the missing parents).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapRootState {
    Exists,
    Created,
    Declined,
}

pub fn ensure_scrap_root(
    root: &Path,
    prompt: &dyn ConfirmPrompt,
) -> Result<ScrapRootState, Error> {
    if !root.exists() {
        if prompt.confirm_create_scrap_root(root) {
            fs::create_dir_all(root)?;
            info!("created scrap root {}", root.display());
            Ok(ScrapRootState::Created)
        } else {
            debug!("scrap root creation declined for {}", root.display());
            Ok(ScrapRootState::Declined)
        }
    } else if root.is_dir() {
        if fs::metadata(root)?.permissions().readonly() {
            Err(Error::ScrapRootNotWritable(root.to_path_buf()))
        } else {
            Ok(ScrapRootState::Exists)
        }
    } else {
        Err(Error::ScrapRootNotADirectory(root.to_path_buf()))
    }
}

/// Scrap log path for a mirrored file: the suffix is appended to the full
/// file name (`src/a.py` → `src/a.py.scrap`).
pub fn scrap_log_path(mirrored_file: &Path, suffix: &str) -> PathBuf {
    let mut path = mirrored_file.as_os_str().to_os_string();
    path.push(format!(".{suffix}"));
    PathBuf::from(path)
}

/// The scrap log for a mirrored file, if one already exists. Never creates.
pub fn existing_scrap_log(mirrored_file: &Path, suffix: &str) -> Option<PathBuf> {
    let log = scrap_log_path(mirrored_file, suffix);
    if log.is_file() {
        Some(log)
    } else {
        None
    }
}

/// Return the scrap log for a mirrored file, creating it (and any missing
/// parent directories) with a banner header on first use.
pub fn ensure_scrap_log(
    mirrored_file: &Path,
    suffix: &str,
    created_on: NaiveDate,
) -> Result<PathBuf, Error> {
    let log = scrap_log_path(mirrored_file, suffix);
    if log.is_file() {
        return Ok(log);
    }
    if let Some(parent) = log.parent() {
        fs::create_dir_all(parent)?;
    }
    let title = format!(
        "# Scrap collection file created by scrappit {} #",
        created_on.format("%d %B, %Y")
    );
    let rule = "#".repeat(title.len());
    fs::write(&log, format!("{rule}\n{title}\n{rule}\n"))?;
    info!("created scrap log {}", log.display());
    Ok(log)
}

/// Append the concatenation of all blocks in order, in one
/// open-append-close operation.
pub fn append_scrap_blocks(log: &Path, blocks: &[ScrapBlock]) -> Result<(), Error> {
    let mut payload = String::new();
    for block in blocks {
        payload.push_str(&block.render());
    }
    let mut file = OpenOptions::new().append(true).open(log)?;
    file.write_all(payload.as_bytes())?;
    debug!("appended {} block(s) to {}", blocks.len(), log.display());
    Ok(())
}
