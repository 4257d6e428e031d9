use crate::error::Error;
use crate::resolver;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Move a whole file out of the project tree into its mirrored location
/// under the scrap root, named `<original name>_ALL<YYYYMMDD_HHMMSS>`.
///
/// The rename is atomic; on failure the source is left untouched and the
/// underlying cause is wrapped in [`Error::Move`].
pub fn archive_whole_file(
    src: &Path,
    project_folder: &Path,
    scrap_root: &Path,
    moved_at: NaiveDateTime,
) -> Result<PathBuf, Error> {
    if src == project_folder {
        return Err(Error::ArchiveProjectRoot(src.to_path_buf()));
    }

    let mirrored = resolver::resolve_mirrored_path(scrap_root, project_folder, src)?;
    let mut dest = mirrored.into_os_string();
    dest.push(format!("_ALL{}", moved_at.format("%Y%m%d_%H%M%S")));
    let dest = PathBuf::from(dest);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(src, &dest).map_err(|source| Error::Move {
        src: src.to_path_buf(),
        dest: dest.clone(),
        source,
    })?;

    info!("archived {} to {}", src.display(), dest.display());
    Ok(dest)
}
