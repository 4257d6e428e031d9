use crate::config::ScrapConfig;
use crate::error::Error;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the scrap root directory for a project.
///
/// With no override configured the root is derived from the project folder:
/// either `<all_scraps_parent_dir>/<project basename>` or the sibling
/// directory `<project>_<suffix>`. A configured override must be an absolute
/// path. In every case the result must not be the project folder or live
/// inside it, otherwise scraps would be scrapped into themselves.
pub fn resolve_scrap_root(project_folder: &Path, config: &ScrapConfig) -> Result<PathBuf, Error> {
    let suffix = config.dotless_suffix();

    let root = if config.scrap_folder_name.is_empty() {
        if config.all_scraps_parent_dir.is_empty() {
            let mut sibling = project_folder.as_os_str().to_os_string();
            sibling.push(format!("_{suffix}"));
            PathBuf::from(sibling)
        } else {
            let base = project_folder.file_name().ok_or_else(|| {
                Error::Config(format!(
                    "project folder {} has no basename to mirror under {}",
                    project_folder.display(),
                    config.all_scraps_parent_dir
                ))
            })?;
            Path::new(&config.all_scraps_parent_dir).join(base)
        }
    } else {
        let override_path = PathBuf::from(&config.scrap_folder_name);
        if !override_path.is_absolute() {
            return Err(Error::Config(format!(
                "settings yielded a relative path [{}]; an absolute path is required",
                override_path.display()
            )));
        }
        override_path
    };

    if root.starts_with(project_folder) {
        return Err(Error::Config(format!(
            "cannot be the project directory or a subfolder of it; {} is disallowed",
            root.display()
        )));
    }

    debug!("resolved scrap root: {}", root.display());
    Ok(root)
}

/// Re-root a file's project-relative path under the scrap root.
/// Fails when the file does not live inside the project folder.
pub fn resolve_mirrored_path(
    scrap_root: &Path,
    project_folder: &Path,
    file: &Path,
) -> Result<PathBuf, Error> {
    let relative = file
        .strip_prefix(project_folder)
        .map_err(|_| Error::PathOutsideProject {
            file: file.to_path_buf(),
            project: project_folder.to_path_buf(),
        })?;
    if relative.as_os_str().is_empty() {
        // file == project folder; there is nothing to mirror
        return Err(Error::PathOutsideProject {
            file: file.to_path_buf(),
            project: project_folder.to_path_buf(),
        });
    }
    Ok(scrap_root.join(relative))
}
