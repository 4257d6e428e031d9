use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Scrap root configuration error: {0}")]
    Config(String),

    #[error("File {} is not inside the project folder {}", .file.display(), .project.display())]
    PathOutsideProject { file: PathBuf, project: PathBuf },

    #[error("Scrap root directory {} is not writeable", .0.display())]
    ScrapRootNotWritable(PathBuf),

    #[error("The configured scrap directory [{}] points to a non-directory entity", .0.display())]
    ScrapRootNotADirectory(PathBuf),

    #[error("Cannot archive the project folder itself: {}", .0.display())]
    ArchiveProjectRoot(PathBuf),

    #[error("Error moving {} to {}: {source}", .src.display(), .dest.display())]
    Move {
        src: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid line range '{0}': expected N or N-M with 1-based line numbers")]
    LineRange(String),
}
