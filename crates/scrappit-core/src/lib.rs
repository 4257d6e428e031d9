pub mod archiver;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod resolver;
pub mod store;

pub use config::{ScrapConfig, SplitMode};
pub use engine::{CutOutcome, LineRange, ScrapEngine};
pub use error::Error;
pub use prompt::{AutoConfirm, ConfirmPrompt, DenyAll};
pub use store::{ScrapBlock, ScrapRootState};
