use std::path::Path;

/// Capability trait for asking the user to confirm scrap root creation.
///
/// The CLI implements this with a blocking stdin prompt; tests and
/// non-interactive callers use [`AutoConfirm`] or [`DenyAll`].
pub trait ConfirmPrompt: Send + Sync {
    fn confirm_create_scrap_root(&self, root: &Path) -> bool {
        let _ = root;
        true
    }
}

/// Creates the scrap root without asking.
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {}

/// Declines every creation request.
pub struct DenyAll;

impl ConfirmPrompt for DenyAll {
    fn confirm_create_scrap_root(&self, _root: &Path) -> bool {
        false
    }
}
