//! Capabilities injected into the domain so they are substitutable in tests.

use std::path::Path;

/// Blocking interactive confirmation shown before a destructive action.
/// Replaces the ambient browser dialog the portal grew up with.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Capability that answers yes to everything. Suits embedders that render
/// their own confirmation UI before calling into the domain.
pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Local file-read producing inline image data. The portal never uploads
/// images anywhere; a selected file becomes a `data:` URL embedded in the
/// record itself.
pub trait ImageReader: Send + Sync {
    fn read_data_url(&self, path: &Path) -> anyhow::Result<String>;
}
