use crate::file::error::ProviderError;
use model::records::image::Image;

/// Turns an external dataset source into an [`Image`].
///
/// `source` is either inline document text or a path to a file holding it;
/// each provider decides which of those it recognises.
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &str;

    fn can_parse(&self, source: &str) -> bool;

    fn parse(&self, source: &str) -> Result<Image, ProviderError>;
}

/// Shortened form of a source for error messages.
pub fn source_preview(source: &str) -> String {
    const MAX: usize = 64;
    match source.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &source[..idx]),
        None => source.to_string(),
    }
}
