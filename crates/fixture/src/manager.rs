use crate::error::ImageError;
use connectors::file::{
    provider::{ImageProvider, source_preview},
    xml::provider::XmlImageProvider,
};
use model::{
    records::{image::Image, row::Row},
    transform::modifier::ModifiersList,
};
use tracing::debug;

const LEFT: &str = "LeftImage";
const RIGHT: &str = "RightImage";

/// Loads images through registered providers and compares them.
pub struct ImageManager {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl Default for ImageManager {
    /// A manager with the XML provider registered.
    fn default() -> Self {
        let mut manager = Self::empty();
        manager.register_provider(XmlImageProvider::new());
        manager
    }
}

impl ImageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager with no providers at all.
    pub fn empty() -> Self {
        ImageManager {
            providers: Vec::new(),
        }
    }

    /// Appends a provider. Providers are tried in registration order and the
    /// first one that accepts a source parses it.
    pub fn register_provider<P: ImageProvider + 'static>(&mut self, provider: P) -> &mut Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn ImageProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    pub fn load_image(&self, source: &str) -> Result<Image, ImageError> {
        let provider = self
            .provider_for(source)
            .ok_or_else(|| ImageError::NoProvider(source_preview(source)))?;

        let image = provider.parse(source)?;
        debug!(provider = provider.name(), rows = image.len(), "Image loaded");
        Ok(image)
    }

    /// Loads an image and rewrites its values with `modifiers`.
    pub fn load_image_with_modifiers(
        &self,
        source: &str,
        modifiers: &ModifiersList,
    ) -> Result<Image, ImageError> {
        let mut image = self.load_image(source)?;
        modifiers.apply(&mut image);
        Ok(image)
    }

    /// Compares two images position by position.
    ///
    /// A length mismatch is reported first; only the common prefix is then
    /// compared. Rows whose tables differ get one message and no column
    /// comparison. An empty result means the images are equal.
    pub fn images_diff(&self, left: &Image, right: &Image) -> Vec<String> {
        let mut diffs = Vec::new();

        if right.len() > left.len() {
            diffs.push(format!(
                "{RIGHT} is bigger than {LEFT} (`{}` > `{}`)",
                right.len(),
                left.len()
            ));
        } else if left.len() > right.len() {
            diffs.push(format!(
                "{LEFT} is bigger than {RIGHT} (`{}` > `{}`)",
                left.len(),
                right.len()
            ));
        }

        for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
            if l.table != r.table {
                diffs.push(format!(
                    "position `{i}`: table names are not equal (`{}` != `{}`)",
                    l.table, r.table
                ));
                continue;
            }

            compare_rows(i, l, LEFT, r, RIGHT, true, &mut diffs);
            compare_rows(i, r, RIGHT, l, LEFT, false, &mut diffs);
        }

        diffs
    }

    fn provider_for(&self, source: &str) -> Option<&dyn ImageProvider> {
        self.providers().find(|p| p.can_parse(source))
    }
}

/// Reports keys of `a` missing from `b`, and differing values when
/// `report_values` is set.
fn compare_rows(
    position: usize,
    a: &Row,
    a_name: &str,
    b: &Row,
    b_name: &str,
    report_values: bool,
    diffs: &mut Vec<String>,
) {
    for (key, a_value) in &a.data {
        match b.data.get(key) {
            None => diffs.push(format!(
                "position `{position}`: key `{key}` in {a_name} is not exists in {b_name}"
            )),
            Some(b_value) if report_values && a_value != b_value => diffs.push(format!(
                "position `{position}`: key `{key}` in {a_name} is not equal to such key in {b_name} (`{a_value}` != `{b_value}`)"
            )),
            Some(_) => {}
        }
    }
}
