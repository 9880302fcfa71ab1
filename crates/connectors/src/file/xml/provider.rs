//! XML dataset provider.
//!
//! A dataset document looks like:
//!
//! ```xml
//! <?xml version="1.0" ?>
//! <dataset>
//!     <users id="1" name="alice"/>
//!     <orders id="10" user_id="1" total="12.50"/>
//! </dataset>
//! ```
//!
//! Every element inside `<dataset>` becomes one row, nested ones included:
//! the element name is the table, the attributes are the columns. Text
//! content is not read.

use crate::file::{
    error::ProviderError,
    provider::{ImageProvider, source_preview},
};
use model::records::{image::Image, row::Row};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use std::{borrow::Cow, fs, path::Path};
use tracing::debug;

const XML_ROOT_ELEMENT: &str = "dataset";
const XML_PROLOG: &str = "<?xml";
const XML_EXTENSION: &str = "xml";

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlImageProvider;

impl XmlImageProvider {
    pub fn new() -> Self {
        XmlImageProvider
    }

    /// Resolves the source into document text.
    ///
    /// Inline text must contain the XML prolog; otherwise the source must be
    /// a `.xml` path whose content contains it.
    fn source_to_string<'a>(&self, source: &'a str) -> Result<Cow<'a, str>, ProviderError> {
        if source.contains(XML_PROLOG) {
            return Ok(Cow::Borrowed(source));
        }

        let is_xml_path = Path::new(source)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(XML_EXTENSION));
        if is_xml_path {
            let content = fs::read_to_string(source)?;
            if content.contains(XML_PROLOG) {
                return Ok(Cow::Owned(content));
            }
        }

        Err(ProviderError::InvalidSource(source_preview(source)))
    }

    fn to_image(&self, xml: &str) -> Result<Image, ProviderError> {
        let mut reader = Reader::from_str(xml);
        let mut image = Image::new();

        // Number of currently open elements.
        let mut depth = 0usize;
        // Depth of the direct children of the open `<dataset>`.
        let mut dataset_depth: Option<usize> = None;
        let mut seen_token = false;

        loop {
            let event = reader.read_event().map_err(|source| ProviderError::Xml {
                position: reader.buffer_position(),
                source,
            })?;

            match event {
                Event::Eof => {
                    if !seen_token {
                        return Err(ProviderError::EmptyDocument);
                    }
                    if depth > 0 {
                        return Err(ProviderError::UnexpectedEof(depth));
                    }
                    break;
                }
                Event::Start(ref e) => {
                    if local_name_str(e.local_name().as_ref()) == XML_ROOT_ELEMENT {
                        if dataset_depth.is_none() {
                            dataset_depth = Some(depth + 1);
                        }
                    } else if collecting(dataset_depth, depth) {
                        image.push(row_from_element(e, &reader)?);
                    }
                    depth += 1;
                }
                Event::Empty(ref e) => {
                    let is_root = local_name_str(e.local_name().as_ref()) == XML_ROOT_ELEMENT;
                    if !is_root && collecting(dataset_depth, depth) {
                        image.push(row_from_element(e, &reader)?);
                    }
                }
                Event::End(ref e) => {
                    depth = depth.saturating_sub(1);
                    let is_root = local_name_str(e.local_name().as_ref()) == XML_ROOT_ELEMENT;
                    if is_root && dataset_depth == Some(depth + 1) {
                        dataset_depth = None;
                    }
                }
                _ => {}
            }
            seen_token = true;
        }

        debug!(rows = image.len(), "Parsed XML dataset");
        Ok(image)
    }
}

impl ImageProvider for XmlImageProvider {
    fn name(&self) -> &str {
        "xml"
    }

    fn can_parse(&self, source: &str) -> bool {
        self.source_to_string(source).is_ok()
    }

    fn parse(&self, source: &str) -> Result<Image, ProviderError> {
        let data = self.source_to_string(source)?;
        self.to_image(&data)
    }
}

fn collecting(dataset_depth: Option<usize>, depth: usize) -> bool {
    dataset_depth.is_some_and(|children| depth >= children)
}

/// Builds a row from an element: local name as table, attributes as columns.
fn row_from_element(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Row, ProviderError> {
    let mut row = Row::new(&local_name_str(e.local_name().as_ref()));
    for attr_result in e.attributes() {
        let attr = attr_result?;
        let key = local_name_str(attr.key.local_name().as_ref());
        let value = attr.unescape_value().map_err(|source| ProviderError::Xml {
            position: reader.buffer_position(),
            source,
        })?;
        row.insert(key, value.into_owned());
    }
    Ok(row)
}

fn local_name_str(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}
