use quick_xml::events::attributes::AttrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source is neither inline data nor a readable file of the right kind.
    #[error("Invalid source: {0}")]
    InvalidSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error at position {position}: {source}")]
    Xml {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("XML attribute error: {0}")]
    Attribute(#[from] AttrError),

    /// The document ended while elements were still open.
    #[error("Unexpected end of document: {0} element(s) left open")]
    UnexpectedEof(usize),

    #[error("Empty document")]
    EmptyDocument,
}
