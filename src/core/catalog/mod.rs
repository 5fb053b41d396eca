//! Catalog assembly, serialization and persistence.
//!
//! - `document`: builds the XLIFF tree from translation units
//! - `xml`: generic element tree and its text serialization
//! - `writer`: writes `messages.xlf` into the output directory

pub mod document;
pub mod writer;
pub mod xml;

pub use document::build;
pub use writer::{CATALOG_FILE_NAME, write};
pub use xml::{XmlDocument, XmlElement, XmlNode};
