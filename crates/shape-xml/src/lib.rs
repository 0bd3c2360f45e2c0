//! Reader and writer for exported avatar appearance XML.
//!
//! Viewers can dump the current avatar appearance as XML (in Firestorm:
//! Developer -> Avatar -> Character Tests -> Appearance To XML). The dump is a
//! tree of `param` elements, each carrying a numeric `id` and the slider value
//! scaled to a byte in the `u8` attribute.
//!
//! This crate parses such a dump into a small element tree, exposes the
//! `param` elements as [`ParamRecord`]s, and writes the `linden_genepool`
//! documents a viewer can import back onto a shape.
//!
//! # Example
//!
//! ```no_run
//! use shape_xml::{Genepool, ShapeDocument};
//!
//! let document = ShapeDocument::open("shape.xml")?;
//!
//! let mut genepool = Genepool::new();
//! for param in document.params().iter().filter(|p| p.id == 33) {
//!     genepool.push(param);
//! }
//! print!("{}", genepool.to_xml_string()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod document;
mod element;
mod error;
mod genepool;
mod param;
mod reader;
mod writer;

pub use document::ShapeDocument;
pub use element::XmlElement;
pub use error::{Error, Result};
pub use genepool::{Genepool, ARCHETYPE_PLACEHOLDER_NAME, GENEPOOL_VERSION};
pub use param::{ParamRecord, PARAM_TAG};
pub use reader::parse_element;
pub use writer::{to_xml_string, write_xml};
