//! Slider catalog and shape filtering for exported avatar appearance XML.
//!
//! An appearance dump holds every visual parameter of an avatar. This crate
//! picks out the ones shown as sliders in the viewer's appearance editor,
//! grouped the way the editor groups them, so a head, a body, a hairdo or a
//! pair of eyes can be copied onto another shape.
//!
//! # Crates
//!
//! - [`shape_xml`] - Reading appearance dumps and writing genepool documents
//!
//! # Example
//!
//! ```no_run
//! use shape_sliders::prelude::*;
//!
//! let document = ShapeDocument::open("shape.xml")?;
//! let filter = ShapeFilter::new(&document, OutputMode::Head);
//!
//! // Importable XML with only the head sliders
//! print!("{}", filter.filter(&document).to_xml_string()?);
//!
//! // Or the values as shown in the editor
//! for line in filter.text_lines(&document)? {
//!     println!("{line}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
mod error;
mod filter;
mod gender;
mod mode;
mod text;

pub use shape_xml as xml;

pub use catalog::{Catalog, Category, CategoryGroup};
pub use error::{Error, Result};
pub use filter::{MergedTables, ShapeFilter, GENDER_PARAM_ID};
pub use gender::Gender;
pub use mode::OutputMode;
pub use text::{slider_value, CategoryLine};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{Catalog, CategoryLine, Gender, OutputMode, ShapeFilter};
    pub use shape_xml::{Genepool, ParamRecord, ShapeDocument};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
