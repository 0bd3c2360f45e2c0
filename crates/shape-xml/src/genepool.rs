//! Builder for importable `linden_genepool` documents.

use std::io::Write;

use crate::{writer, ParamRecord, Result, XmlElement};

/// Format version written on the `linden_genepool` root.
pub const GENEPOOL_VERSION: &str = "1.0";

/// Name given to the archetype; viewers ignore it on import.
pub const ARCHETYPE_PLACEHOLDER_NAME: &str = "???";

/// A `linden_genepool` document holding one archetype of params.
///
/// # Example
///
/// ```
/// use shape_xml::{Genepool, ParamRecord, XmlElement};
///
/// let element = XmlElement::new("param").with_attr("id", "33").with_attr("u8", "200");
/// let mut genepool = Genepool::new();
/// genepool.push(&ParamRecord::from_element(&element)?);
///
/// let xml = genepool.to_xml_string()?;
/// assert!(xml.contains(r#"<archetype name="???">"#));
/// # Ok::<(), shape_xml::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Genepool {
    archetype: XmlElement,
}

impl Genepool {
    /// Create an empty document with a placeholder archetype name.
    pub fn new() -> Self {
        Self {
            archetype: XmlElement::new("archetype").with_attr("name", ARCHETYPE_PLACEHOLDER_NAME),
        }
    }

    /// Append a copy of a param element to the archetype.
    pub fn push(&mut self, param: &ParamRecord) {
        self.archetype.children.push(param.element.clone());
    }

    /// The params in the archetype, in insertion order.
    pub fn params(&self) -> &[XmlElement] {
        &self.archetype.children
    }

    /// Number of params in the archetype.
    pub fn len(&self) -> usize {
        self.archetype.children.len()
    }

    /// Check if the archetype has no params.
    pub fn is_empty(&self) -> bool {
        self.archetype.children.is_empty()
    }

    /// Build the full element tree of the document.
    pub fn to_element(&self) -> XmlElement {
        XmlElement::new("linden_genepool")
            .with_attr("version", GENEPOOL_VERSION)
            .with_child(self.archetype.clone())
    }

    /// Convert to an indented XML string.
    pub fn to_xml_string(&self) -> Result<String> {
        writer::to_xml_string(&self.to_element())
    }

    /// Write indented XML to a writer.
    pub fn write_xml<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer::write_xml(&self.to_element(), writer)
    }
}

impl Default for Genepool {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<ParamRecord> for Genepool {
    fn extend<T: IntoIterator<Item = ParamRecord>>(&mut self, iter: T) {
        self.archetype
            .children
            .extend(iter.into_iter().map(|param| param.element));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_element;

    #[test]
    fn test_empty_genepool() {
        let genepool = Genepool::new();
        assert!(genepool.is_empty());

        let root = parse_element(&genepool.to_xml_string().unwrap()).unwrap();
        assert_eq!(root.tag, "linden_genepool");
        assert_eq!(root.attribute("version"), Some(GENEPOOL_VERSION));
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].attribute("name"), Some(ARCHETYPE_PLACEHOLDER_NAME));
    }

    #[test]
    fn test_params_copied_verbatim() {
        let element = XmlElement::new("param")
            .with_attr("id", "649")
            .with_attr("name", "muscular_torso")
            .with_attr("u8", "100")
            .with_attr("wearable", "shape");
        let param = ParamRecord::from_element(&element).unwrap();

        let mut genepool = Genepool::new();
        genepool.push(&param);
        assert_eq!(genepool.len(), 1);

        let root = parse_element(&genepool.to_xml_string().unwrap()).unwrap();
        assert_eq!(root.children[0].children, vec![element]);
    }
}
