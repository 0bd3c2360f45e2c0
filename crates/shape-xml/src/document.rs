//! Parsed appearance dump.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::{parse_element, Error, ParamRecord, Result, XmlElement, PARAM_TAG};

/// An appearance dump with its `param` records collected in document order.
#[derive(Debug, Clone)]
pub struct ShapeDocument {
    root: XmlElement,
    params: Vec<ParamRecord>,
}

impl ShapeDocument {
    /// Read and parse a dump from a file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        debug!(path = %path.display(), bytes = xml.len(), "read shape document");
        Self::parse(&xml)
    }

    /// Parse a dump from XML text.
    ///
    /// Every element named `param`, at any depth, becomes a [`ParamRecord`].
    pub fn parse(xml: &str) -> Result<Self> {
        let root = parse_element(xml)?;
        Self::from_element(root)
    }

    /// Collect the param records of an already parsed tree.
    pub fn from_element(root: XmlElement) -> Result<Self> {
        let params = root
            .find_all(PARAM_TAG)
            .map(ParamRecord::from_element)
            .collect::<Result<Vec<_>>>()?;
        debug!(root = %root.tag, params = params.len(), "collected params");
        Ok(Self { root, params })
    }

    /// The root element of the document.
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// All param records in document order.
    pub fn params(&self) -> &[ParamRecord] {
        &self.params
    }

    /// The first param with the given id.
    pub fn param(&self, id: u32) -> Option<&ParamRecord> {
        self.params.iter().find(|p| p.id == id)
    }
}
