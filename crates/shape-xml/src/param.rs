//! Slider parameter records.

use crate::{Error, Result, XmlElement};

/// Tag name of slider parameter elements.
pub const PARAM_TAG: &str = "param";

/// A slider value found in an appearance dump.
///
/// The originating element is kept whole so that every attribute (name,
/// value, wearable, ...) can be copied to an output document unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamRecord {
    /// Visual parameter id.
    pub id: u32,
    /// Slider value scaled to 0-255, from the `u8` attribute.
    pub raw: Option<u8>,
    /// The source element.
    pub element: XmlElement,
}

impl ParamRecord {
    /// Read a record from a `param` element.
    ///
    /// `id` is required. `u8` is optional, but when present it must be an
    /// integer in 0-255.
    pub fn from_element(element: &XmlElement) -> Result<Self> {
        let id_value = element
            .attribute("id")
            .ok_or_else(|| Error::MissingAttribute {
                tag: element.tag.clone(),
                attribute: "id",
            })?;
        let id = id_value.trim().parse().map_err(|_| Error::InvalidAttribute {
            attribute: "id",
            value: id_value.to_string(),
        })?;

        let raw = match element.attribute("u8") {
            Some(value) => Some(value.trim().parse().map_err(|_| Error::InvalidAttribute {
                attribute: "u8",
                value: value.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            id,
            raw,
            element: element.clone(),
        })
    }

    /// The wearable type this parameter belongs to, if recorded.
    pub fn wearable(&self) -> Option<&str> {
        self.element.attribute("wearable")
    }
}
