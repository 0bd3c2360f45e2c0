//! Avatar gender as recorded in the shape.

use std::fmt;

use shape_xml::{ParamRecord, ShapeDocument};

use crate::GENDER_PARAM_ID;

/// Avatar gender, which decides the torso, legs and facial hair sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    /// Raw `u8` value of the gender param on a male shape.
    pub const MALE_RAW: u8 = 255;

    pub fn from_raw(raw: u8) -> Self {
        if raw == Self::MALE_RAW {
            Self::Male
        } else {
            Self::Female
        }
    }

    /// Read the gender from a document's gender param.
    ///
    /// A param tagged `wearable="shape"` is preferred when several carry the
    /// gender id. A gender param without a value counts as female. Returns
    /// `None` when the document has no gender param at all.
    pub fn detect(document: &ShapeDocument) -> Option<Self> {
        let mut candidates = document
            .params()
            .iter()
            .filter(|p| p.id == GENDER_PARAM_ID);
        let first = candidates.next()?;

        let param: &ParamRecord = if first.wearable() == Some("shape") {
            first
        } else {
            candidates
                .find(|p| p.wearable() == Some("shape"))
                .unwrap_or(first)
        };

        Some(param.raw.map_or(Self::Female, Self::from_raw))
    }

    pub fn is_male(&self) -> bool {
        *self == Self::Male
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(Gender::from_raw(255), Gender::Male);
        assert_eq!(Gender::from_raw(0), Gender::Female);
        assert_eq!(Gender::from_raw(254), Gender::Female);
    }

    #[test]
    fn test_detect_male() {
        let document =
            ShapeDocument::parse(r#"<a><param id="80" u8="255" wearable="shape"/></a>"#).unwrap();
        assert_eq!(Gender::detect(&document), Some(Gender::Male));
    }

    #[test]
    fn test_detect_missing() {
        let document = ShapeDocument::parse(r#"<a><param id="33" u8="255"/></a>"#).unwrap();
        assert_eq!(Gender::detect(&document), None);
    }

    #[test]
    fn test_detect_prefers_shape_wearable() {
        let xml = r#"<a>
            <param id="80" u8="0" wearable="skin"/>
            <param id="80" u8="255" wearable="shape"/>
        </a>"#;
        let document = ShapeDocument::parse(xml).unwrap();
        assert_eq!(Gender::detect(&document), Some(Gender::Male));
    }

    #[test]
    fn test_detect_without_value() {
        let document = ShapeDocument::parse(r#"<a><param id="80"/></a>"#).unwrap();
        assert_eq!(Gender::detect(&document), Some(Gender::Female));
    }
}
