//! Slider values as shown in the appearance editor.

use std::fmt;

use rustc_hash::FxHashMap;

use shape_xml::{ParamRecord, ShapeDocument};

use crate::{Error, Result, ShapeFilter};

/// Convert a raw 0-255 param value to the 0-100 editor slider value.
pub fn slider_value(raw: u8) -> u8 {
    (f64::from(raw) / 2.55).round() as u8
}

/// The slider values of one category.
///
/// Displays as `name: v1, v2, v3,`, or `name:` when no values were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLine {
    pub name: &'static str,
    pub values: Vec<u8>,
}

impl fmt::Display for CategoryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for value in &self.values {
            write!(f, " {value},")?;
        }
        Ok(())
    }
}

impl ShapeFilter {
    /// Slider values of each merged category, in merge order.
    ///
    /// Ids are looked up in the source document; ids it does not contain
    /// are skipped.
    pub fn text_lines(&self, document: &ShapeDocument) -> Result<Vec<CategoryLine>> {
        let mut index: FxHashMap<u32, &ParamRecord> = FxHashMap::default();
        for param in document.params() {
            index.entry(param.id).or_insert(param);
        }

        self.tables()
            .categories()
            .iter()
            .map(|category| {
                let values = category
                    .ids
                    .iter()
                    .filter_map(|id| index.get(id))
                    .map(|param| {
                        param
                            .raw
                            .map(slider_value)
                            .ok_or(Error::MissingValue { id: param.id })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CategoryLine {
                    name: category.name,
                    values,
                })
            })
            .collect()
    }
}
