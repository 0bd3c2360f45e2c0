//! Shape filtering.

use rustc_hash::FxHashSet;
use tracing::{debug, info, warn};

use shape_xml::{Genepool, ParamRecord, ShapeDocument};

use crate::{Catalog, Category, Gender, OutputMode};

/// Param id of the gender slider. A `u8` of 255 marks a male shape.
pub const GENDER_PARAM_ID: u32 = 80;

/// The categories merged for an output mode.
///
/// Groups are merged in mode order. When a later group has a category with
/// the same name as an earlier one, its ids replace the earlier list but the
/// category keeps its original position. The selection set is the union of
/// every merged list, including replaced ones.
#[derive(Debug, Clone)]
pub struct MergedTables {
    categories: Vec<Category>,
    selection: FxHashSet<u32>,
}

impl MergedTables {
    pub fn merge(catalog: &Catalog, mode: OutputMode) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        let mut selection = FxHashSet::default();

        for &group in mode.groups() {
            for category in catalog.group(group) {
                selection.extend(category.ids.iter().copied());

                match categories.iter_mut().find(|c| c.name == category.name) {
                    Some(existing) => {
                        debug!(category = category.name, %group, "category replaced by later group");
                        *existing = *category;
                    }
                    None => categories.push(*category),
                }
            }
        }

        Self {
            categories,
            selection,
        }
    }

    /// Merged categories in merge order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Check if a param id is selected.
    pub fn contains(&self, id: u32) -> bool {
        self.selection.contains(&id)
    }

    /// Number of distinct selected ids.
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }
}

/// Selects the sliders of an output mode from a shape.
#[derive(Debug, Clone)]
pub struct ShapeFilter {
    mode: OutputMode,
    gender: Gender,
    tables: MergedTables,
}

impl ShapeFilter {
    /// Create a filter for a document, reading the gender from its gender
    /// param.
    ///
    /// A document without a gender param is treated as female.
    pub fn new(document: &ShapeDocument, mode: OutputMode) -> Self {
        let gender = Gender::detect(document).unwrap_or_else(|| {
            warn!(
                id = GENDER_PARAM_ID,
                "gender param not found, using {} sliders",
                Gender::default()
            );
            Gender::default()
        });
        Self::with_gender(gender, mode)
    }

    /// Create a filter for a known gender.
    pub fn with_gender(gender: Gender, mode: OutputMode) -> Self {
        let catalog = Catalog::for_gender(gender);
        let tables = MergedTables::merge(&catalog, mode);
        info!(
            %mode,
            %gender,
            categories = tables.categories().len(),
            sliders = tables.selection_len(),
            "resolved slider tables"
        );
        Self {
            mode,
            gender,
            tables,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn tables(&self) -> &MergedTables {
        &self.tables
    }

    /// Check if a param belongs in the output.
    pub fn is_selected(&self, param: &ParamRecord) -> bool {
        self.tables.contains(param.id)
            || (param.id == GENDER_PARAM_ID && self.mode.includes_gender_flag())
    }

    /// Iterate over the selected params in document order.
    pub fn select<'a>(
        &'a self,
        document: &'a ShapeDocument,
    ) -> impl Iterator<Item = &'a ParamRecord> + 'a {
        document.params().iter().filter(move |p| self.is_selected(p))
    }

    /// Build a genepool document holding only the selected params.
    pub fn filter(&self, document: &ShapeDocument) -> Genepool {
        let mut genepool = Genepool::new();
        genepool.extend(self.select(document).cloned());
        debug!(
            selected = genepool.len(),
            total = document.params().len(),
            "filtered params"
        );
        genepool
    }
}
