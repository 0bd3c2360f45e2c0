//! Output modes.

use std::fmt;

use crate::CategoryGroup;

/// Which slider groups to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Body sliders and the gender param.
    Body,
    /// Eye color sliders.
    Eyes,
    /// Hair, eyebrow and facial hair sliders.
    Hair,
    /// Head, eye shape, ear, nose, mouth and chin sliders.
    Head,
    /// Head and body sliders and the gender param.
    Shape,
    /// Every group, without the gender param.
    #[default]
    All,
}

impl OutputMode {
    /// Groups merged for this mode, in merge order.
    pub const fn groups(&self) -> &'static [CategoryGroup] {
        match self {
            OutputMode::Body => &[CategoryGroup::Body],
            OutputMode::Eyes => &[CategoryGroup::Eyes],
            OutputMode::Hair => &[CategoryGroup::Hair],
            OutputMode::Head => &[CategoryGroup::Head],
            OutputMode::Shape => &[CategoryGroup::Head, CategoryGroup::Body],
            OutputMode::All => &[
                CategoryGroup::Head,
                CategoryGroup::Body,
                CategoryGroup::Hair,
                CategoryGroup::Eyes,
            ],
        }
    }

    /// Whether the gender param is copied to the output.
    pub const fn includes_gender_flag(&self) -> bool {
        matches!(self, OutputMode::Body | OutputMode::Shape)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            OutputMode::Body => "body",
            OutputMode::Eyes => "eyes",
            OutputMode::Hair => "hair",
            OutputMode::Head => "head",
            OutputMode::Shape => "shape",
            OutputMode::All => "all",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
