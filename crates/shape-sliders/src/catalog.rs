//! Slider catalog.
//!
//! Each category lists the visual param ids of the sliders on one tab of the
//! viewer's appearance editor, in the order the editor shows them. Torso,
//! legs and facial hair have different sliders for male shapes.

use std::fmt;

use crate::Gender;

/// A named, ordered list of slider param ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Category name, used as the text output label.
    pub name: &'static str,
    /// Param ids in editor order.
    pub ids: &'static [u32],
}

impl Category {
    pub const fn new(name: &'static str, ids: &'static [u32]) -> Self {
        Self { name, ids }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }
}

/// Top-level slider groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Head,
    Body,
    Hair,
    Eyes,
}

impl CategoryGroup {
    /// Get all groups in order.
    pub const fn all() -> [CategoryGroup; 4] {
        [
            CategoryGroup::Head,
            CategoryGroup::Body,
            CategoryGroup::Hair,
            CategoryGroup::Eyes,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            CategoryGroup::Head => "head",
            CategoryGroup::Body => "body",
            CategoryGroup::Hair => "hair",
            CategoryGroup::Eyes => "eyes",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub const HEAD: Category = Category::new(
    "head",
    &[
        682, // head size
        647, // head stretch
        193, // head shape
        186, // egg head
        773, // head length
        662, // face shear
        629, // forehead angle
        1,   // brow size
        18,  // upper cheeks
        10,  // lower cheeks
        14,  // cheek bones
    ],
);

pub const EYE_SHAPE: Category = Category::new(
    "eyes",
    &[
        690, // eye size
        24,  // eye opening
        196, // eye spacing
        650, // outer eye corner
        880, // inner eye corner
        769, // eye depth
        21,  // upper eyelid fold
        23,  // eye bags
        765, // puffy eyelids
        518, // eyelash length
        664, // eye pop
    ],
);

pub const EARS: Category = Category::new(
    "ears",
    &[
        35,  // ear size
        15,  // ear angle
        22,  // attached earlobes
        796, // ear tips
    ],
);

pub const NOSE: Category = Category::new(
    "nose",
    &[
        2,   // nose size
        517, // nose width
        4,   // nostril width
        759, // nostril division
        20,  // nose thickness
        11,  // upper bridge
        758, // lower bridge
        27,  // bridge width
        19,  // nose tip angle
        6,   // nose tip shape
        656, // crooked nose
    ],
);

pub const MOUTH: Category = Category::new(
    "mouth",
    &[
        155, // lip width
        653, // lip fullness
        505, // lip thickness
        799, // lip ratio
        506, // mouth position
        659, // mouth corner
        764, // lip cleft depth
        25,  // lip cleft
        663, // shift mouth
    ],
);

pub const CHIN: Category = Category::new(
    "chin",
    &[
        7,   // chin angle
        17,  // jaw shape
        185, // chin depth
        760, // jaw angle
        665, // jaw jut
        12,  // jowls
        5,   // chin cleft
        13,  // upper chin cleft
        8,   // chin-neck
    ],
);

pub const BODY: Category = Category::new(
    "body",
    &[
        33,    // height
        34,    // body thickness
        637,   // body fat
        11001, // hover
    ],
);

pub const TORSO: Category = Category::new(
    "torso",
    &[
        649, // torso muscles
        683, // neck thickness
        756, // neck length
        36,  // shoulders
        105, // breast size
        507, // breast buoyancy
        684, // breast cleavage
        693, // arm length
        675, // hand size
        38,  // torso length
        676, // love handles
        157, // belly size
    ],
);

pub const MALE_TORSO: Category = Category::new(
    "torso",
    &[
        678, // torso muscles
        683, // neck thickness
        756, // neck length
        36,  // shoulders
        685, // pectorals
        693, // arm length
        675, // hand size
        38,  // torso length
        676, // love handles
        157, // belly size
    ],
);

pub const LEGS: Category = Category::new(
    "legs",
    &[
        152, // leg muscles
        692, // leg length
        37,  // hip width
        842, // hip length
        151, // butt size
        753, // saddle bags
        841, // knee angle
        515, // foot size
    ],
);

pub const MALE_LEGS: Category = Category::new(
    "legs",
    &[
        152, // leg muscles
        692, // leg length
        37,  // hip width
        842, // hip length
        151, // butt size
        879, // package
        753, // saddle bags
        841, // knee angle
        515, // foot size
    ],
);

pub const HAIR_COLOR: Category = Category::new(
    "color",
    &[
        115, // white hair
        112, // rainbow color
        114, // blonde hair
        113, // red hair
    ],
);

pub const HAIR_STYLE: Category = Category::new(
    "style",
    &[
        763, // volume
        133, // front
        134, // sides
        135, // back
        181, // big hair front
        182, // big hair top
        183, // big hair back
        130, // front fringe
        131, // side fringe
        132, // back fringe
        143, // full hair sides
        136, // hair sweep
        762, // shear front
        674, // shear back
        755, // taper front
        754, // taper back
        177, // rumpled hair
        785, // pigtails
        789, // ponytail
        184, // spiked hair
        137, // hair tilt
        140, // middle part
        141, // right part
        142, // left part
        192, // part bangs
    ],
);

pub const EYEBROWS: Category = Category::new(
    "eyebrows",
    &[
        119, // eyebrow size
        750, // eyebrow density
        757, // eyebrow height
        31,  // eyebrow arc
        16,  // eyebrow points
    ],
);

pub const FACIAL: Category = Category::new("facial", &[]);

pub const MALE_FACIAL: Category = Category::new(
    "facial",
    &[
        752, // hair thickness
        166, // sideburns
        167, // moustache
        169, // chin curtains
        168, // soul patch
    ],
);

pub const EYE_COLOR: Category = Category::new(
    "eyes",
    &[
        99, // eye color
        98, // eye lightness
    ],
);

/// The slider categories in effect for one shape.
///
/// Built fresh for each gender; the static tables are never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    head: Vec<Category>,
    body: Vec<Category>,
    hair: Vec<Category>,
    eyes: Vec<Category>,
}

impl Catalog {
    /// Build the catalog for a gender.
    ///
    /// Male shapes get the male torso, legs and facial hair sliders; every
    /// other category is the same for both.
    pub fn for_gender(gender: Gender) -> Self {
        let (torso, legs, facial) = match gender {
            Gender::Male => (MALE_TORSO, MALE_LEGS, MALE_FACIAL),
            Gender::Female => (TORSO, LEGS, FACIAL),
        };

        Self {
            head: vec![HEAD, EYE_SHAPE, EARS, NOSE, MOUTH, CHIN],
            body: vec![BODY, torso, legs],
            hair: vec![HAIR_COLOR, HAIR_STYLE, EYEBROWS, facial],
            eyes: vec![EYE_COLOR],
        }
    }

    /// The categories of a group, in editor order.
    pub fn group(&self, group: CategoryGroup) -> &[Category] {
        match group {
            CategoryGroup::Head => &self.head,
            CategoryGroup::Body => &self.body,
            CategoryGroup::Hair => &self.hair,
            CategoryGroup::Eyes => &self.eyes,
        }
    }

    /// Find a category by group and name.
    pub fn category(&self, group: CategoryGroup, name: &str) -> Option<&Category> {
        self.group(group).iter().find(|c| c.name == name)
    }
}
