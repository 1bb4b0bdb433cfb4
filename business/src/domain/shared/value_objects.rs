use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Longest accepted list, item or product name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Icon used when an item has none of its own.
pub const DEFAULT_ICON: &str = "📦";

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

row_id!(
    /// Store-assigned identifier of a shopping list.
    ListId
);
row_id!(
    /// Store-assigned identifier of an item.
    ItemId
);
row_id!(
    /// Store-assigned identifier of a price history entry.
    PriceEntryId
);

/// Unit of measure an item is sold by.
///
/// Persisted as its integer code. Codes that do not match a variant decode to
/// [`Unit::Unit`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Kilogram,
    Gram,
    Liter,
    #[default]
    Unit,
    Package,
    Box,
}

impl Unit {
    pub fn code(&self) -> i64 {
        match self {
            Unit::Kilogram => 0,
            Unit::Gram => 1,
            Unit::Liter => 2,
            Unit::Unit => 3,
            Unit::Package => 4,
            Unit::Box => 5,
        }
    }

    /// Parses a snake_case name, falling back to [`Unit::Unit`].
    pub fn parse_or_default(s: &str) -> Self {
        s.trim().to_lowercase().parse().unwrap_or_default()
    }
}

impl From<i64> for Unit {
    fn from(code: i64) -> Self {
        match code {
            0 => Unit::Kilogram,
            1 => Unit::Gram,
            2 => Unit::Liter,
            4 => Unit::Package,
            5 => Unit::Box,
            _ => Unit::Unit,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kilogram => write!(f, "kilogram"),
            Unit::Gram => write!(f, "gram"),
            Unit::Liter => write!(f, "liter"),
            Unit::Unit => write!(f, "unit"),
            Unit::Package => write!(f, "package"),
            Unit::Box => write!(f, "box"),
        }
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kilogram" => Ok(Unit::Kilogram),
            "gram" => Ok(Unit::Gram),
            "liter" => Ok(Unit::Liter),
            "unit" => Ok(Unit::Unit),
            "package" => Ok(Unit::Package),
            "box" => Ok(Unit::Box),
            _ => Err(format!("Invalid unit: {}", s)),
        }
    }
}

/// Product category. Declaration order is the display and sort order.
///
/// Persisted as its integer code. Codes that do not match a variant decode to
/// [`Category::Other`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ProduceAndVegetables,
    Meat,
    Dairy,
    Beverages,
    Cleaning,
    Bakery,
    Frozen,
    Hygiene,
    #[default]
    Other,
}

impl Category {
    pub fn code(&self) -> i64 {
        match self {
            Category::ProduceAndVegetables => 0,
            Category::Meat => 1,
            Category::Dairy => 2,
            Category::Beverages => 3,
            Category::Cleaning => 4,
            Category::Bakery => 5,
            Category::Frozen => 6,
            Category::Hygiene => 7,
            Category::Other => 8,
        }
    }

    /// Parses a snake_case name, falling back to [`Category::Other`].
    pub fn parse_or_default(s: &str) -> Self {
        s.trim().to_lowercase().parse().unwrap_or_default()
    }
}

impl From<i64> for Category {
    fn from(code: i64) -> Self {
        match code {
            0 => Category::ProduceAndVegetables,
            1 => Category::Meat,
            2 => Category::Dairy,
            3 => Category::Beverages,
            4 => Category::Cleaning,
            5 => Category::Bakery,
            6 => Category::Frozen,
            7 => Category::Hygiene,
            _ => Category::Other,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::ProduceAndVegetables => write!(f, "produce_and_vegetables"),
            Category::Meat => write!(f, "meat"),
            Category::Dairy => write!(f, "dairy"),
            Category::Beverages => write!(f, "beverages"),
            Category::Cleaning => write!(f, "cleaning"),
            Category::Bakery => write!(f, "bakery"),
            Category::Frozen => write!(f, "frozen"),
            Category::Hygiene => write!(f, "hygiene"),
            Category::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "produce_and_vegetables" => Ok(Category::ProduceAndVegetables),
            "meat" => Ok(Category::Meat),
            "dairy" => Ok(Category::Dairy),
            "beverages" => Ok(Category::Beverages),
            "cleaning" => Ok(Category::Cleaning),
            "bakery" => Ok(Category::Bakery),
            "frozen" => Ok(Category::Frozen),
            "hygiene" => Ok(Category::Hygiene),
            "other" => Ok(Category::Other),
            _ => Err(format!("Invalid category: {}", s)),
        }
    }
}
