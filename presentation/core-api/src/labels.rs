use business::domain::item::model::Item;
use business::domain::shared::value_objects::{Category, Unit};

/// Language of user-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

/// Short unit symbol shown next to a quantity.
pub fn unit_symbol(unit: Unit) -> &'static str {
    match unit {
        Unit::Kilogram => "kg",
        Unit::Gram => "g",
        Unit::Liter => "L",
        Unit::Unit => "un",
        Unit::Package => "pct",
        Unit::Box => "cx",
    }
}

pub fn category_label(category: Category, locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => match category {
            Category::ProduceAndVegetables => "Frutas e Verduras",
            Category::Meat => "Carnes",
            Category::Dairy => "Laticínios",
            Category::Beverages => "Bebidas",
            Category::Cleaning => "Limpeza",
            Category::Bakery => "Padaria",
            Category::Frozen => "Congelados",
            Category::Hygiene => "Higiene",
            Category::Other => "Outros",
        },
        Locale::EnUs => match category {
            Category::ProduceAndVegetables => "Produce & Vegetables",
            Category::Meat => "Meat",
            Category::Dairy => "Dairy",
            Category::Beverages => "Beverages",
            Category::Cleaning => "Cleaning",
            Category::Bakery => "Bakery",
            Category::Frozen => "Frozen",
            Category::Hygiene => "Hygiene",
            Category::Other => "Other",
        },
    }
}

/// Icon followed by name, as shown in list rows.
pub fn item_display_text(item: &Item) -> String {
    format!("{} {}", item.icon, item.name)
}
