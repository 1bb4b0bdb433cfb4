use super::model::CatalogEntry;
use crate::domain::shared::money::cents;
use crate::domain::shared::value_objects::{Category, Unit};

#[rustfmt::skip]
const PRODUCTS: &[(&str, Unit, Category, &str, i64)] = &[
    ("banana", Unit::Kilogram, Category::ProduceAndVegetables, "🍌", 450),
    ("apple", Unit::Kilogram, Category::ProduceAndVegetables, "🍎", 600),
    ("tomato", Unit::Kilogram, Category::ProduceAndVegetables, "🍅", 580),
    ("onion", Unit::Kilogram, Category::ProduceAndVegetables, "🧅", 320),
    ("potato", Unit::Kilogram, Category::ProduceAndVegetables, "🥔", 480),
    ("lettuce", Unit::Unit, Category::ProduceAndVegetables, "🥬", 250),
    ("carrot", Unit::Kilogram, Category::ProduceAndVegetables, "🥕", 420),
    ("orange", Unit::Kilogram, Category::ProduceAndVegetables, "🍊", 380),
    ("lemon", Unit::Kilogram, Category::ProduceAndVegetables, "🍋", 450),
    ("pineapple", Unit::Unit, Category::ProduceAndVegetables, "🍍", 800),
    ("papaya", Unit::Kilogram, Category::ProduceAndVegetables, "🥭", 550),
    ("cucumber", Unit::Kilogram, Category::ProduceAndVegetables, "🥒", 380),

    ("ground beef", Unit::Kilogram, Category::Meat, "🥩", 1890),
    ("chicken", Unit::Kilogram, Category::Meat, "🍗", 1250),
    ("fish", Unit::Kilogram, Category::Meat, "🐟", 2500),
    ("sausage", Unit::Kilogram, Category::Meat, "🌭", 1580),
    ("sirloin steak", Unit::Kilogram, Category::Meat, "🥩", 4500),
    ("bacon", Unit::Kilogram, Category::Meat, "🥓", 2200),
    ("chicken breast", Unit::Kilogram, Category::Meat, "🍗", 1490),

    ("milk", Unit::Liter, Category::Dairy, "🥛", 450),
    ("cheese", Unit::Kilogram, Category::Dairy, "🧀", 3500),
    ("yogurt", Unit::Unit, Category::Dairy, "🥛", 380),
    ("butter", Unit::Unit, Category::Dairy, "🧈", 850),
    ("cream cheese", Unit::Unit, Category::Dairy, "🧀", 690),
    ("condensed milk", Unit::Unit, Category::Dairy, "🥛", 420),
    ("heavy cream", Unit::Unit, Category::Dairy, "🥛", 350),

    ("soda", Unit::Liter, Category::Beverages, "🥤", 550),
    ("beer", Unit::Unit, Category::Beverages, "🍺", 380),
    ("water", Unit::Liter, Category::Beverages, "💧", 250),
    ("juice", Unit::Liter, Category::Beverages, "🧃", 490),
    ("coffee", Unit::Package, Category::Beverages, "☕", 850),

    ("dish soap", Unit::Unit, Category::Cleaning, "🧽", 280),
    ("laundry detergent", Unit::Box, Category::Cleaning, "📦", 1250),
    ("toilet paper", Unit::Package, Category::Cleaning, "🧻", 1590),
    ("disinfectant", Unit::Unit, Category::Cleaning, "🧽", 450),
    ("bleach", Unit::Unit, Category::Cleaning, "🧽", 320),

    ("bread roll", Unit::Unit, Category::Bakery, "🍞", 50),
    ("cake", Unit::Unit, Category::Bakery, "🎂", 1500),
    ("cookies", Unit::Package, Category::Bakery, "🍪", 480),
    ("baguette", Unit::Unit, Category::Bakery, "🥖", 650),

    ("frozen pizza", Unit::Unit, Category::Frozen, "🍕", 1290),
    ("ice cream", Unit::Unit, Category::Frozen, "🍦", 850),
    ("chicken nuggets", Unit::Package, Category::Frozen, "🍗", 1590),

    ("bar soap", Unit::Unit, Category::Hygiene, "🧼", 250),
    ("shampoo", Unit::Unit, Category::Hygiene, "🧴", 1290),

    ("sugar", Unit::Kilogram, Category::Other, "🍯", 420),
    ("rice", Unit::Kilogram, Category::Other, "🍚", 650),
    ("beans", Unit::Kilogram, Category::Other, "🫘", 890),
    ("pasta", Unit::Package, Category::Other, "🍝", 380),
    ("cooking oil", Unit::Liter, Category::Other, "🛢️", 750),
    ("salt", Unit::Kilogram, Category::Other, "🧂", 220),
    ("flour", Unit::Kilogram, Category::Other, "🌾", 450),
];

pub(super) fn entries() -> Vec<CatalogEntry> {
    PRODUCTS
        .iter()
        .map(|(name, unit, category, icon, price)| CatalogEntry {
            name: name.to_string(),
            unit: *unit,
            category: *category,
            icon: icon.to_string(),
            reference_price: cents(*price),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_not_repeat_product_names() {
        let names: HashSet<&str> = PRODUCTS.iter().map(|p| p.0).collect();
        assert_eq!(names.len(), PRODUCTS.len());
    }

    #[test]
    fn should_store_names_already_normalized() {
        assert!(PRODUCTS.iter().all(|p| p.0 == p.0.trim().to_lowercase()));
    }

    #[test]
    fn should_keep_icons_within_column_width() {
        assert!(PRODUCTS.iter().all(|p| p.3.chars().count() <= 10));
    }
}
