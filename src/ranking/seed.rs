//! Initial leaderboard contents
//!
//! Every session starts from a seed list. The built-in seed is the ten
//! house dishes; configuration may replace it.

use crate::ranking::types::{DishName, OrderCount};
use serde::{Deserialize, Serialize};

/// One seed entry as it appears in configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedDish {
    pub name: DishName,
    pub order_count: OrderCount,
}

impl SeedDish {
    pub fn new(name: DishName, order_count: OrderCount) -> Self {
        Self { name, order_count }
    }
}

const HOUSE_DISHES: [(&str, u32); 10] = [
    ("Spaghetti Carbonara", 342),
    ("Margherita Pizza", 310),
    ("Grilled Salmon", 275),
    ("Caesar Salad", 253),
    ("Beef Burger", 230),
    ("Chicken Tikka Masala", 218),
    ("Vegetable Stir Fry", 205),
    ("Chocolate Lava Cake", 189),
    ("Mushroom Risotto", 176),
    ("Fish and Chips", 162),
];

/// The built-in seed, already in rank order
pub fn default_seed() -> Vec<SeedDish> {
    HOUSE_DISHES
        .iter()
        .filter_map(|&(name, count)| {
            let name = DishName::new(name).ok()?;
            let count = OrderCount::new(count).ok()?;
            Some(SeedDish::new(name, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_complete() {
        let seed = default_seed();
        assert_eq!(seed.len(), HOUSE_DISHES.len());
        assert_eq!(seed[0].name.as_str(), "Spaghetti Carbonara");
        assert_eq!(seed[9].name.as_str(), "Fish and Chips");
        assert_eq!(seed[9].order_count.get(), 162);
    }

    #[test]
    fn test_default_seed_descending() {
        let seed = default_seed();
        assert!(seed
            .windows(2)
            .all(|pair| pair[0].order_count >= pair[1].order_count));
    }

    #[test]
    fn test_seed_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            seed: Vec<SeedDish>,
        }

        let parsed: Wrapper = toml::from_str(
            r#"
            [[seed]]
            name = "Pho"
            order_count = 12
            "#,
        )
        .unwrap();
        assert_eq!(parsed.seed[0].name.as_str(), "Pho");

        let zero = toml::from_str::<Wrapper>(
            r#"
            [[seed]]
            name = "Pho"
            order_count = 0
            "#,
        );
        assert!(zero.is_err());
    }
}
