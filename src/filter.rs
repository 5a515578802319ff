use serde::Deserialize;

use crate::catalog::{FoodCategory, FoodRecord, FoodTag, FOOD_CATALOG};

/// Diet type requested by the user. Anything we do not recognize (including an
/// absent diet) means no restriction at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Diet {
    Vegan,
    Vegetarian,
    Pescetarian,
    #[default]
    Unrestricted,
}

impl Diet {
    pub fn from_label(label: &str) -> Self {
        match label {
            "vegan" => Diet::Vegan,
            "vegetarian" => Diet::Vegetarian,
            "pescetarian" => Diet::Pescetarian,
            _ => Diet::Unrestricted,
        }
    }
}

impl From<String> for Diet {
    fn from(label: String) -> Self {
        Diet::from_label(&label)
    }
}

/// Recognized allergens. User-supplied allergy strings are matched against the
/// locale labels the frontend sends; anything else resolves to nothing and is
/// ignored downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allergen {
    Gluten,
    Lactose,
    Nuts,
}

impl Allergen {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "gluten" => Some(Allergen::Gluten),
            "laktos" => Some(Allergen::Lactose),
            "nötter" => Some(Allergen::Nuts),
            _ => None,
        }
    }

    /// Tag that disqualifies a food for a user with this allergy.
    pub fn marker_tag(self) -> FoodTag {
        match self {
            Allergen::Gluten => FoodTag::ContainsGluten,
            Allergen::Lactose => FoodTag::ContainsLactose,
            Allergen::Nuts => FoodTag::ContainsNuts,
        }
    }
}

pub fn matches_diet(food: &FoodRecord, diet: Diet) -> bool {
    match diet {
        Diet::Vegan => !food.has_any_tag(&[FoodTag::Animal, FoodTag::Fish, FoodTag::Dairy, FoodTag::Egg]),
        Diet::Vegetarian => !food.has_any_tag(&[FoodTag::Animal, FoodTag::Fish]),
        Diet::Pescetarian => !food.has_tag(FoodTag::Animal),
        Diet::Unrestricted => true,
    }
}

pub fn matches_allergies(food: &FoodRecord, allergies: &[Allergen]) -> bool {
    allergies.iter().all(|a| !food.has_tag(a.marker_tag()))
}

/// A food passes only if both the diet predicate and every declared allergy
/// predicate hold.
pub fn matches(food: &FoodRecord, diet: Diet, allergies: &[Allergen]) -> bool {
    matches_diet(food, diet) && matches_allergies(food, allergies)
}

/// All catalog entries of `category` that pass the diet/allergy filter, in
/// catalog insertion order.
pub fn filter_catalog(
    category: FoodCategory,
    diet: Diet,
    allergies: &[Allergen],
) -> Vec<&'static FoodRecord> {
    FOOD_CATALOG
        .iter()
        .filter(|f| f.category == category && matches(f, diet, allergies))
        .collect()
}
