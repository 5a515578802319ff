use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{FoodCategory, FoodRecord, REFERENCE_MASS_G};
use crate::filter::{filter_catalog, Allergen, Diet};

/// Portion bounds in grams. Hard floor/ceiling applied after the calorie
/// scaling, never a soft preference.
pub const MIN_PORTION_G: u32 = 20;
pub const MAX_PORTION_G: u32 = 400;

/// Named meal occasion. Serialized names are the menu keys the frontend
/// renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Frukost,
    #[serde(rename = "mellanmal_1")]
    Mellanmal1,
    Lunch,
    PreWorkoutMeal,
    Middag,
}

/// Fraction of the daily calorie target assigned to each meal slot. The menu
/// is emitted in this order. Fractions sum to 1.0.
pub const MEAL_SPLIT: &[(MealSlot, f64)] = &[
    (MealSlot::Frukost, 0.20),
    (MealSlot::Mellanmal1, 0.10),
    (MealSlot::Lunch, 0.30),
    (MealSlot::PreWorkoutMeal, 0.15),
    (MealSlot::Middag, 0.25),
];

/// Ordered (category, within-meal calorie weight) pairs for a meal slot.
/// Weights sum to 1.0 per slot.
pub fn meal_blueprint(slot: MealSlot) -> &'static [(FoodCategory, f64)] {
    match slot {
        MealSlot::Frukost => &[
            (FoodCategory::Carb, 0.45),
            (FoodCategory::Protein, 0.40),
            (FoodCategory::Fruit, 0.15),
        ],
        MealSlot::Mellanmal1 => &[
            (FoodCategory::Dairy, 0.50),
            (FoodCategory::Fruit, 0.30),
            (FoodCategory::Nuts, 0.20),
        ],
        MealSlot::Lunch => &[
            (FoodCategory::Protein, 0.35),
            (FoodCategory::Carb, 0.50),
            (FoodCategory::Veg, 0.15),
        ],
        MealSlot::PreWorkoutMeal => &[
            (FoodCategory::Carb, 0.60),
            (FoodCategory::Protein, 0.30),
            (FoodCategory::Fruit, 0.10),
        ],
        MealSlot::Middag => &[
            (FoodCategory::Protein, 0.40),
            (FoodCategory::Carb, 0.45),
            (FoodCategory::Veg, 0.15),
        ],
    }
}

/// A catalog food scaled to a concrete portion mass. Field names on the wire
/// are the ones the frontend consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPortion {
    #[serde(rename = "mat")]
    pub name: String,
    #[serde(rename = "mangd_g")]
    pub mass_g: u32,
    pub kcal: u32,
    #[serde(rename = "protein")]
    pub protein_g: u32,
    #[serde(rename = "fett")]
    pub fat_g: u32,
    #[serde(rename = "kolhydrater")]
    pub carbs_g: u32,
}

impl FoodPortion {
    /// Scales every nutritional field by `mass_g / 100`, rounding each one
    /// independently. Rounding drift between kcal and the macros is accepted,
    /// not corrected.
    pub fn from_record(food: &FoodRecord, mass_g: u32) -> Self {
        let factor = f64::from(mass_g) / f64::from(REFERENCE_MASS_G);
        FoodPortion {
            name: food.name.to_string(),
            mass_g,
            kcal: (f64::from(food.kcal) * factor).round() as u32,
            protein_g: (f64::from(food.protein_g) * factor).round() as u32,
            fat_g: (f64::from(food.fat_g) * factor).round() as u32,
            carbs_g: (f64::from(food.carbs_g) * factor).round() as u32,
        }
    }
}

/// Portion mass that makes `food` contribute roughly `target_kcal`, clamped
/// to the portion bounds. The `max(kcal, 1)` guard keeps zero-calorie catalog
/// entries from dividing by zero.
fn portion_grams(food: &FoodRecord, target_kcal: f64) -> u32 {
    let grams = (target_kcal / f64::from(food.kcal.max(1)) * f64::from(REFERENCE_MASS_G)).round();
    grams.clamp(f64::from(MIN_PORTION_G), f64::from(MAX_PORTION_G)) as u32
}

/// Assembles one meal: for each blueprint entry, pick one matching food at
/// random and size it to the entry's share of `meal_kcal`. Blueprint entries
/// whose filter comes up empty are skipped, so the meal may have fewer items
/// than the blueprint has categories — never more.
pub fn build_meal<R: Rng + ?Sized>(
    slot: MealSlot,
    meal_kcal: f64,
    diet: Diet,
    allergies: &[Allergen],
    rng: &mut R,
) -> Vec<FoodPortion> {
    let mut items = Vec::new();
    for &(category, weight) in meal_blueprint(slot) {
        let candidates = filter_catalog(category, diet, allergies);
        let Some(&food) = candidates.choose(rng) else {
            continue;
        };
        let mass_g = portion_grams(food, meal_kcal * weight);
        items.push(FoodPortion::from_record(food, mass_g));
    }
    items
}

/// Assembles the full menu in meal-split order.
pub fn build_menu<R: Rng + ?Sized>(
    calories: i32,
    diet: Diet,
    allergies: &[Allergen],
    rng: &mut R,
) -> IndexMap<MealSlot, Vec<FoodPortion>> {
    MEAL_SPLIT
        .iter()
        .map(|&(slot, share)| {
            let meal_kcal = f64::from(calories) * share;
            (slot, build_meal(slot, meal_kcal, diet, allergies, rng))
        })
        .collect()
}
