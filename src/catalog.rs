use serde::{Deserialize, Serialize};

/// All catalog values are stated per this reference mass (raw/uncooked weight).
pub const REFERENCE_MASS_G: u32 = 100;

/// Meal-blueprint category a food belongs to. Every catalog entry carries
/// exactly one category; the menu assembler only ever looks foods up by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Protein,
    Fish,
    Egg,
    Carb,
    Fruit,
    Veg,
    Dairy,
    Nuts,
    Fat,
}

/// Dietary/allergen classifier attached to a food record.
///
/// The first four drive the diet predicates (vegan/vegetarian/pescetarian);
/// the `Contains*` markers drive the allergy predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodTag {
    Animal,
    Fish,
    Dairy,
    Egg,
    ContainsGluten,
    ContainsLactose,
    ContainsNuts,
}

/// Immutable catalog entry. Nutritional values are per [`REFERENCE_MASS_G`]
/// grams of the raw food.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodRecord {
    pub name: &'static str,
    pub kcal: u32,
    pub protein_g: u32,
    pub fat_g: u32,
    pub carbs_g: u32,
    pub category: FoodCategory,
    pub tags: &'static [FoodTag],
}

impl FoodRecord {
    pub fn has_tag(&self, tag: FoodTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn has_any_tag(&self, tags: &[FoodTag]) -> bool {
        tags.iter().any(|&t| self.has_tag(t))
    }
}

const fn food(
    name: &'static str,
    kcal: u32,
    protein_g: u32,
    fat_g: u32,
    carbs_g: u32,
    category: FoodCategory,
    tags: &'static [FoodTag],
) -> FoodRecord {
    FoodRecord {
        name,
        kcal,
        protein_g,
        fat_g,
        carbs_g,
        category,
        tags,
    }
}

use FoodCategory as C;
use FoodTag as T;

/// Process-wide food database, read-only after startup. Filter results follow
/// this insertion order.
pub static FOOD_CATALOG: &[FoodRecord] = &[
    // Protein
    food("Kycklingfilé", 165, 31, 3, 0, C::Protein, &[T::Animal]),
    food("Nötfärs 10%", 217, 26, 12, 0, C::Protein, &[T::Animal]),
    food("Fläskfilé", 143, 21, 6, 0, C::Protein, &[T::Animal]),
    food("Lax", 208, 20, 13, 0, C::Fish, &[T::Fish]),
    food("Torsk", 82, 18, 1, 0, C::Fish, &[T::Fish]),
    food("Tonfisk", 132, 28, 1, 0, C::Fish, &[T::Fish]),
    food("Ägg", 155, 13, 11, 1, C::Egg, &[T::Animal, T::Egg]),
    food("Äggvita", 52, 11, 0, 1, C::Egg, &[T::Egg]),
    food("Tofu", 76, 8, 5, 2, C::Protein, &[]),
    food("Kikärtor", 164, 9, 3, 27, C::Protein, &[]),
    // Kolhydrater
    food("Ris", 130, 2, 0, 28, C::Carb, &[]),
    food("Potatis", 77, 2, 0, 17, C::Carb, &[]),
    food("Sötpotatis", 86, 2, 0, 20, C::Carb, &[]),
    food("Pasta", 131, 5, 1, 25, C::Carb, &[T::ContainsGluten]),
    food("Quinoa", 120, 4, 2, 21, C::Carb, &[]),
    food("Havregryn", 360, 13, 7, 60, C::Carb, &[T::ContainsGluten]),
    food("Bröd (fullkorn)", 250, 9, 3, 46, C::Carb, &[T::ContainsGluten]),
    food("Knäckebröd", 330, 9, 1, 70, C::Carb, &[T::ContainsGluten]),
    // Frukt
    food("Banan", 90, 1, 0, 23, C::Fruit, &[]),
    food("Äpple", 52, 0, 0, 14, C::Fruit, &[]),
    food("Apelsin", 47, 1, 0, 12, C::Fruit, &[]),
    food("Blåbär", 57, 1, 0, 14, C::Fruit, &[]),
    food("Jordgubbar", 33, 1, 0, 8, C::Fruit, &[]),
    // Grönsaker
    food("Broccoli", 35, 3, 0, 7, C::Veg, &[]),
    food("Spenat", 23, 3, 0, 4, C::Veg, &[]),
    food("Paprika", 31, 1, 0, 6, C::Veg, &[]),
    food("Tomat", 18, 1, 0, 4, C::Veg, &[]),
    food("Morot", 41, 1, 0, 10, C::Veg, &[]),
    // Mejeri/nötter/fett
    food("Naturell kvarg", 68, 12, 0, 4, C::Dairy, &[T::Dairy, T::ContainsLactose]),
    food("Grekisk yoghurt 10%", 120, 6, 10, 3, C::Dairy, &[T::Dairy, T::ContainsLactose]),
    food("Mjölk 1,5%", 45, 3, 1, 5, C::Dairy, &[T::Dairy, T::ContainsLactose]),
    food("Mandlar", 579, 21, 50, 22, C::Nuts, &[T::ContainsNuts]),
    food("Olivolja", 884, 0, 100, 0, C::Fat, &[]),
];
