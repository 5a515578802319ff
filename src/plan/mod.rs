pub mod energy;
pub mod macros;
pub mod menu;

use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::filter::{Allergen, Diet};

pub use energy::{estimate_energy, ActivityLevel, EnergyEstimate, Gender, Goal};
pub use macros::{allocate_macros, MacroTargets};
pub use menu::{build_menu, FoodPortion, MealSlot};

/// One plan request, as decoded from the client JSON. Enum-like fields coerce
/// unrecognized labels to their documented defaults at decode time; allergies
/// are free text by contract and stay strings until resolved against the
/// allergen vocabulary.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub gender: Gender,
    pub activity: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub diet: Option<Diet>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(rename = "targetWeight", default)]
    pub target_weight: Option<i32>,
}

impl UserInput {
    /// Declared allergies resolved against the recognized vocabulary.
    /// Unrecognized labels drop out silently.
    pub fn allergens(&self) -> Vec<Allergen> {
        self.allergies
            .iter()
            .filter_map(|label| Allergen::from_label(label))
            .collect()
    }
}

/// The generated plan. Serializes to the JSON shape the frontend consumes;
/// the menu map keeps its meals in meal-split order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub user: String,
    pub bmr: i32,
    pub tdee: i32,
    pub calories: i32,
    pub macros: MacroTargets,
    #[serde(rename = "targetWeight")]
    pub target_weight: Option<i32>,
    pub menu: IndexMap<MealSlot, Vec<FoodPortion>>,
}

/// Computes the complete plan with an injected randomness source. Cannot fail
/// for a structurally valid input: every sub-step is total.
pub fn generate_plan_with<R: Rng + ?Sized>(input: &UserInput, rng: &mut R) -> PlanResult {
    let energy = estimate_energy(
        input.weight,
        input.height,
        input.age,
        input.gender,
        input.activity,
        input.goal,
    );
    let macros = allocate_macros(input.weight, energy.calories);
    let menu = build_menu(
        energy.calories,
        input.diet.unwrap_or_default(),
        &input.allergens(),
        rng,
    );
    PlanResult {
        user: input.name.clone(),
        bmr: energy.bmr,
        tdee: energy.tdee,
        calories: energy.calories,
        macros,
        target_weight: input.target_weight,
        menu,
    }
}

/// Production entry point: same as [`generate_plan_with`] with thread-local
/// randomness.
pub fn generate_plan(input: &UserInput) -> PlanResult {
    generate_plan_with(input, &mut rand::thread_rng())
}
