use serde::{Deserialize, Serialize};

/// Daily macronutrient gram targets. Serializes as the `macros` object of the
/// plan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub fat_g: u32,
    pub carbs_g: u32,
}

/// Protein and fat are fixed per-kg allowances (2.0 g/kg and 0.9 g/kg); carbs
/// absorb whatever calories remain at 4 kcal/g, floored at zero. When the
/// floor kicks in, protein and fat are left as-is and the calorie mismatch is
/// accepted.
pub fn allocate_macros(weight: f64, calories: i32) -> MacroTargets {
    let protein_g = (2.0 * weight).round() as u32;
    let fat_g = (0.9 * weight).round() as u32;
    let fixed_kcal = protein_g * 4 + fat_g * 9;
    let carbs_g = ((f64::from(calories) - f64::from(fixed_kcal)) / 4.0)
        .round()
        .max(0.0) as u32;
    MacroTargets {
        protein_g,
        fat_g,
        carbs_g,
    }
}
