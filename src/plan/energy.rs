use serde::Deserialize;

/// Two-way split on purpose: the BMR formula only distinguishes "male" from
/// everything else, so any other label takes the second branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Gender {
    Male,
    Other,
}

impl Gender {
    pub fn from_label(label: &str) -> Self {
        if label == "male" {
            Gender::Male
        } else {
            Gender::Other
        }
    }
}

impl From<String> for Gender {
    fn from(label: String) -> Self {
        Gender::from_label(&label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn from_label(label: &str) -> Self {
        match label {
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            // "sedentary" and anything unrecognized
            _ => ActivityLevel::Sedentary,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        ActivityLevel::from_label(&label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Goal {
    Bulk,
    Cut,
    Maintain,
}

impl Goal {
    pub fn from_label(label: &str) -> Self {
        match label {
            "bulk" => Goal::Bulk,
            "cut" => Goal::Cut,
            _ => Goal::Maintain,
        }
    }

    /// Daily kcal added on top of TDEE for this goal.
    pub fn calorie_adjustment(self) -> i32 {
        match self {
            Goal::Bulk => 400,
            Goal::Cut => -400,
            Goal::Maintain => 0,
        }
    }
}

impl From<String> for Goal {
    fn from(label: String) -> Self {
        Goal::from_label(&label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnergyEstimate {
    pub bmr: i32,
    pub tdee: i32,
    pub calories: i32,
}

/// Mifflin–St Jeor resting energy expenditure, rounded to whole kcal.
pub fn basal_metabolic_rate(weight: f64, height: f64, age: u32, gender: Gender) -> i32 {
    let base = 10.0 * weight + 6.25 * height - 5.0 * f64::from(age);
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Other => base - 161.0,
    };
    bmr.round() as i32
}

/// Computes BMR, TDEE and the goal-adjusted calorie target.
///
/// Total for every input: unrecognized enum labels have already been coerced
/// to their defaults at decode time. The calorie target is not floored, so a
/// very low TDEE combined with a cut goal can go negative; downstream portion
/// clamping absorbs that.
pub fn estimate_energy(
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
    activity: ActivityLevel,
    goal: Goal,
) -> EnergyEstimate {
    let bmr = basal_metabolic_rate(weight, height, age, gender);
    let tdee = (f64::from(bmr) * activity.multiplier()).round() as i32;
    let calories = tdee + goal.calorie_adjustment();
    EnergyEstimate { bmr, tdee, calories }
}
