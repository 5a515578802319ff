use kostplan::catalog::{FoodRecord, FoodTag, FOOD_CATALOG};
use kostplan::plan::menu::{MEAL_SPLIT, MAX_PORTION_G, MIN_PORTION_G};
use kostplan::plan::{generate_plan_with, PlanResult, UserInput};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn decode_input(raw: &str) -> UserInput {
    serde_json::from_str(raw).expect("test input should decode")
}

fn base_input() -> UserInput {
    decode_input(
        r#"{
            "name": "Johan",
            "age": 30,
            "weight": 70.0,
            "height": 175.0,
            "gender": "male",
            "activity": "sedentary",
            "goal": "maintain"
        }"#,
    )
}

fn source_food(portion_name: &str) -> &'static FoodRecord {
    FOOD_CATALOG
        .iter()
        .find(|f| f.name == portion_name)
        .unwrap_or_else(|| panic!("portion '{}' has no catalog source", portion_name))
}

fn all_portion_sources(plan: &PlanResult) -> Vec<&'static FoodRecord> {
    plan.menu
        .values()
        .flatten()
        .map(|item| source_food(&item.name))
        .collect()
}

#[test]
fn sedentary_maintain_scenario_end_to_end() {
    let input = base_input();
    let plan = generate_plan_with(&input, &mut StdRng::seed_from_u64(0));
    // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75 -> 1649; 1649 * 1.2 = 1978.8 -> 1979
    assert_eq!(plan.bmr, 1649);
    assert_eq!(plan.tdee, 1979);
    assert_eq!(plan.calories, 1979);
    assert_eq!(plan.user, "Johan");
    assert_eq!(plan.target_weight, None);
}

#[test]
fn cut_goal_shifts_calories_and_macros_follow() {
    let mut input = base_input();
    input.goal = "cut".to_string().into();
    let plan = generate_plan_with(&input, &mut StdRng::seed_from_u64(0));
    assert_eq!(plan.tdee, 1979);
    assert_eq!(plan.calories, 1579);
    assert_eq!(plan.macros.protein_g, 140);
    assert_eq!(plan.macros.fat_g, 63);
    // (1579 - (140*4 + 63*9)) / 4 = (1579 - 1127) / 4 = 113
    assert_eq!(plan.macros.carbs_g, 113);
}

#[test]
fn unknown_activity_uses_the_sedentary_multiplier() {
    let sedentary = generate_plan_with(&base_input(), &mut StdRng::seed_from_u64(0));
    let input = decode_input(
        r#"{
            "name": "Johan",
            "age": 30,
            "weight": 70.0,
            "height": 175.0,
            "gender": "male",
            "activity": "weekend_warrior",
            "goal": "maintain"
        }"#,
    );
    let plan = generate_plan_with(&input, &mut StdRng::seed_from_u64(0));
    assert_eq!(plan.tdee, sedentary.tdee);
}

#[test]
fn every_portion_mass_stays_within_bounds() {
    for seed in 0..25u64 {
        let plan = generate_plan_with(&base_input(), &mut StdRng::seed_from_u64(seed));
        for item in plan.menu.values().flatten() {
            assert!(
                (MIN_PORTION_G..=MAX_PORTION_G).contains(&item.mass_g),
                "{} at {} g is out of bounds",
                item.name,
                item.mass_g
            );
        }
    }
}

#[test]
fn vegan_menus_never_contain_animal_derived_foods() {
    let mut input = base_input();
    input.diet = Some("vegan".to_string().into());
    for seed in 0..25u64 {
        let plan = generate_plan_with(&input, &mut StdRng::seed_from_u64(seed));
        for food in all_portion_sources(&plan) {
            assert!(
                !food.has_any_tag(&[FoodTag::Animal, FoodTag::Fish, FoodTag::Dairy, FoodTag::Egg]),
                "vegan menu picked {}",
                food.name
            );
        }
    }
}

#[test]
fn gluten_allergy_excludes_gluten_foods_from_every_meal() {
    let input = decode_input(
        r#"{
            "name": "Johan",
            "age": 30,
            "weight": 70.0,
            "height": 175.0,
            "gender": "male",
            "activity": "moderate",
            "goal": "bulk",
            "allergies": ["gluten"]
        }"#,
    );
    for seed in 0..25u64 {
        let plan = generate_plan_with(&input, &mut StdRng::seed_from_u64(seed));
        for food in all_portion_sources(&plan) {
            assert!(
                !food.has_tag(FoodTag::ContainsGluten),
                "gluten-free menu picked {}",
                food.name
            );
        }
    }
}

#[test]
fn menu_json_lists_meals_in_split_order() {
    let plan = generate_plan_with(&base_input(), &mut StdRng::seed_from_u64(2));
    assert_eq!(plan.menu.len(), MEAL_SPLIT.len());

    let json = serde_json::to_string(&plan).unwrap();
    let positions: Vec<usize> = ["\"frukost\"", "\"mellanmal_1\"", "\"lunch\"", "\"pre_workout_meal\"", "\"middag\""]
        .into_iter()
        .map(|key| json.find(key).unwrap_or_else(|| panic!("{} missing from plan JSON", key)))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "meal keys out of order in {}",
        json
    );
}

#[test]
fn plan_json_round_trips() {
    let plan = generate_plan_with(&base_input(), &mut StdRng::seed_from_u64(4));
    let json = serde_json::to_string(&plan).unwrap();
    let decoded: PlanResult = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, plan);
}

#[test]
fn target_weight_passes_through_untouched() {
    let input = decode_input(
        r#"{
            "name": "Johan",
            "age": 30,
            "weight": 70.0,
            "height": 175.0,
            "gender": "male",
            "activity": "sedentary",
            "goal": "cut",
            "targetWeight": 65
        }"#,
    );
    let plan = generate_plan_with(&input, &mut StdRng::seed_from_u64(0));
    assert_eq!(plan.target_weight, Some(65));
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["targetWeight"], 65);
}
