//! Macronutrient allocation and meal distribution
//!
//! Splits a daily calorie target into protein, fat and carbohydrate grams,
//! then spreads the day across five fixed meal slots. Protein is dosed per
//! kilogram of lean mass when composition is known, otherwise per kilogram
//! of body weight; fat gets a fixed per-kilogram allowance; carbohydrate
//! absorbs whatever energy remains.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::normalize::decimal_from_f64;
use crate::patient::Goal;
use crate::preferences::NutritionPreferences;

// ============================================================================
// Constants
// ============================================================================

/// Atwater energy factors (kcal per gram)
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARB_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Minimum daily fat in grams; only binds at implausibly low body weights
const MIN_FAT_G: f64 = 0.8;

// ============================================================================
// Macro Allocation
// ============================================================================

/// Working macro split in grams, full f64 precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

impl MacroSplit {
    /// Total energy content of the split
    pub fn total_kcal(&self) -> f64 {
        self.protein_g * PROTEIN_KCAL_PER_G
            + self.carbs_g * CARB_KCAL_PER_G
            + self.fat_g * FAT_KCAL_PER_G
    }

    /// Rounded, serializable form of the split
    pub fn to_targets(&self) -> Option<MacroTargets> {
        Some(MacroTargets {
            protein_g: decimal_from_f64(self.protein_g, 2)?,
            carbs_g: decimal_from_f64(self.carbs_g, 2)?,
            fat_g: decimal_from_f64(self.fat_g, 2)?,
        })
    }
}

/// Daily macro targets in grams, rounded for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// Allocate a calorie target across protein, fat and carbohydrate
///
/// Protein is dosed against lean mass when available, body weight otherwise.
/// Fat is a per-kilogram allowance of body weight. Carbohydrate takes the
/// remaining energy and never goes negative: when protein and fat alone
/// exceed the target the plan simply runs over.
pub fn allocate_macros(
    target_kcal: f64,
    weight_kg: f64,
    lean_mass_kg: Option<f64>,
    goal: Goal,
    preferences: &NutritionPreferences,
) -> MacroSplit {
    let effective_mass = lean_mass_kg.unwrap_or(weight_kg);
    let protein_g = effective_mass * preferences.protein_per_kg(goal);
    let fat_g = (weight_kg * preferences.fat_per_kg).max(MIN_FAT_G);
    let remaining_kcal =
        target_kcal - protein_g * PROTEIN_KCAL_PER_G - fat_g * FAT_KCAL_PER_G;
    let carbs_g = (remaining_kcal / CARB_KCAL_PER_G).max(0.0);
    MacroSplit {
        protein_g,
        carbs_g,
        fat_g,
    }
}

// ============================================================================
// Meal Slots
// ============================================================================

/// The five daily meal slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
}

impl MealSlot {
    /// Every slot in day order
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::MorningSnack,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
    ];

    /// Share of the daily total assigned to this slot
    pub fn ratio(&self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::MorningSnack => 0.10,
            MealSlot::Lunch => 0.30,
            MealSlot::AfternoonSnack => 0.15,
            MealSlot::Dinner => 0.20,
        }
    }

    /// Human-readable slot name
    pub fn description(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MorningSnack => "Morning snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

/// One meal's share of the day, rounded for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealAllocation {
    pub slot: MealSlot,
    pub calories_kcal: Decimal,
    pub protein_g: Decimal,
    pub carbs_g: Decimal,
    pub fat_g: Decimal,
}

/// The full day of meals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlan {
    pub meals: Vec<MealAllocation>,
}

/// Spread a calorie target and macro split across the five meal slots
pub fn distribute_meals(target_kcal: f64, split: &MacroSplit) -> Option<MealPlan> {
    let meals = MealSlot::ALL
        .iter()
        .map(|slot| {
            let ratio = slot.ratio();
            Some(MealAllocation {
                slot: *slot,
                calories_kcal: decimal_from_f64(target_kcal * ratio, 2)?,
                protein_g: decimal_from_f64(split.protein_g * ratio, 2)?,
                carbs_g: decimal_from_f64(split.carbs_g * ratio, 2)?,
                fat_g: decimal_from_f64(split.fat_g * ratio, 2)?,
            })
        })
        .collect::<Option<Vec<_>>>()?;
    Some(MealPlan { meals })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::prelude::ToPrimitive;

    fn defaults() -> NutritionPreferences {
        NutritionPreferences::default()
    }

    // =========================================================================
    // Macro Allocation
    // =========================================================================

    #[test]
    fn test_allocate_default_maintain() {
        let split = allocate_macros(2200.0, 70.0, None, Goal::Maintain, &defaults());
        assert!((split.protein_g - 126.0).abs() < 1e-9);
        assert!((split.fat_g - 63.0).abs() < 1e-9);
        assert!((split.carbs_g - 282.25).abs() < 1e-9);
        assert!((split.total_kcal() - 2200.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocate_prefers_lean_mass_for_protein() {
        let split = allocate_macros(2200.0, 70.0, Some(56.0), Goal::Maintain, &defaults());
        assert!((split.protein_g - 100.8).abs() < 1e-9);
        // Fat still follows total body weight
        assert!((split.fat_g - 63.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocate_gain_raises_protein_dose() {
        let split = allocate_macros(2200.0, 70.0, None, Goal::Gain, &defaults());
        assert!((split.protein_g - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocate_carbs_never_negative() {
        // Protein and fat alone already exceed this target
        let split = allocate_macros(900.0, 150.0, None, Goal::Maintain, &defaults());
        assert_eq!(split.carbs_g, 0.0);
        assert!(split.total_kcal() > 900.0);
    }

    #[test]
    fn test_split_to_targets_rounds_to_grams() {
        let split = MacroSplit {
            protein_g: 126.004,
            carbs_g: 282.256,
            fat_g: 63.0,
        };
        let targets = split.to_targets().unwrap();
        assert_eq!(targets.protein_g.to_string(), "126.00");
        assert_eq!(targets.carbs_g.to_string(), "282.26");
        assert_eq!(targets.fat_g.to_string(), "63.00");
    }

    // =========================================================================
    // Meal Distribution
    // =========================================================================

    #[test]
    fn test_slot_ratios_cover_the_day() {
        let total: f64 = MealSlot::ALL.iter().map(|slot| slot.ratio()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribute_meals_shares() {
        let split = MacroSplit {
            protein_g: 126.0,
            carbs_g: 282.25,
            fat_g: 63.0,
        };
        let plan = distribute_meals(2200.0, &split).unwrap();
        assert_eq!(plan.meals.len(), 5);

        let breakfast = &plan.meals[0];
        assert_eq!(breakfast.slot, MealSlot::Breakfast);
        assert_eq!(breakfast.calories_kcal.to_string(), "550.00");
        assert_eq!(breakfast.protein_g.to_string(), "31.50");

        let lunch = &plan.meals[2];
        assert_eq!(lunch.slot, MealSlot::Lunch);
        assert_eq!(lunch.calories_kcal.to_string(), "660.00");
    }

    #[test]
    fn test_distribute_meals_calories_sum_to_target() {
        let split = allocate_macros(1847.0, 63.2, None, Goal::Lose, &defaults());
        let plan = distribute_meals(1847.0, &split).unwrap();
        let total: f64 = plan
            .meals
            .iter()
            .map(|meal| meal.calories_kcal.to_f64().unwrap())
            .sum();
        // Five half-cent roundings at most
        assert!((total - 1847.0).abs() < 0.05);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: when carbohydrate is not floored the split spends the
        /// target exactly; the floor only ever pushes the total over
        #[test]
        fn prop_energy_budget_conserved(
            target in 900.0f64..5000.0,
            weight in 30.0f64..200.0
        ) {
            let split = allocate_macros(target, weight, None, Goal::Maintain, &defaults());
            if split.carbs_g > 0.0 {
                prop_assert!((split.total_kcal() - target).abs() < 1e-6);
            } else {
                prop_assert!(split.total_kcal() >= target - 1e-6);
            }
        }

        /// Property: every macro is non-negative
        #[test]
        fn prop_macros_non_negative(
            target in 900.0f64..5000.0,
            weight in 30.0f64..200.0,
            lean in 20.0f64..150.0
        ) {
            for lean_mass in [None, Some(lean)] {
                let split = allocate_macros(target, weight, lean_mass, Goal::Gain, &defaults());
                prop_assert!(split.protein_g >= 0.0);
                prop_assert!(split.carbs_g >= 0.0);
                prop_assert!(split.fat_g >= MIN_FAT_G);
            }
        }

        /// Property: meal calories re-assemble the daily target
        #[test]
        fn prop_meal_calories_conserved(
            target in 900.0f64..5000.0,
            weight in 30.0f64..200.0
        ) {
            let split = allocate_macros(target, weight, None, Goal::Maintain, &defaults());
            let plan = distribute_meals(target, &split).unwrap();
            let total: f64 = plan
                .meals
                .iter()
                .map(|meal| meal.calories_kcal.to_f64().unwrap())
                .sum();
            prop_assert!((total - target).abs() < 0.05);
        }
    }
}
