use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// One recipe pinned to one (date, meal slot) within a plan. The same recipe
/// may appear on several dates; a slot holds at most one recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMeal {
    pub recipe_id: String,
    pub date: Date,
    pub meal_type: MealType,
}
