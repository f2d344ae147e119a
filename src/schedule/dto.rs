use serde::Deserialize;
use time::Date;

use super::repo_types::MealType;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMealRequest {
    pub recipe_id: String,
    pub date: Date,
    pub meal_type: MealType,
}
