use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Placeholder title for quick-logged entries until real estimation lands.
pub const DEFAULT_MEAL_NAME: &str = "Refeição";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// One logged food entry. Append-only: never edited or removed for the
/// rest of the session, and gone when the session ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    pub calories: u32,
    /// Wall-clock `HH:MM` at the moment the entry was logged.
    pub time: String,
}

impl Meal {
    /// Builds an entry stamped with the current local time. Falls back to
    /// UTC when the local offset cannot be determined.
    pub fn logged_now(meal_type: MealType, name: impl Into<String>, calories: u32) -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self {
            id: Uuid::new_v4(),
            meal_type,
            name: name.into(),
            calories,
            time: format!("{:02}:{:02}", now.hour(), now.minute()),
        }
    }
}
