mod meals;
mod metrics;
mod session;

pub use meals::{Meal, MealType, DEFAULT_MEAL_NAME};
pub use metrics::{
    calorie_progress_percent, consumed_calories, daily_calorie_goal, remaining_calories,
};
pub use session::{Dashboard, Tab};
