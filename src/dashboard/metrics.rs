use crate::dashboard::meals::Meal;
use crate::profile::{Goal, UserProfile};

/// Multiplier applied to body weight (kg) for the maintenance baseline.
const CALORIES_PER_KG: f64 = 30.0;

/// Daily target from weight and fitness goal: `weight * 30`, scaled by
/// 0.8 / 1.2 for lose / gain, rounded to the nearest kcal. Without a
/// profile the configured fallback applies.
pub fn daily_calorie_goal(profile: Option<&UserProfile>, fallback: u32) -> u32 {
    let Some(profile) = profile else {
        return fallback;
    };

    let base = profile.current_weight * CALORIES_PER_KG;
    let scaled = match profile.goal {
        Goal::Lose => base * 0.8,
        Goal::Gain => base * 1.2,
        Goal::Maintain => base,
    };
    scaled.round() as u32
}

pub fn consumed_calories(meals: &[Meal]) -> u32 {
    meals.iter().map(|meal| meal.calories).sum()
}

/// Goal minus consumed; negative once the goal is exceeded, by design.
pub fn remaining_calories(goal: u32, consumed: u32) -> i64 {
    i64::from(goal) - i64::from(consumed)
}

/// Share of the daily goal already eaten, capped at 100 for the progress
/// ring. Never negative since consumption cannot be.
pub fn calorie_progress_percent(consumed: u32, goal: u32) -> f64 {
    if goal == 0 {
        return if consumed == 0 { 0.0 } else { 100.0 };
    }
    ((f64::from(consumed) / f64::from(goal)) * 100.0).min(100.0)
}
