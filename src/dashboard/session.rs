use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::AppConfig;
use crate::dashboard::meals::{Meal, MealType, DEFAULT_MEAL_NAME};
use crate::dashboard::metrics;
use crate::i18n::{translate, Language};
use crate::profile::UserProfile;

/// Bottom-navigation tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Meals,
    Workouts,
    Progress,
    Profile,
}

/// Per-session dashboard state. The profile is read-only here; meals and
/// water live only as long as the session and are intentionally never
/// persisted.
#[derive(Debug)]
pub struct Dashboard {
    profile: Option<UserProfile>,
    meals: Vec<Meal>,
    water_intake_ml: u32,
    current_tab: Tab,
    language: Language,
    config: AppConfig,
}

impl Dashboard {
    pub fn new(profile: Option<UserProfile>, language: Language, config: AppConfig) -> Self {
        Self {
            profile,
            meals: Vec::new(),
            water_intake_ml: 0,
            current_tab: Tab::default(),
            language,
            config,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Greeting/profile-card name; the translated placeholder when the
    /// profile is missing.
    pub fn display_name(&self) -> &str {
        match &self.profile {
            Some(profile) => &profile.name,
            None => translate(self.language, "defaultUser"),
        }
    }

    pub fn daily_calorie_goal(&self) -> u32 {
        metrics::daily_calorie_goal(self.profile.as_ref(), self.config.default_calorie_goal)
    }

    pub fn consumed_calories(&self) -> u32 {
        metrics::consumed_calories(&self.meals)
    }

    pub fn remaining_calories(&self) -> i64 {
        metrics::remaining_calories(self.daily_calorie_goal(), self.consumed_calories())
    }

    pub fn calorie_progress_percent(&self) -> f64 {
        metrics::calorie_progress_percent(self.consumed_calories(), self.daily_calorie_goal())
    }

    /// Logs a stub entry for the given meal slot and returns it.
    pub fn add_meal(&mut self, meal_type: MealType) -> &Meal {
        let meal = Meal::logged_now(
            meal_type,
            DEFAULT_MEAL_NAME,
            self.config.stub_meal_calories,
        );
        info!(meal_id = %meal.id, meal_type = ?meal_type, calories = meal.calories, "meal logged");
        self.meals.push(meal);
        self.meals.last().expect("meal was just pushed")
    }

    /// Camera-button placeholder: logs a snack with the stub calorie value.
    /// Real photo estimation is a separate service, not wired up yet.
    pub fn scan_meal(&mut self) -> &Meal {
        self.add_meal(MealType::Snack)
    }

    pub fn add_water(&mut self) -> u32 {
        self.water_intake_ml += self.config.water_step_ml;
        info!(water_ml = self.water_intake_ml, "water logged");
        self.water_intake_ml
    }

    pub fn water_intake_ml(&self) -> u32 {
        self.water_intake_ml
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn current_tab(&self) -> Tab {
        self.current_tab
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// The home-screen "recent" card: last three entries, newest first.
    pub fn recent_meals(&self) -> Vec<&Meal> {
        self.meals.iter().rev().take(3).collect()
    }

    /// Meals-tab grouping: entries of one slot, in logging order.
    pub fn meals_of(&self, meal_type: MealType) -> Vec<&Meal> {
        self.meals
            .iter()
            .filter(|meal| meal.meal_type == meal_type)
            .collect()
    }
}
