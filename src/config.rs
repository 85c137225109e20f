use serde::Deserialize;

/// Tunables for the dashboard stubs. Everything is optional in the
/// environment; the defaults are the shipped product values.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Daily calorie target used when no profile is available.
    pub default_calorie_goal: u32,
    /// Calories recorded for a quick-logged meal until real estimation lands.
    pub stub_meal_calories: u32,
    /// Milliliters added per tap of the water button.
    pub water_step_ml: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            default_calorie_goal: std::env::var("DEFAULT_CALORIE_GOAL")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(2000),
            stub_meal_calories: std::env::var("STUB_MEAL_CALORIES")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(300),
            water_step_ml: std::env::var("WATER_STEP_ML")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(250),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_calorie_goal: 2000,
            stub_meal_calories: 300,
            water_step_ml: 250,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_values() {
        let config = AppConfig::default();
        assert_eq!(config.default_calorie_goal, 2000);
        assert_eq!(config.stub_meal_calories, 300);
        assert_eq!(config.water_step_ml, 250);
    }
}
