use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sex {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

/// Weekly workout frequency buckets offered by the questionnaire. The wire
/// values are the original option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkoutFrequency {
    #[serde(rename = "2")]
    TwoTimes,
    #[serde(rename = "3-5")]
    ThreeToFive,
    #[serde(rename = "6+")]
    SixPlus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Gain,
    Maintain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Obstacle {
    LackOfConsistency,
    BadEatingHabits,
    LackOfSupport,
    BusySchedule,
    LackOfMealInspiration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Achievement {
    EatHealthier,
    IncreaseEnergy,
    StayMotivated,
    FeelBetter,
}

impl Sex {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
            Sex::PreferNotToSay => "preferNotToSay",
        }
    }
}

impl WorkoutFrequency {
    pub fn i18n_key(self) -> &'static str {
        match self {
            WorkoutFrequency::TwoTimes => "twoTimes",
            WorkoutFrequency::ThreeToFive => "threeToFive",
            WorkoutFrequency::SixPlus => "sixPlus",
        }
    }
}

impl Goal {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Goal::Lose => "loseWeight",
            Goal::Gain => "gainWeight",
            Goal::Maintain => "maintainWeight",
        }
    }
}

impl Obstacle {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Obstacle::LackOfConsistency => "lackOfConsistency",
            Obstacle::BadEatingHabits => "badEatingHabits",
            Obstacle::LackOfSupport => "lackOfSupport",
            Obstacle::BusySchedule => "busySchedule",
            Obstacle::LackOfMealInspiration => "lackOfMealInspiration",
        }
    }
}

impl Achievement {
    pub fn i18n_key(self) -> &'static str {
        match self {
            Achievement::EatHealthier => "eatHealthier",
            Achievement::IncreaseEnergy => "increaseEnergy",
            Achievement::StayMotivated => "stayMotivated",
            Achievement::FeelBetter => "feelBetter",
        }
    }
}

/// Committed user record, produced exactly once by onboarding. Immutable
/// for the rest of the session. The questionnaire password is stored as an
/// argon2 PHC string, never as plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub birth_date: String,
    pub sex: Option<Sex>,
    pub workouts_per_week: WorkoutFrequency,
    pub goal: Goal,
    pub current_weight: f64,
    pub desired_weight: Option<f64>,
    pub obstacles: Vec<Obstacle>,
    pub achievements: Vec<Achievement>,
    pub language: Language,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_wire_values_match_questionnaire_options() {
        assert_eq!(
            serde_json::to_string(&WorkoutFrequency::ThreeToFive).expect("serialize"),
            "\"3-5\""
        );
        assert_eq!(
            serde_json::to_string(&WorkoutFrequency::SixPlus).expect("serialize"),
            "\"6+\""
        );
        assert_eq!(
            serde_json::to_string(&Sex::PreferNotToSay).expect("serialize"),
            "\"preferNotToSay\""
        );
        assert_eq!(serde_json::to_string(&Goal::Lose).expect("serialize"), "\"lose\"");
        assert_eq!(
            serde_json::to_string(&Obstacle::LackOfMealInspiration).expect("serialize"),
            "\"lackOfMealInspiration\""
        );
    }

    #[test]
    fn i18n_keys_resolve_in_the_pt_table() {
        use crate::i18n::{translate, Language};

        assert_eq!(translate(Language::Pt, Goal::Lose.i18n_key()), "Perder peso");
        assert_eq!(
            translate(Language::Pt, WorkoutFrequency::TwoTimes.i18n_key()),
            "2 vezes"
        );
        assert_eq!(
            translate(Language::Pt, Achievement::FeelBetter.i18n_key()),
            "Sentir-se melhor com o corpo"
        );
    }
}
