use tracing::{debug, warn};

use crate::profile::types::UserProfile;
use crate::store::{keys, KeyValueStore};

impl UserProfile {
    /// Reads the committed profile back from the store. Absent or corrupt
    /// payloads yield `None`; the dashboard runs on defaults in that case.
    pub fn load(store: &dyn KeyValueStore) -> Option<UserProfile> {
        let raw = match store.get(keys::USER_PROFILE) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "profile read failed; continuing without profile");
                return None;
            }
        };

        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(profile) => {
                debug!(user = %profile.name, "profile loaded");
                Some(profile)
            }
            Err(e) => {
                warn!(error = %e, "stored profile is corrupt; continuing without profile");
                None
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> anyhow::Result<()> {
        let encoded = serde_json::to_string(self)?;
        store.set(keys::USER_PROFILE, encoded)?;
        debug!(user = %self.name, "profile saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::profile::draft::{FieldUpdate, OnboardingDraft};
    use crate::profile::types::{Achievement, Goal, Obstacle, WorkoutFrequency};
    use crate::store::MemoryStore;

    fn committed_profile() -> UserProfile {
        let mut draft = OnboardingDraft::default();
        draft.apply(FieldUpdate::Name("João Silva".to_string()));
        draft.apply(FieldUpdate::Email("joao@email.com".to_string()));
        draft.apply(FieldUpdate::Password("segredo123".to_string()));
        draft.apply(FieldUpdate::BirthDate("1990-04-12".to_string()));
        draft.apply(FieldUpdate::WorkoutsPerWeek(WorkoutFrequency::SixPlus));
        draft.apply(FieldUpdate::Goal(Goal::Maintain));
        draft.apply(FieldUpdate::CurrentWeight(82.5));
        draft.apply(FieldUpdate::ToggleObstacle(Obstacle::BadEatingHabits));
        draft.apply(FieldUpdate::ToggleAchievement(Achievement::FeelBetter));
        draft.commit(Language::En).expect("complete draft")
    }

    #[test]
    fn save_then_load_roundtrips() {
        let mut store = MemoryStore::new();
        let profile = committed_profile();
        profile.save(&mut store).expect("save should succeed");

        let loaded = UserProfile::load(&store).expect("profile should be present");
        assert_eq!(loaded.name, profile.name);
        assert_eq!(loaded.email, profile.email);
        assert_eq!(loaded.password_hash, profile.password_hash);
        assert_eq!(loaded.goal, Goal::Maintain);
        assert_eq!(loaded.current_weight, 82.5);
        assert_eq!(loaded.language, Language::En);
    }

    #[test]
    fn persisted_json_uses_original_field_names() {
        let mut store = MemoryStore::new();
        committed_profile().save(&mut store).expect("save");

        let raw = store
            .get(keys::USER_PROFILE)
            .expect("get")
            .expect("value present");
        assert!(raw.contains("\"workoutsPerWeek\":\"6+\""));
        assert!(raw.contains("\"currentWeight\":82.5"));
        assert!(raw.contains("\"birthDate\":\"1990-04-12\""));
        assert!(raw.contains("\"goal\":\"maintain\""));
    }

    #[test]
    fn missing_profile_loads_as_none() {
        let store = MemoryStore::new();
        assert!(UserProfile::load(&store).is_none());
    }

    #[test]
    fn corrupt_profile_loads_as_none() {
        let mut store = MemoryStore::new();
        store
            .set(keys::USER_PROFILE, "{not valid json".to_string())
            .expect("set");
        assert!(UserProfile::load(&store).is_none());
    }
}
