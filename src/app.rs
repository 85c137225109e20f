use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::dashboard::Dashboard;
use crate::i18n::{translate, Language};
use crate::onboarding::{OnboardingController, StepAdvance, StepRetreat};
use crate::profile::{FieldUpdate, UserProfile};
use crate::routes::Route;
use crate::store::{keys, KeyValueStore};

/// The screen currently owning the session's interaction state. Moving to
/// another screen drops the previous one's state: leaving onboarding
/// discards the draft, logging out discards the meal log.
pub enum Screen {
    LanguageSelect { selected: Option<Language> },
    Onboarding(OnboardingController),
    Testimonials,
    Dashboard(Dashboard),
}

/// One interactive session, constructed at startup and owning the store,
/// the active language and the current screen. Every UI event funnels
/// through here; events for another screen are ignored.
pub struct AppSession {
    config: AppConfig,
    store: Box<dyn KeyValueStore>,
    language: Language,
    screen: Screen,
}

impl AppSession {
    pub fn start(config: AppConfig, store: Box<dyn KeyValueStore>) -> Self {
        let language = match store.get(keys::LANGUAGE) {
            Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|| {
                warn!(code = %code, "unknown stored language code; falling back to pt");
                Language::Pt
            }),
            Ok(None) => Language::Pt,
            Err(e) => {
                warn!(error = %e, "language read failed; falling back to pt");
                Language::Pt
            }
        };

        info!(language = language.code(), "session started");
        Self {
            config,
            store,
            language,
            screen: Screen::LanguageSelect { selected: None },
        }
    }

    pub fn route(&self) -> Route {
        match self.screen {
            Screen::LanguageSelect { .. } => Route::LanguageSelect,
            Screen::Onboarding(_) => Route::Onboarding,
            Screen::Testimonials => Route::Testimonials,
            Screen::Dashboard(_) => Route::Dashboard,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translation shortcut bound to the session language.
    pub fn text<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    // --- splash -----------------------------------------------------------

    pub fn select_language(&mut self, language: Language) {
        match &mut self.screen {
            Screen::LanguageSelect { selected } => *selected = Some(language),
            _ => debug!("language selection ignored outside the splash screen"),
        }
    }

    pub fn selected_language(&self) -> Option<Language> {
        match self.screen {
            Screen::LanguageSelect { selected } => selected,
            _ => None,
        }
    }

    /// Continue button: persists the chosen language and enters onboarding.
    /// Without a selection the button is disabled, so this is a no-op.
    pub fn confirm_language(&mut self) -> anyhow::Result<()> {
        let Screen::LanguageSelect { selected: Some(language) } = self.screen else {
            debug!("confirm ignored: no language selected");
            return Ok(());
        };

        self.store
            .set(keys::LANGUAGE, language.code().to_string())?;
        self.language = language;
        self.screen = Screen::Onboarding(OnboardingController::new(language));
        info!(language = language.code(), "language confirmed, onboarding started");
        Ok(())
    }

    // --- onboarding -------------------------------------------------------

    pub fn onboarding(&self) -> Option<&OnboardingController> {
        match &self.screen {
            Screen::Onboarding(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn update_draft(&mut self, update: FieldUpdate) {
        match &mut self.screen {
            Screen::Onboarding(flow) => flow.apply(update),
            _ => debug!("draft update ignored outside onboarding"),
        }
    }

    /// Next button. On a step-6 commit the session moves to testimonials;
    /// the profile reaches the dashboard through the store only.
    pub fn advance_onboarding(&mut self) -> anyhow::Result<()> {
        let outcome = match &mut self.screen {
            Screen::Onboarding(flow) => flow.advance(self.store.as_mut())?,
            _ => {
                debug!("advance ignored outside onboarding");
                return Ok(());
            }
        };

        if let StepAdvance::Completed(_) = outcome {
            self.screen = Screen::Testimonials;
        }
        Ok(())
    }

    /// Back button; from step 1 this leaves onboarding for the splash.
    pub fn retreat_onboarding(&mut self) {
        let exited = match &mut self.screen {
            Screen::Onboarding(flow) => matches!(flow.retreat(), StepRetreat::Exit),
            _ => {
                debug!("retreat ignored outside onboarding");
                false
            }
        };

        if exited {
            self.screen = Screen::LanguageSelect { selected: None };
        }
    }

    // --- testimonials -----------------------------------------------------

    /// "Start now" on the testimonials screen: reads the committed profile
    /// back from the store and opens the dashboard.
    pub fn start_now(&mut self) {
        if !matches!(self.screen, Screen::Testimonials) {
            debug!("start_now ignored outside testimonials");
            return;
        }

        let profile = UserProfile::load(self.store.as_ref());
        if profile.is_none() {
            warn!("no stored profile; dashboard will run on defaults");
        }
        self.screen = Screen::Dashboard(Dashboard::new(
            profile,
            self.language,
            self.config.clone(),
        ));
        info!("dashboard opened");
    }

    // --- dashboard --------------------------------------------------------

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match &self.screen {
            Screen::Dashboard(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    pub fn dashboard_mut(&mut self) -> Option<&mut Dashboard> {
        match &mut self.screen {
            Screen::Dashboard(dashboard) => Some(dashboard),
            _ => None,
        }
    }

    /// Profile-tab logout: drops the dashboard session state (meals, water)
    /// and returns to the splash.
    pub fn logout(&mut self) {
        if !matches!(self.screen, Screen::Dashboard(_)) {
            debug!("logout ignored outside the dashboard");
            return;
        }
        info!("logout: dashboard session discarded");
        self.screen = Screen::LanguageSelect { selected: None };
    }
}
