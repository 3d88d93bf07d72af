//! # Navigation State
//!
//! Wraps the [`Navigator`] and owns the one timed transition: loading to
//! result after the analysis delay.
//!
//! ## Analysis Timer
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Loading → Result                                     │
//! │                                                                         │
//! │  submit_prediction ──► navigator.submit_prediction() ──► ticket #n      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  spawn: sleep(delay) ──► navigator.complete_analysis(#n)                │
//! │         │                        │                                      │
//! │         │                        ├── still loading #n ──► Result        │
//! │         │                        └── stale ───────────► ignored         │
//! │         ▼                                                               │
//! │  home / help / logout ──► ticket cleared ──► task aborted               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Aborting the task and the ticket check are independent: either alone
//! keeps a stale timer from moving the page.

use std::sync::Arc;
use std::time::Duration;

use agri_core::{
    AdminPage, CoreResult, Language, NavigationSnapshot, Navigator, PredictionInput, Role, View,
};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Session navigation plus the pending analysis task.
pub struct NavigationState {
    navigator: Arc<Mutex<Navigator>>,
    pending: Mutex<Option<JoinHandle<()>>>,
    analysis_delay: Duration,
}

impl NavigationState {
    pub fn new(navigator: Navigator, analysis_delay: Duration) -> Self {
        NavigationState {
            navigator: Arc::new(Mutex::new(navigator)),
            pending: Mutex::new(None),
            analysis_delay,
        }
    }

    pub async fn snapshot(&self) -> NavigationSnapshot {
        self.navigator.lock().await.snapshot()
    }

    pub async fn view(&self) -> View {
        self.navigator.lock().await.view()
    }

    /// Runs a navigator transition, then drops the analysis task if the
    /// transition left the loading page.
    async fn transition<R>(&self, f: impl FnOnce(&mut Navigator) -> R) -> R {
        let mut navigator = self.navigator.lock().await;
        let out = f(&mut navigator);

        if navigator.pending_analysis().is_none() {
            if let Some(handle) = self.pending.lock().await.take() {
                handle.abort();
                debug!("Pending analysis cancelled");
            }
        }
        out
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    pub async fn login(&self, role: Role) -> CoreResult<View> {
        let view = self.transition(|nav| nav.login(role)).await?;
        info!(role = role.as_str(), "Signed in");
        Ok(view)
    }

    pub async fn logout(&self) -> CoreResult<View> {
        let view = self.transition(|nav| nav.logout()).await?;
        info!("Signed out");
        Ok(view)
    }

    // -------------------------------------------------------------------------
    // Farmer Flow
    // -------------------------------------------------------------------------

    pub async fn start_prediction(&self) -> CoreResult<View> {
        self.transition(|nav| nav.start_prediction()).await
    }

    /// Submits the input form and schedules the move to the result page.
    ///
    /// Returns the loading view. An incomplete form changes nothing.
    pub async fn submit_prediction(&self, input: &PredictionInput) -> CoreResult<View> {
        let mut navigator = self.navigator.lock().await;
        let ticket = navigator.submit_prediction(input)?;
        let view = navigator.view();

        let shared = Arc::clone(&self.navigator);
        let delay = self.analysis_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if shared.lock().await.complete_analysis(ticket) {
                debug!(?ticket, "Analysis complete");
            }
        });

        // Still under the navigator lock: no transition can run between
        // scheduling and recording the task.
        if let Some(previous) = self.pending.lock().await.replace(handle) {
            previous.abort();
        }
        drop(navigator);

        debug!(?ticket, delay_ms = delay.as_millis() as u64, "Analysis scheduled");
        Ok(view)
    }

    pub async fn optimize(&self) -> CoreResult<View> {
        self.transition(|nav| nav.optimize()).await
    }

    pub async fn back(&self) -> CoreResult<View> {
        self.transition(|nav| nav.back()).await
    }

    pub async fn home(&self) -> CoreResult<View> {
        self.transition(|nav| nav.home()).await
    }

    pub async fn help(&self) -> CoreResult<View> {
        self.transition(|nav| nav.help()).await
    }

    /// Waits for the scheduled analysis, if any.
    ///
    /// Returns `true` when a task was pending and ran to completion.
    pub async fn wait_for_pending_analysis(&self) -> bool {
        let handle = self.pending.lock().await.take();
        match handle {
            Some(handle) => handle.await.is_ok(),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Admin Flow
    // -------------------------------------------------------------------------

    pub async fn navigate_admin(&self, page: AdminPage) -> CoreResult<View> {
        self.transition(|nav| nav.navigate_admin(page)).await
    }

    // -------------------------------------------------------------------------
    // Preferences
    // -------------------------------------------------------------------------

    pub async fn toggle_dark_mode(&self) -> bool {
        self.navigator.lock().await.toggle_dark_mode()
    }

    pub async fn set_language(&self, language: Language) {
        self.navigator.lock().await.set_language(language);
    }
}

impl Drop for NavigationState {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::{AdminScreen, FarmerPage};

    const DELAY: Duration = Duration::from_millis(3_000);

    fn state() -> NavigationState {
        NavigationState::new(Navigator::new(), DELAY)
    }

    fn input() -> PredictionInput {
        PredictionInput {
            crop_id: "1".to_string(),
            field_size: "5-10 acres".to_string(),
            soil_type_id: "3".to_string(),
            location: "Pune".to_string(),
        }
    }

    async fn at_input(nav: &NavigationState) {
        nav.login(Role::Farmer).await.unwrap();
        nav.start_prediction().await.unwrap();
    }

    /// Moves the paused clock and lets woken tasks run.
    async fn advance(by: Duration) {
        tokio::time::advance(by).await;
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_only_after_delay() {
        let nav = state();
        at_input(&nav).await;

        let view = nav.submit_prediction(&input()).await.unwrap();
        assert_eq!(view, View::Farmer(FarmerPage::Loading));

        advance(Duration::from_millis(2_999)).await;
        assert_eq!(nav.view().await, View::Farmer(FarmerPage::Loading));

        advance(Duration::from_millis(1)).await;
        assert!(nav.wait_for_pending_analysis().await);
        assert_eq!(nav.view().await, View::Farmer(FarmerPage::Result));
        assert!(!nav.snapshot().await.analysis_pending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_loading_cancels_timer() {
        let nav = state();
        at_input(&nav).await;
        nav.submit_prediction(&input()).await.unwrap();

        nav.help().await.unwrap();
        assert!(!nav.wait_for_pending_analysis().await);

        advance(DELAY * 2).await;
        assert_eq!(nav.view().await, View::Farmer(FarmerPage::Help));
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_during_loading_resets() {
        let nav = state();
        at_input(&nav).await;
        nav.submit_prediction(&input()).await.unwrap();

        assert_eq!(nav.logout().await.unwrap(), View::Login);
        advance(DELAY).await;

        assert_eq!(
            nav.login(Role::Farmer).await.unwrap(),
            View::Farmer(FarmerPage::Landing)
        );
        advance(DELAY).await;
        assert_eq!(nav.view().await, View::Farmer(FarmerPage::Landing));
    }

    #[tokio::test(start_paused = true)]
    async fn test_incomplete_input_is_inert() {
        let nav = state();
        at_input(&nav).await;

        let incomplete = PredictionInput {
            location: "   ".to_string(),
            ..input()
        };
        assert!(nav.submit_prediction(&incomplete).await.is_err());
        assert_eq!(nav.view().await, View::Farmer(FarmerPage::Input));
        assert!(!nav.wait_for_pending_analysis().await);
    }

    #[tokio::test]
    async fn test_admin_navigation_and_preferences() {
        let nav = state();
        nav.login(Role::SuperAdmin).await.unwrap();

        let view = nav.navigate_admin(AdminPage::FarmerUsers).await.unwrap();
        assert_eq!(view, View::Admin(AdminPage::FarmerUsers));
        assert!(matches!(
            AdminPage::FarmerUsers.screen(),
            AdminScreen::UserManagement { .. }
        ));

        assert!(nav.toggle_dark_mode().await);
        nav.set_language(Language::Tamil).await;
        nav.logout().await.unwrap();

        let snapshot = nav.snapshot().await;
        assert!(snapshot.dark_mode);
        assert_eq!(snapshot.language, Language::Tamil);
    }
}
