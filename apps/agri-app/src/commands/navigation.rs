//! # Navigation Commands
//!
//! Login, logout, the farmer flow buttons, the admin sidebar and the
//! display preferences.
//!
//! Every command that moves between pages returns a full
//! [`NavigationSnapshot`], so the renderer redraws from one payload.
//!
//! ## Farmer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  landing ──start_prediction──► input ──submit_prediction──► loading     │
//! │     ▲                            ▲                             │        │
//! │     │ go_back                    │ go_back               (3 s delay)    │
//! │     │                            │                             ▼        │
//! │   help ◄──open_help (any)      result ◄──go_back── dashboard            │
//! │                                  │                   ▲                  │
//! │  go_home (any) ──► landing       └──────optimize─────┘                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use agri_core::{AdminPage, Language, NavigationSnapshot, PredictionInput, Role};
use serde::Serialize;
use tauri::State;
use tracing::debug;
use ts_rs::TS;

use crate::error::ApiError;
use crate::state::NavigationState;

/// One entry of the admin sidebar.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SidebarEntry {
    pub slug: String,
    pub label: String,
}

/// One entry of the language selector.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: String,
    pub native_name: String,
}

#[tauri::command]
pub async fn get_navigation(
    nav: State<'_, NavigationState>,
) -> Result<NavigationSnapshot, ApiError> {
    debug!("get_navigation command");
    Ok(nav.snapshot().await)
}

// =============================================================================
// Session
// =============================================================================

/// Signs in with the selected role. There are no credentials.
#[tauri::command]
pub async fn login(
    nav: State<'_, NavigationState>,
    role: Role,
) -> Result<NavigationSnapshot, ApiError> {
    debug!(role = %role, "login command");
    nav.login(role).await?;
    Ok(nav.snapshot().await)
}

#[tauri::command]
pub async fn logout(nav: State<'_, NavigationState>) -> Result<NavigationSnapshot, ApiError> {
    debug!("logout command");
    nav.logout().await?;
    Ok(nav.snapshot().await)
}

// =============================================================================
// Farmer Flow
// =============================================================================

#[tauri::command]
pub async fn start_prediction(
    nav: State<'_, NavigationState>,
) -> Result<NavigationSnapshot, ApiError> {
    debug!("start_prediction command");
    nav.start_prediction().await?;
    Ok(nav.snapshot().await)
}

/// Submits the crop input form.
///
/// ## Returns
/// The loading page snapshot. The move to the result page happens on its
/// own after the analysis delay; poll [`get_navigation`] to observe it.
#[tauri::command]
pub async fn submit_prediction(
    nav: State<'_, NavigationState>,
    input: PredictionInput,
) -> Result<NavigationSnapshot, ApiError> {
    debug!(complete = input.is_complete(), "submit_prediction command");
    nav.submit_prediction(&input).await?;
    Ok(nav.snapshot().await)
}

#[tauri::command]
pub async fn optimize(nav: State<'_, NavigationState>) -> Result<NavigationSnapshot, ApiError> {
    debug!("optimize command");
    nav.optimize().await?;
    Ok(nav.snapshot().await)
}

#[tauri::command]
pub async fn go_back(nav: State<'_, NavigationState>) -> Result<NavigationSnapshot, ApiError> {
    debug!("go_back command");
    nav.back().await?;
    Ok(nav.snapshot().await)
}

#[tauri::command]
pub async fn go_home(nav: State<'_, NavigationState>) -> Result<NavigationSnapshot, ApiError> {
    debug!("go_home command");
    nav.home().await?;
    Ok(nav.snapshot().await)
}

#[tauri::command]
pub async fn open_help(nav: State<'_, NavigationState>) -> Result<NavigationSnapshot, ApiError> {
    debug!("open_help command");
    nav.help().await?;
    Ok(nav.snapshot().await)
}

// =============================================================================
// Admin Flow
// =============================================================================

#[tauri::command]
pub fn list_admin_pages() -> Vec<SidebarEntry> {
    AdminPage::ALL
        .iter()
        .map(|page| SidebarEntry {
            slug: page.slug().to_string(),
            label: page.label().to_string(),
        })
        .collect()
}

/// Opens an admin section by its sidebar slug.
#[tauri::command]
pub async fn navigate_admin(
    nav: State<'_, NavigationState>,
    slug: String,
) -> Result<NavigationSnapshot, ApiError> {
    debug!(slug = %slug, "navigate_admin command");
    let page: AdminPage = slug.parse()?;
    nav.navigate_admin(page).await?;
    Ok(nav.snapshot().await)
}

// =============================================================================
// Preferences
// =============================================================================

/// Flips dark mode and returns the new setting.
#[tauri::command]
pub async fn toggle_dark_mode(nav: State<'_, NavigationState>) -> Result<bool, ApiError> {
    debug!("toggle_dark_mode command");
    Ok(nav.toggle_dark_mode().await)
}

#[tauri::command]
pub fn list_languages() -> Vec<LanguageOption> {
    Language::ALL
        .iter()
        .map(|language| LanguageOption {
            code: language.code().to_string(),
            native_name: language.native_name().to_string(),
        })
        .collect()
}

#[tauri::command]
pub async fn set_language(
    nav: State<'_, NavigationState>,
    code: String,
) -> Result<NavigationSnapshot, ApiError> {
    debug!(code = %code, "set_language command");
    let language: Language = code.parse()?;
    nav.set_language(language).await;
    Ok(nav.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::error::ErrorCode;
    use agri_core::{FarmerPage, View};
    use tauri::Manager;

    #[tokio::test]
    async fn test_unknown_admin_slug() {
        let app = testing::app().await;
        login(app.state(), Role::SuperAdmin).await.unwrap();

        let err = navigate_admin(app.state(), "reports".to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let snapshot = navigate_admin(app.state(), "soil-types".to_string()).await.unwrap();
        assert_eq!(snapshot.view, View::Admin(AdminPage::SoilTypes));
    }

    #[tokio::test]
    async fn test_farmer_cannot_use_sidebar() {
        let app = testing::app().await;
        login(app.state(), Role::Farmer).await.unwrap();

        let err = navigate_admin(app.state(), "dashboard".to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn test_back_from_landing_rejected() {
        let app = testing::app().await;
        let err = go_back(app.state()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotSignedIn);

        login(app.state(), Role::Farmer).await.unwrap();
        let err = go_back(app.state()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NavigationError);

        let snapshot = open_help(app.state()).await.unwrap();
        assert_eq!(snapshot.view, View::Farmer(FarmerPage::Help));
        let snapshot = go_back(app.state()).await.unwrap();
        assert_eq!(snapshot.view, View::Farmer(FarmerPage::Landing));
    }

    #[tokio::test]
    async fn test_language_codes() {
        let app = testing::app().await;
        assert_eq!(list_languages().len(), 6);

        let snapshot = set_language(app.state(), "bn".to_string()).await.unwrap();
        assert_eq!(snapshot.language, Language::Bengali);

        let err = set_language(app.state(), "xx".to_string()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_sidebar_order() {
        let pages = list_admin_pages();
        assert_eq!(pages.len(), 10);
        assert_eq!(pages[0].slug, "dashboard");
        assert_eq!(pages[9].label, "Settings");
    }
}
