//! # Navigation
//!
//! Role selection and the two page flows, modelled as a state machine.
//!
//! ## Farmer Flow
//! ```text
//!            start_prediction      submit_prediction     complete_analysis
//!  ┌─────────┐ ──────────► ┌───────┐ ──────────► ┌─────────┐ ─────────► ┌────────┐
//!  │ Landing │             │ Input │             │ Loading │            │ Result │
//!  └─────────┘ ◄────────── └───────┘ ◄─────────┐ └─────────┘            └────────┘
//!       ▲          back                        │        back              │   ▲
//!       │                                      └──────────────────────────┘   │
//!       │ back                                            optimize │   back │
//!  ┌────┴───┐                                                      ▼        │
//!  │  Help  │ ◄── help (any page)                             ┌───────────┐ │
//!  └────────┘     home (any page) ──► Landing                 │ Dashboard │─┘
//!                                                             └───────────┘
//! ```
//!
//! The loading → result step is the only transition not triggered by the
//! user. Submitting hands out an [`AnalysisTicket`]; the host waits for the
//! analysis delay and then calls [`Navigator::complete_analysis`] with it.
//! Any other transition out of loading voids the ticket, so a late timer
//! can never move the user off a page they navigated to themselves.
//!
//! ## Admin Flow
//! Free navigation between the ten [`AdminPage`] sections; no ordering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Language, PredictionInput, PredictionRequest, UserRole};
use crate::validation::validate_prediction_input;

// =============================================================================
// Role
// =============================================================================

/// The session mode chosen on the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Farmer,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Farmer => "farmer",
            Role::SuperAdmin => "superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Farmer Pages
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum FarmerPage {
    #[default]
    Landing,
    Input,
    Loading,
    Result,
    Dashboard,
    Help,
}

impl FarmerPage {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarmerPage::Landing => "landing",
            FarmerPage::Input => "input",
            FarmerPage::Loading => "loading",
            FarmerPage::Result => "result",
            FarmerPage::Dashboard => "dashboard",
            FarmerPage::Help => "help",
        }
    }

    /// Where the page's back action leads. Landing and loading have none.
    pub fn back_target(&self) -> Option<FarmerPage> {
        match self {
            FarmerPage::Input => Some(FarmerPage::Landing),
            FarmerPage::Result => Some(FarmerPage::Input),
            FarmerPage::Dashboard => Some(FarmerPage::Result),
            FarmerPage::Help => Some(FarmerPage::Landing),
            FarmerPage::Landing | FarmerPage::Loading => None,
        }
    }
}

impl fmt::Display for FarmerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Admin Pages
// =============================================================================

/// A section in the admin sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum AdminPage {
    #[default]
    Dashboard,
    AdminUsers,
    FarmerUsers,
    CropCategories,
    Crops,
    Seasons,
    SoilTypes,
    WeatherManagement,
    FarmerHistory,
    Settings,
}

impl AdminPage {
    /// Sidebar order.
    pub const ALL: [AdminPage; 10] = [
        AdminPage::Dashboard,
        AdminPage::AdminUsers,
        AdminPage::FarmerUsers,
        AdminPage::CropCategories,
        AdminPage::Crops,
        AdminPage::Seasons,
        AdminPage::SoilTypes,
        AdminPage::WeatherManagement,
        AdminPage::FarmerHistory,
        AdminPage::Settings,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "dashboard",
            AdminPage::AdminUsers => "admin-users",
            AdminPage::FarmerUsers => "farmer-users",
            AdminPage::CropCategories => "crop-categories",
            AdminPage::Crops => "crops",
            AdminPage::Seasons => "seasons",
            AdminPage::SoilTypes => "soil-types",
            AdminPage::WeatherManagement => "weather-management",
            AdminPage::FarmerHistory => "farmer-history",
            AdminPage::Settings => "settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminPage::Dashboard => "Dashboard",
            AdminPage::AdminUsers => "Admin Users",
            AdminPage::FarmerUsers => "Farmer Users",
            AdminPage::CropCategories => "Crop Categories",
            AdminPage::Crops => "Crops",
            AdminPage::Seasons => "Seasons",
            AdminPage::SoilTypes => "Soil Types",
            AdminPage::WeatherManagement => "Weather Management",
            AdminPage::FarmerHistory => "Farmer History",
            AdminPage::Settings => "Settings",
        }
    }

    /// The screen rendered for this section.
    ///
    /// Several sections share one screen: the two user lists differ only by
    /// which accounts they show, and the four taxonomy sections are tabs of
    /// the crop management screen.
    pub fn screen(&self) -> AdminScreen {
        match self {
            AdminPage::Dashboard => AdminScreen::Dashboard,
            AdminPage::AdminUsers => AdminScreen::UserManagement {
                kind: UserListKind::Admins,
            },
            AdminPage::FarmerUsers => AdminScreen::UserManagement {
                kind: UserListKind::Farmers,
            },
            AdminPage::CropCategories => AdminScreen::CropManagement {
                tab: CropManagementTab::Categories,
            },
            AdminPage::Crops => AdminScreen::CropManagement {
                tab: CropManagementTab::Crops,
            },
            AdminPage::Seasons => AdminScreen::CropManagement {
                tab: CropManagementTab::Seasons,
            },
            AdminPage::SoilTypes => AdminScreen::CropManagement {
                tab: CropManagementTab::SoilTypes,
            },
            AdminPage::WeatherManagement => AdminScreen::WeatherManagement,
            AdminPage::FarmerHistory => AdminScreen::FarmerHistory,
            AdminPage::Settings => AdminScreen::Settings,
        }
    }
}

impl fmt::Display for AdminPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AdminPage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminPage::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| CoreError::UnknownPage(s.to_string()))
    }
}

/// Which accounts a user management screen lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserListKind {
    Admins,
    Farmers,
}

impl UserListKind {
    pub fn includes(&self, role: UserRole) -> bool {
        match self {
            UserListKind::Farmers => role == UserRole::Farmer,
            UserListKind::Admins => role != UserRole::Farmer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum CropManagementTab {
    Categories,
    Crops,
    Seasons,
    SoilTypes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "screen", rename_all = "kebab-case")]
pub enum AdminScreen {
    Dashboard,
    UserManagement { kind: UserListKind },
    CropManagement { tab: CropManagementTab },
    WeatherManagement,
    FarmerHistory,
    Settings,
}

// =============================================================================
// View
// =============================================================================

/// The single screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "flow", content = "page", rename_all = "lowercase")]
pub enum View {
    Login,
    Farmer(FarmerPage),
    Admin(AdminPage),
}

/// Handle for one scheduled loading → result transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisTicket(u64);

// =============================================================================
// Navigator
// =============================================================================

/// Owns every piece of navigation state for one session.
///
/// Page state is reset on logout; the display preferences are not.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    role: Option<Role>,
    farmer_page: FarmerPage,
    admin_page: AdminPage,
    last_prediction: Option<PredictionRequest>,
    pending: Option<AnalysisTicket>,
    generation: u64,
    dark_mode: bool,
    language: Language,
}

/// Everything the renderer needs to draw the current frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub view: View,
    pub role: Option<Role>,
    pub dark_mode: bool,
    pub language: Language,
    pub last_prediction: Option<PredictionRequest>,
    pub analysis_pending: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A signed-out navigator with the given display preferences.
    pub fn with_preferences(language: Language, dark_mode: bool) -> Self {
        Navigator {
            language,
            dark_mode,
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn view(&self) -> View {
        match self.role {
            None => View::Login,
            Some(Role::Farmer) => View::Farmer(self.farmer_page),
            Some(Role::SuperAdmin) => View::Admin(self.admin_page),
        }
    }

    pub fn farmer_page(&self) -> FarmerPage {
        self.farmer_page
    }

    pub fn admin_page(&self) -> AdminPage {
        self.admin_page
    }

    pub fn last_prediction(&self) -> Option<&PredictionRequest> {
        self.last_prediction.as_ref()
    }

    pub fn pending_analysis(&self) -> Option<AnalysisTicket> {
        self.pending
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            view: self.view(),
            role: self.role,
            dark_mode: self.dark_mode,
            language: self.language,
            last_prediction: self.last_prediction.clone(),
            analysis_pending: self.pending.is_some(),
        }
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Signs in with `role` and shows that role's first page.
    ///
    /// Any role is accepted; there are no credentials to check.
    pub fn login(&mut self, role: Role) -> CoreResult<View> {
        if let Some(current) = self.role {
            return Err(CoreError::AlreadySignedIn(current));
        }
        self.reset_pages();
        self.role = Some(role);
        Ok(self.view())
    }

    /// Signs out, discarding page state and any pending analysis.
    pub fn logout(&mut self) -> CoreResult<View> {
        if self.role.is_none() {
            return Err(CoreError::NotSignedIn);
        }
        self.role = None;
        self.reset_pages();
        Ok(self.view())
    }

    fn reset_pages(&mut self) {
        self.farmer_page = FarmerPage::Landing;
        self.admin_page = AdminPage::Dashboard;
        self.last_prediction = None;
        self.pending = None;
    }

    // -------------------------------------------------------------------------
    // Farmer Flow
    // -------------------------------------------------------------------------

    pub fn start_prediction(&mut self) -> CoreResult<View> {
        self.expect_farmer_page(FarmerPage::Landing, "start prediction")?;
        self.set_farmer_page(FarmerPage::Input);
        Ok(self.view())
    }

    /// Submits the input form and moves to the loading page.
    ///
    /// An incomplete form leaves the page unchanged and returns the
    /// validation error. On success the returned ticket must be passed to
    /// [`complete_analysis`](Self::complete_analysis) once the delay elapses.
    pub fn submit_prediction(&mut self, input: &PredictionInput) -> CoreResult<AnalysisTicket> {
        self.expect_farmer_page(FarmerPage::Input, "submit prediction")?;
        let request = validate_prediction_input(input)?;

        self.set_farmer_page(FarmerPage::Loading);
        self.generation += 1;
        let ticket = AnalysisTicket(self.generation);
        self.pending = Some(ticket);
        self.last_prediction = Some(request);
        Ok(ticket)
    }

    /// Finishes the analysis started with `ticket`.
    ///
    /// Returns `false` and changes nothing when the ticket is stale, which
    /// happens whenever the user left the loading page in the meantime.
    pub fn complete_analysis(&mut self, ticket: AnalysisTicket) -> bool {
        let live = self.pending == Some(ticket)
            && self.role == Some(Role::Farmer)
            && self.farmer_page == FarmerPage::Loading;
        if !live {
            return false;
        }
        self.pending = None;
        self.farmer_page = FarmerPage::Result;
        true
    }

    pub fn optimize(&mut self) -> CoreResult<View> {
        self.expect_farmer_page(FarmerPage::Result, "optimize")?;
        self.set_farmer_page(FarmerPage::Dashboard);
        Ok(self.view())
    }

    pub fn back(&mut self) -> CoreResult<View> {
        let current = self.current_farmer_page()?;
        let target = current
            .back_target()
            .ok_or_else(|| CoreError::invalid_transition(current.as_str(), "go back"))?;
        self.set_farmer_page(target);
        Ok(self.view())
    }

    /// Floating home action, available on every farmer page.
    pub fn home(&mut self) -> CoreResult<View> {
        self.current_farmer_page()?;
        self.set_farmer_page(FarmerPage::Landing);
        Ok(self.view())
    }

    /// Floating help action, available on every farmer page.
    pub fn help(&mut self) -> CoreResult<View> {
        self.current_farmer_page()?;
        self.set_farmer_page(FarmerPage::Help);
        Ok(self.view())
    }

    fn current_farmer_page(&self) -> CoreResult<FarmerPage> {
        match self.role {
            Some(Role::Farmer) => Ok(self.farmer_page),
            Some(current) => Err(CoreError::WrongRole {
                required: Role::Farmer,
                current,
            }),
            None => Err(CoreError::NotSignedIn),
        }
    }

    fn expect_farmer_page(&self, expected: FarmerPage, action: &str) -> CoreResult<()> {
        let current = self.current_farmer_page()?;
        if current != expected {
            return Err(CoreError::invalid_transition(current.as_str(), action));
        }
        Ok(())
    }

    fn set_farmer_page(&mut self, page: FarmerPage) {
        if self.farmer_page == FarmerPage::Loading && page != FarmerPage::Loading {
            self.pending = None;
        }
        self.farmer_page = page;
    }

    // -------------------------------------------------------------------------
    // Admin Flow
    // -------------------------------------------------------------------------

    pub fn navigate_admin(&mut self, page: AdminPage) -> CoreResult<View> {
        match self.role {
            Some(Role::SuperAdmin) => {
                self.admin_page = page;
                Ok(self.view())
            }
            Some(current) => Err(CoreError::WrongRole {
                required: Role::SuperAdmin,
                current,
            }),
            None => Err(CoreError::NotSignedIn),
        }
    }

    // -------------------------------------------------------------------------
    // Preferences
    // -------------------------------------------------------------------------

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
