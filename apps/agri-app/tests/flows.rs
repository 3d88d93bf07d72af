//! End-to-end flows through the Tauri commands over managed state.

use std::time::Duration;

use agri_app::commands::{crop, dashboard, navigation, soil, user};
use agri_app::error::ErrorCode;
use agri_app::state::{ConfigState, NavigationState};
use agri_app::AppState;
use agri_core::{
    AdminPage, FarmerPage, NavigationSnapshot, NewCrop, NewUser, PredictionInput, Role,
    SoilTypePatch, UserListKind, UserRole, UserStatus, View,
};
use agri_db::{Database, DbConfig};
use tauri::test::{mock_app, MockRuntime};
use tauri::{App, Manager};

async fn open_db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

async fn app_on(db: Database) -> App<MockRuntime> {
    let app = mock_app();
    AppState::load(ConfigState::default(), db)
        .await
        .register(app.handle());
    app
}

fn complete_input() -> PredictionInput {
    PredictionInput {
        crop_id: "1".to_string(),
        field_size: "5-10 acres".to_string(),
        soil_type_id: "3".to_string(),
        location: "Nashik".to_string(),
    }
}

async fn snapshot(app: &App<MockRuntime>) -> NavigationSnapshot {
    navigation::get_navigation(app.state()).await.unwrap()
}

/// Moves the paused clock and lets woken tasks run.
async fn advance(by: Duration) {
    tokio::time::advance(by).await;
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn test_add_barley_persists_across_restart() {
    let db = open_db().await;
    let app = app_on(db.clone()).await;

    let barley = crop::add_crop(
        app.state(),
        NewCrop {
            name: "Barley".to_string(),
            icon: "🌿".to_string(),
            category: "Cereals".to_string(),
        },
    )
    .await
    .unwrap();

    let crops = crop::list_crops(app.state()).await.unwrap();
    assert_eq!(crops.len(), 7);
    assert_eq!(crops[6], barley);
    assert_eq!(barley.name, "Barley");
    assert_eq!(crops.iter().filter(|c| c.id == barley.id).count(), 1);

    drop(app);
    let restarted = app_on(db).await;
    let reloaded = crop::list_crops(restarted.state()).await.unwrap();
    assert_eq!(reloaded, crops);
}

#[tokio::test]
async fn test_update_and_delete_by_id() {
    let app = app_on(open_db().await).await;

    let patch = SoilTypePatch {
        icon: Some("🏜️".to_string()),
        ..Default::default()
    };
    let updated = soil::update_soil_type(app.state(), "2".to_string(), patch)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Sandy Soil");
    assert_eq!(updated.icon, "🏜️");

    let patch = SoilTypePatch {
        name: Some("Peat".to_string()),
        ..Default::default()
    };
    let missing = soil::update_soil_type(app.state(), "nope".to_string(), patch)
        .await
        .unwrap();
    assert!(missing.is_none());

    assert!(soil::delete_soil_type(app.state(), "1".to_string()).await.unwrap());
    assert!(!soil::delete_soil_type(app.state(), "1".to_string()).await.unwrap());

    let names: Vec<String> = soil::list_soil_types(app.state())
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, ["Sandy Soil", "Loamy Soil", "Black Soil"]);
}

#[tokio::test]
async fn test_login_logout_resets_to_landing() {
    let app = app_on(open_db().await).await;
    assert_eq!(snapshot(&app).await.view, View::Login);

    let snap = navigation::login(app.state(), Role::Farmer).await.unwrap();
    assert_eq!(snap.view, View::Farmer(FarmerPage::Landing));

    navigation::start_prediction(app.state()).await.unwrap();
    let snap = navigation::open_help(app.state()).await.unwrap();
    assert_eq!(snap.view, View::Farmer(FarmerPage::Help));

    let snap = navigation::logout(app.state()).await.unwrap();
    assert_eq!(snap.view, View::Login);

    let snap = navigation::login(app.state(), Role::Farmer).await.unwrap();
    assert_eq!(snap.view, View::Farmer(FarmerPage::Landing));
}

#[tokio::test]
async fn test_admin_sidebar_navigation() {
    let app = app_on(open_db().await).await;
    let snap = navigation::login(app.state(), Role::SuperAdmin).await.unwrap();
    assert_eq!(snap.view, View::Admin(AdminPage::Dashboard));

    let snap = navigation::navigate_admin(app.state(), "weather-management".to_string())
        .await
        .unwrap();
    assert_eq!(snap.view, View::Admin(AdminPage::WeatherManagement));

    let err = navigation::navigate_admin(app.state(), "reports".to_string())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(
        snapshot(&app).await.view,
        View::Admin(AdminPage::WeatherManagement)
    );
}

#[tokio::test]
async fn test_empty_location_is_inert() {
    let app = app_on(open_db().await).await;
    navigation::login(app.state(), Role::Farmer).await.unwrap();
    navigation::start_prediction(app.state()).await.unwrap();

    let input = PredictionInput {
        location: String::new(),
        ..complete_input()
    };
    let err = navigation::submit_prediction(app.state(), input)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationError);

    let snap = snapshot(&app).await;
    assert_eq!(snap.view, View::Farmer(FarmerPage::Input));
    assert!(!snap.analysis_pending);
}

#[tokio::test]
async fn test_result_appears_only_after_delay() {
    let app = app_on(open_db().await).await;
    tokio::time::pause();

    navigation::login(app.state(), Role::Farmer).await.unwrap();
    navigation::start_prediction(app.state()).await.unwrap();

    let snap = navigation::submit_prediction(app.state(), complete_input())
        .await
        .unwrap();
    assert_eq!(snap.view, View::Farmer(FarmerPage::Loading));
    assert_eq!(
        snap.last_prediction.as_ref().map(|p| p.field_size.label()),
        Some("5-10 acres")
    );

    advance(Duration::from_millis(2_500)).await;
    assert_eq!(snapshot(&app).await.view, View::Farmer(FarmerPage::Loading));

    advance(Duration::from_millis(500)).await;
    assert!(app.state::<NavigationState>().wait_for_pending_analysis().await);
    let snap = snapshot(&app).await;
    assert_eq!(snap.view, View::Farmer(FarmerPage::Result));
    assert_eq!(
        snap.last_prediction.as_ref().map(|p| p.location.as_str()),
        Some("Nashik")
    );

    let snap = navigation::optimize(app.state()).await.unwrap();
    assert_eq!(snap.view, View::Farmer(FarmerPage::Dashboard));
}

#[tokio::test]
async fn test_going_home_cancels_analysis() {
    let app = app_on(open_db().await).await;
    tokio::time::pause();

    navigation::login(app.state(), Role::Farmer).await.unwrap();
    navigation::start_prediction(app.state()).await.unwrap();
    navigation::submit_prediction(app.state(), complete_input())
        .await
        .unwrap();

    let snap = navigation::go_home(app.state()).await.unwrap();
    assert_eq!(snap.view, View::Farmer(FarmerPage::Landing));

    advance(Duration::from_secs(10)).await;
    let snap = snapshot(&app).await;
    assert_eq!(snap.view, View::Farmer(FarmerPage::Landing));
    assert!(!snap.analysis_pending);
}

#[tokio::test]
async fn test_corrupt_storage_falls_back_to_seed() {
    let db = open_db().await;
    db.local_storage().set("crops", "{not json").await.unwrap();

    let app = app_on(db.clone()).await;
    assert_eq!(crop::list_crops(app.state()).await.unwrap().len(), 6);
    assert_eq!(
        db.local_storage().get("crops").await.unwrap().as_deref(),
        Some("{not json")
    );

    crop::delete_crop(app.state(), "6".to_string()).await.unwrap();
    let stored = db.local_storage().get("crops").await.unwrap().unwrap();
    let stored: Vec<serde_json::Value> = serde_json::from_str(&stored).unwrap();
    assert_eq!(stored.len(), 5);
}

#[tokio::test]
async fn test_dashboard_summary_is_derived() {
    let app = app_on(open_db().await).await;
    user::add_user(
        app.state(),
        NewUser {
            name: "Sunil Rao".to_string(),
            email: "sunil@example.com".to_string(),
            phone: "9000000001".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
        },
    )
    .await
    .unwrap();

    let summary = dashboard::get_dashboard_summary(app.state()).await.unwrap();
    assert_eq!(summary.crops, 6);
    assert_eq!(summary.users, 1);
    assert_eq!(summary.weather.average_temperature, Some(30.0));

    let admins = user::list_users_by_kind(app.state(), UserListKind::Admins, None)
        .await
        .unwrap();
    assert_eq!(admins.len(), 1);
}
