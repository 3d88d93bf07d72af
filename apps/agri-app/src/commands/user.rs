//! # User Commands
//!
//! Backs both user management screens. The admin-users and farmer-users
//! sections render the same screen with a different [`UserListKind`].

use agri_core::validation::{validate_new_user, validate_search_query, validate_user_patch};
use agri_core::{NewUser, User, UserListKind, UserPatch};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DataState;

#[tauri::command]
pub async fn list_users(data: State<'_, DataState>) -> Result<Vec<User>, ApiError> {
    debug!("list_users command");
    Ok(data.users().await)
}

/// Users matching `query` by name, email or phone.
#[tauri::command]
pub async fn search_users(
    data: State<'_, DataState>,
    query: String,
) -> Result<Vec<User>, ApiError> {
    let query = validate_search_query(&query)?;
    debug!(query = %query, "search_users command");
    Ok(data.search_users(&query).await)
}

/// Users listed on one management screen, optionally filtered by `query`.
#[tauri::command]
pub async fn list_users_by_kind(
    data: State<'_, DataState>,
    kind: UserListKind,
    query: Option<String>,
) -> Result<Vec<User>, ApiError> {
    let query = validate_search_query(query.as_deref().unwrap_or_default())?;
    debug!(?kind, query = %query, "list_users_by_kind command");
    Ok(data.users_by_kind(kind, &query).await)
}

/// Creates a user. The creation timestamp is assigned here and never
/// changes afterwards.
#[tauri::command]
pub async fn add_user(data: State<'_, DataState>, draft: NewUser) -> Result<User, ApiError> {
    debug!(name = %draft.name, role = %draft.role, "add_user command");
    validate_new_user(&draft)?;
    Ok(data.add_user(draft).await?)
}

#[tauri::command]
pub async fn update_user(
    data: State<'_, DataState>,
    id: String,
    patch: UserPatch,
) -> Result<Option<User>, ApiError> {
    debug!(id = %id, "update_user command");
    validate_user_patch(&patch)?;
    Ok(data.update_user(&id, patch).await?)
}

#[tauri::command]
pub async fn delete_user(data: State<'_, DataState>, id: String) -> Result<bool, ApiError> {
    debug!(id = %id, "delete_user command");
    Ok(data.delete_user(&id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing;
    use crate::error::ErrorCode;
    use agri_core::{UserRole, UserStatus};
    use tauri::Manager;

    #[tokio::test]
    async fn test_user_lifecycle() {
        let app = testing::app().await;
        let draft = NewUser {
            name: "Meena Patil".to_string(),
            email: "meena@example.com".to_string(),
            phone: "9822012345".to_string(),
            role: UserRole::Farmer,
            status: UserStatus::Active,
        };

        let bad = NewUser {
            email: "meena.example.com".to_string(),
            ..draft.clone()
        };
        let err = add_user(app.state(), bad).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let user = add_user(app.state(), draft).await.unwrap();
        let patch = UserPatch {
            status: Some(UserStatus::Inactive),
            ..Default::default()
        };
        let updated = update_user(app.state(), user.id.clone(), patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, UserStatus::Inactive);
        assert_eq!(updated.created_at, user.created_at);

        let farmers = list_users_by_kind(
            app.state(),
            UserListKind::Farmers,
            Some("9822".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(farmers.len(), 1);
        assert!(list_users_by_kind(app.state(), UserListKind::Admins, None)
            .await
            .unwrap()
            .is_empty());

        assert!(delete_user(app.state(), user.id).await.unwrap());
        assert!(list_users(app.state()).await.unwrap().is_empty());
    }
}
