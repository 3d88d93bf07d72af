//! Summaries shown on the admin dashboard and weather screen.
//!
//! Everything here is computed from the current collections on demand;
//! nothing is cached or stored.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Crop, SoilType, User, UserRole, UserStatus, WeatherRecord};

/// Number of crops carrying a category label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Crop counts per category, in order of first appearance.
pub fn category_counts(crops: &[Crop]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for crop in crops {
        match counts.iter_mut().find(|c| c.category == crop.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: crop.category.clone(),
                count: 1,
            }),
        }
    }
    counts
}

/// Crops in `category` (exact label match).
pub fn crops_in_category(crops: &[Crop], category: &str) -> usize {
    crops.iter().filter(|crop| crop.category == category).count()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSummary {
    pub records: usize,
    /// `None` when there are no records.
    pub average_temperature: Option<f64>,
    pub average_humidity: Option<f64>,
    pub total_rainfall: f64,
}

impl WeatherSummary {
    pub fn from_records(records: &[WeatherRecord]) -> Self {
        let average = |value: fn(&WeatherRecord) -> f64| {
            if records.is_empty() {
                None
            } else {
                Some(records.iter().map(value).sum::<f64>() / records.len() as f64)
            }
        };

        WeatherSummary {
            records: records.len(),
            average_temperature: average(|r| r.temperature),
            average_humidity: average(|r| r.humidity),
            total_rainfall: records.iter().map(|r| r.rainfall).sum(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoleCount {
    pub role: UserRole,
    pub count: usize,
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub crops: usize,
    pub soil_types: usize,
    pub weather_records: usize,
    pub users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
    /// One entry per [`UserRole`], including roles with no users.
    pub users_by_role: Vec<RoleCount>,
    pub categories: Vec<CategoryCount>,
    pub weather: WeatherSummary,
}

impl DashboardSummary {
    pub fn compute(
        crops: &[Crop],
        soil_types: &[SoilType],
        weather: &[WeatherRecord],
        users: &[User],
    ) -> Self {
        let active_users = users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count();

        DashboardSummary {
            crops: crops.len(),
            soil_types: soil_types.len(),
            weather_records: weather.len(),
            users: users.len(),
            active_users,
            inactive_users: users.len() - active_users,
            users_by_role: UserRole::ALL
                .into_iter()
                .map(|role| RoleCount {
                    role,
                    count: users.iter().filter(|u| u.role == role).count(),
                })
                .collect(),
            categories: category_counts(crops),
            weather: WeatherSummary::from_records(weather),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Record;
    use crate::seed;
    use crate::types::NewUser;

    fn user(id: &str, role: UserRole, status: UserStatus) -> User {
        User::from_draft(
            id.to_string(),
            NewUser {
                name: format!("user {id}"),
                email: format!("{id}@example.com"),
                phone: "000".to_string(),
                role,
                status,
            },
        )
    }

    #[test]
    fn test_category_counts_keep_first_appearance_order() {
        let counts = category_counts(&seed::default_crops());
        let expected = [("Cereals", 3), ("Fiber", 1), ("Sugar", 1), ("Vegetables", 1)];

        assert_eq!(counts.len(), expected.len());
        for (count, (category, n)) in counts.iter().zip(expected) {
            assert_eq!(count.category, category);
            assert_eq!(count.count, n);
        }
        assert_eq!(crops_in_category(&seed::default_crops(), "Pulses"), 0);
    }

    #[test]
    fn test_weather_summary_from_seed() {
        let summary = WeatherSummary::from_records(&seed::default_weather());

        assert_eq!(summary.records, 2);
        assert_eq!(summary.average_temperature, Some(30.0));
        assert_eq!(summary.average_humidity, Some(55.0));
        assert_eq!(summary.total_rainfall, 200.0);
    }

    #[test]
    fn test_weather_summary_empty() {
        let summary = WeatherSummary::from_records(&[]);
        assert_eq!(summary.average_temperature, None);
        assert_eq!(summary.total_rainfall, 0.0);
    }

    #[test]
    fn test_dashboard_user_counts() {
        let users = vec![
            user("a", UserRole::Farmer, UserStatus::Active),
            user("b", UserRole::Farmer, UserStatus::Inactive),
            user("c", UserRole::Admin, UserStatus::Active),
        ];
        let summary = DashboardSummary::compute(
            &seed::default_crops(),
            &seed::default_soil_types(),
            &[],
            &users,
        );

        assert_eq!(summary.crops, 6);
        assert_eq!(summary.soil_types, 4);
        assert_eq!(summary.active_users, 2);
        assert_eq!(summary.inactive_users, 1);
        let counts: Vec<usize> = summary.users_by_role.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![2, 1, 0]);
    }
}
