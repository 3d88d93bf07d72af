//! Default records used when a collection has nothing usable in storage,
//! plus the starting contents of the session-scoped admin catalogs.

use chrono::Utc;

use crate::types::{Crop, CropCategory, Season, SoilType, WeatherRecord};

fn crop(id: &str, name: &str, icon: &str, category: &str) -> Crop {
    Crop {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
    }
}

fn soil(id: &str, name: &str, icon: &str) -> SoilType {
    SoilType {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

pub fn default_crops() -> Vec<Crop> {
    vec![
        crop("1", "Wheat", "🌾", "Cereals"),
        crop("2", "Rice", "🌾", "Cereals"),
        crop("3", "Corn", "🌽", "Cereals"),
        crop("4", "Cotton", "🌸", "Fiber"),
        crop("5", "Sugarcane", "🎋", "Sugar"),
        crop("6", "Potato", "🥔", "Vegetables"),
    ]
}

pub fn default_soil_types() -> Vec<SoilType> {
    vec![
        soil("1", "Clay Soil", "🟫"),
        soil("2", "Sandy Soil", "🟨"),
        soil("3", "Loamy Soil", "🟤"),
        soil("4", "Black Soil", "⬛"),
    ]
}

/// Two sample observations, dated at the moment they are seeded.
pub fn default_weather() -> Vec<WeatherRecord> {
    let now = Utc::now();
    vec![
        WeatherRecord {
            id: "1".to_string(),
            location: "Mumbai".to_string(),
            temperature: 32.0,
            humidity: 65.0,
            rainfall: 120.0,
            condition: "Partly Cloudy".to_string(),
            date: now,
        },
        WeatherRecord {
            id: "2".to_string(),
            location: "Delhi".to_string(),
            temperature: 28.0,
            humidity: 45.0,
            rainfall: 80.0,
            condition: "Sunny".to_string(),
            date: now,
        },
    ]
}

pub fn default_crop_categories() -> Vec<CropCategory> {
    [
        ("1", "Cereals", "Grain crops like wheat, rice, and corn", "🌾"),
        ("2", "Pulses", "Legume crops rich in protein", "🫘"),
        ("3", "Cash Crops", "Commercial crops like cotton and sugarcane", "💰"),
        ("4", "Vegetables", "Edible plant crops", "🥬"),
    ]
    .into_iter()
    .map(|(id, name, description, icon)| CropCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

pub fn default_seasons() -> Vec<Season> {
    [
        ("1", "Kharif", "June", "October", "Monsoon season crops", "🌧️"),
        ("2", "Rabi", "November", "April", "Winter season crops", "❄️"),
        ("3", "Zaid", "March", "June", "Summer season crops", "☀️"),
    ]
    .into_iter()
    .map(|(id, name, start, end, description, icon)| Season {
        id: id.to_string(),
        name: name.to_string(),
        start_month: start.to_string(),
        end_month: end.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(default_crops().len(), 6);
        assert_eq!(default_soil_types().len(), 4);
        assert_eq!(default_weather().len(), 2);
        assert_eq!(default_crop_categories().len(), 4);
        assert_eq!(default_seasons().len(), 3);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let crops = default_crops();
        for (i, a) in crops.iter().enumerate() {
            assert!(crops[i + 1..].iter().all(|b| b.id != a.id));
        }
    }
}
