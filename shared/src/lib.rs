pub mod error;
pub mod ranking;

use serde::{Deserialize, Deserializer, Serialize};

pub use error::{ApiError, SearchError};
pub use ranking::{RankingFilter, rank};

pub const DEFAULT_RADIUS_KM: f64 = 3.0;
pub const DEFAULT_MIN_RATING: f64 = 0.0;
pub const DEFAULT_MIN_REVIEWS: u32 = 0;
pub const MAPS_DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Deep link opening turn-by-turn directions towards this point.
    pub fn directions_url(self) -> String {
        format!("{MAPS_DIRECTIONS_URL}&destination={},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub min_rating: f64,
    pub min_reviews: u32,
    pub open_now: bool,
}

impl SearchRequest {
    /// Builds the payload with the fixed page defaults around `query` and `origin`.
    pub fn new(query: impl Into<String>, origin: Coordinates) -> Self {
        Self {
            query: query.into(),
            latitude: origin.lat,
            longitude: origin.lng,
            radius_km: DEFAULT_RADIUS_KM,
            min_rating: DEFAULT_MIN_RATING,
            min_reviews: DEFAULT_MIN_REVIEWS,
            open_now: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub reviews: Option<u64>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_signs: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_status: Option<String>,
}

impl RestaurantItem {
    /// `None` for places the backend could not geolocate.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates::new(self.lat?, self.lng?))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<RestaurantItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_found: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returned: Option<usize>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_carries_page_defaults() {
        let request = SearchRequest::new("pizza", Coordinates::new(-23.5, -46.6));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "pizza",
                "latitude": -23.5,
                "longitude": -46.6,
                "radius_km": 3.0,
                "min_rating": 0.0,
                "min_reviews": 0,
                "open_now": false
            })
        );
    }

    #[test]
    fn directions_url_embeds_destination() {
        let url = Coordinates::new(-23.55, -46.63).directions_url();
        assert_eq!(
            url,
            "https://www.google.com/maps/dir/?api=1&destination=-23.55,-46.63"
        );
    }

    #[test]
    fn response_accepts_backend_payload() {
        let payload = json!({
            "total_found": 2,
            "returned": 1,
            "items": [{
                "place_id": "abc",
                "name": "Cantina",
                "address": "Rua Augusta, 100",
                "rating": 4.6,
                "reviews": 321,
                "open_now": true,
                "price_level": 2,
                "price_signs": "R$R$R$",
                "lat": -23.55,
                "lng": -46.65,
                "distance_km": 0.42,
                "photo_url": "/api/photo?ref=xyz&maxwidth=400",
                "business_status": "OPERATIONAL"
            }]
        });

        let response: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.total_found, Some(2));
        let item = &response.items[0];
        assert_eq!(item.name, "Cantina");
        assert_eq!(item.reviews, Some(321));
        assert_eq!(item.open_now, Some(true));
        assert_eq!(item.coordinates(), Some(Coordinates::new(-23.55, -46.65)));
    }

    #[test]
    fn response_tolerates_nulls_and_missing_fields() {
        let payload = json!({
            "items": [{
                "name": null,
                "address": null,
                "rating": null,
                "reviews": null,
                "distance_km": null,
                "photo_url": null,
                "lat": 1.0,
                "lng": 2.0
            }]
        });

        let response: SearchResponse = serde_json::from_value(payload).unwrap();
        let item = &response.items[0];
        assert_eq!(item.name, "");
        assert!(item.address.is_none());
        assert!(item.rating.is_none());
        assert!(item.distance_km.is_none());
        assert!(item.photo_url.is_none());
    }

    #[test]
    fn item_without_geometry_keeps_the_rest_of_the_page() {
        let payload = json!({
            "items": [
                {"name": "Ok", "lat": 1.0, "lng": 2.0},
                {"name": "NoGeo", "lat": null, "lng": null},
                {"name": "HalfGeo", "lat": 3.0}
            ]
        });

        let response: SearchResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.items.len(), 3);
        assert_eq!(
            response.items[0].coordinates(),
            Some(Coordinates::new(1.0, 2.0))
        );
        assert_eq!(response.items[1].coordinates(), None);
        assert_eq!(response.items[2].coordinates(), None);
    }

    #[test]
    fn missing_or_null_items_mean_empty() {
        let missing: SearchResponse = serde_json::from_value(json!({})).unwrap();
        let null: SearchResponse = serde_json::from_value(json!({ "items": null })).unwrap();
        assert!(missing.items.is_empty());
        assert!(null.items.is_empty());
    }
}
