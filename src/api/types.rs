//! Domain entities produced by the endpoint clients.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    pub city: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind: f64,
    pub rain: f64,
}

/// Weather fields as the backend sends them; the city comes from the request.
#[derive(Debug, Deserialize)]
pub(crate) struct WeatherReading {
    pub temperature: f64,
    pub humidity: f64,
    pub wind: f64,
    pub rain: f64,
}

impl WeatherReading {
    pub fn into_weather(self, city: &str) -> WeatherData {
        WeatherData {
            city: city.to_string(),
            temperature: self.temperature,
            humidity: self.humidity,
            wind: self.wind,
            rain: self.rain,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarInfo {
    pub english_name: String,
    pub is_planet: bool,
    pub gravity: f64,
    pub mean_radius: f64,
    pub avg_temp: f64,
}

/// Snapshot of the station's ground position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IssLocation {
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
}

/// Open Notify encodes coordinates as strings ("-51.6012"); accept both forms.
fn coordinate<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// One astronaut record. Records are passed through as sent; `name` and
/// `craft` are picked out when present and any other keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub craft: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// People currently in space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstroInfo {
    pub message: String,
    pub people: Vec<Person>,
    pub number: usize,
}

impl AstroInfo {
    /// `number` is always derived from `people`, never taken from upstream.
    pub fn from_people(people: Vec<Person>) -> Self {
        Self {
            message: "success".to_string(),
            number: people.len(),
            people,
        }
    }
}

/// Astronomy picture of the day, passed through as the provider sent it.
///
/// No contract is enforced on the contents beyond being a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ApodData(pub Map<String, Value>);

impl ApodData {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.field("title")
    }

    pub fn date(&self) -> Option<&str> {
        self.field("date")
    }

    pub fn url(&self) -> Option<&str> {
        self.field("hdurl").or_else(|| self.field("url"))
    }

    pub fn explanation(&self) -> Option<&str> {
        self.field("explanation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_iss_location_accepts_string_coordinates() {
        let location: IssLocation =
            serde_json::from_value(json!({"latitude": "-51.6012", "longitude": "12.5"})).unwrap();
        assert_eq!(location.latitude, -51.6012);
        assert_eq!(location.longitude, 12.5);
    }

    #[test]
    fn test_iss_location_rejects_non_numeric_text() {
        let result =
            serde_json::from_value::<IssLocation>(json!({"latitude": "north", "longitude": 1.0}));
        assert!(result.is_err());
    }

    #[test]
    fn test_solar_info_reads_camel_case() {
        let info: SolarInfo = serde_json::from_value(json!({
            "englishName": "Mars",
            "isPlanet": true,
            "gravity": 3.71,
            "meanRadius": 3389.5,
            "avgTemp": 210
        }))
        .unwrap();
        assert_eq!(info.english_name, "Mars");
        assert_eq!(info.avg_temp, 210.0);
    }

    #[test]
    fn test_solar_info_rejects_partial_payload() {
        let result = serde_json::from_value::<SolarInfo>(json!({"englishName": "Mars"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_person_keeps_unrecognised_fields() {
        let person: Person =
            serde_json::from_value(json!({"name": "Sunita", "agency": "NASA"})).unwrap();
        assert_eq!(person.name.as_deref(), Some("Sunita"));
        assert_eq!(person.craft, None);
        assert_eq!(person.other["agency"], "NASA");
        assert_eq!(
            serde_json::to_value(&person).unwrap(),
            json!({"name": "Sunita", "agency": "NASA"})
        );
    }

    #[test]
    fn test_apod_prefers_hd_url() {
        let apod = ApodData(
            json!({"url": "low.jpg", "hdurl": "high.jpg", "title": "Orion"})
                .as_object()
                .unwrap()
                .clone(),
        );
        assert_eq!(apod.url(), Some("high.jpg"));
        assert_eq!(apod.title(), Some("Orion"));
        assert_eq!(apod.explanation(), None);
    }
}
