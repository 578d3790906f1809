//! The backend routes the dashboard talks to, one per widget.

/// One backend route and the wording used when it fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Endpoint {
    Weather,
    Solar,
    #[strum(to_string = "ISS")]
    Iss,
    Astro,
    #[strum(to_string = "APOD")]
    Apod,
}

impl Endpoint {
    /// What is being fetched, as it reads inside a sentence.
    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Weather => "weather data",
            Endpoint::Solar => "solar data",
            Endpoint::Iss => "ISS location",
            Endpoint::Astro => "Astro info",
            Endpoint::Apod => "APOD data",
        }
    }

    /// Reason shown when the backend answers 404.
    pub fn not_found_message(&self) -> &'static str {
        match self {
            Endpoint::Weather => "City not found",
            Endpoint::Solar => "Solar body not found",
            Endpoint::Iss => "ISS location not found",
            Endpoint::Astro => "Astro info not found",
            Endpoint::Apod => "APOD data not found",
        }
    }

    /// Reason shown when a successful response lacks the expected data.
    pub fn missing_data_message(&self) -> &'static str {
        match self {
            Endpoint::Weather => "Weather data not found in the response",
            Endpoint::Solar => "Solar body data not found in the response",
            Endpoint::Iss => "ISS position data not found in the response",
            Endpoint::Astro => "Astro data not found in the response",
            Endpoint::Apod => "APOD data not found in the response",
        }
    }
}
