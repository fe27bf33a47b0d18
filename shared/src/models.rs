use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Weather for a city as reported by the upstream service.
/// Extra fields sent by the upstream are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct WeatherResult {
    pub city: String,
    pub temperature: f64,
    pub condition: String,
}

impl WeatherResult {
    pub fn heading(&self) -> String {
        format!("{} Hava Durumu", self.city)
    }

    pub fn temperature_line(&self) -> String {
        format!("Sıcaklık: {}°C", self.temperature)
    }

    pub fn condition_line(&self) -> String {
        format!("Durum: {}", self.condition)
    }
}
