use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::WeatherResult;
use super::texts;

/// Uniform wrapper returned by the proxy, whatever the outcome.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Interpret the envelope as a lookup outcome.
    ///
    /// A success whose payload does not match `WeatherResult` is a failure.
    pub fn into_result(self) -> Result<WeatherResult, String> {
        if !self.success {
            return Err(self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| texts::GENERIC_ERROR.to_string()));
        }

        let data = self.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|_| texts::GENERIC_ERROR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_serialization() {
        let envelope = Envelope::ok(json!({ "city": "Izmir", "temperature": 24, "condition": "Sun" }));
        let encoded = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            encoded,
            json!({ "success": true, "data": { "city": "Izmir", "temperature": 24, "condition": "Sun" } })
        );
    }

    #[test]
    fn test_failure_serialization() {
        let encoded = serde_json::to_value(Envelope::failure(texts::LOOKUP_FAILED)).unwrap();

        assert_eq!(
            encoded,
            json!({ "success": false, "message": "Hava durumu verileri alınamadı" })
        );
    }

    #[test]
    fn test_into_result_success() {
        let envelope: Envelope = serde_json::from_value(json!({
            "success": true,
            "data": { "city": "Istanbul", "temperature": 18, "condition": "Clear" }
        }))
        .unwrap();

        let result = envelope.into_result().unwrap();
        assert_eq!(result.city, "Istanbul");
        assert_eq!(result.temperature, 18.0);
        assert_eq!(result.condition, "Clear");
    }

    #[test]
    fn test_into_result_failure_keeps_message() {
        let err = Envelope::failure("Hava durumu verileri alınamadı")
            .into_result()
            .unwrap_err();
        assert_eq!(err, "Hava durumu verileri alınamadı");
    }

    #[test]
    fn test_into_result_failure_without_message() {
        let envelope: Envelope = serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(envelope.into_result().unwrap_err(), texts::GENERIC_ERROR);
    }

    #[test]
    fn test_into_result_rejects_malformed_data() {
        let missing_data = Envelope {
            success: true,
            data: None,
            message: None,
        };
        assert!(missing_data.into_result().is_err());

        let wrong_shape = Envelope::ok(json!({ "city": "Bursa", "temperature": "warm" }));
        assert_eq!(wrong_shape.into_result().unwrap_err(), texts::GENERIC_ERROR);
    }
}
