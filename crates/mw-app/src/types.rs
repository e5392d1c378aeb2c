//! JSON wire types shared by the HTTP and CLI frontends.

use serde::{Deserialize, Serialize};

/// Body of `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRequest {
    pub formula: String,
}

/// Successful weight computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightResponse {
    pub molecular_weight: f64,
}

/// Error payload returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_round_trips_through_json() {
        let request: WeightRequest = serde_json::from_str(r#"{"formula": "H2O"}"#).unwrap();
        assert_eq!(request.formula, "H2O");
    }

    #[test]
    fn response_field_names_match_the_wire_contract() {
        let body = serde_json::to_string(&WeightResponse {
            molecular_weight: 18.015,
        })
        .unwrap();
        assert!(body.contains("\"molecular_weight\""));

        let body = serde_json::to_string(&ErrorResponse {
            error: "bad formula".into(),
        })
        .unwrap();
        assert!(body.contains("\"error\""));
    }
}
