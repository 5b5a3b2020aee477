use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GuideRequest {
    /// Any text is forwarded, including the empty string; the cap only
    /// guards against oversized bodies.
    #[validate(length(max = 65536))]
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideResponse {
    pub message: String,
    pub location: Option<LocationRef>,
    pub show_map: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_uses_camel_case_and_explicit_null() {
        let response = GuideResponse {
            message: "hi".to_string(),
            location: None,
            show_map: false,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "message": "hi", "location": null, "showMap": false })
        );
    }

    #[test]
    fn empty_and_long_queries_are_accepted() {
        for query in [String::new(), "   ".to_string(), "a".repeat(2001)] {
            assert!(GuideRequest { query }.validate().is_ok());
        }
    }

    #[test]
    fn overlong_query_fails_validation() {
        let request = GuideRequest {
            query: "a".repeat(65537),
        };
        assert!(request.validate().is_err());
    }
}
