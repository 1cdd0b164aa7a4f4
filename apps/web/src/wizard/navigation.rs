//! Navigation handoff from the wizard to the results view.
//!
//! Only the role label crosses this boundary. The uploaded file stays behind.

use async_trait::async_trait;
use serde::Serialize;

pub const RESULTS_PATH: &str = "/results";

/// Where the wizard sends the browser once analysis completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsDestination {
    pub role: String,
}

impl ResultsDestination {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }

    /// Relative URI with the role percent-encoded as the `role` query parameter.
    pub fn to_uri(&self) -> String {
        format!("{RESULTS_PATH}?role={}", urlencoding::encode(&self.role))
    }
}

/// Performs the one-way navigation when the analysis timer fires.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, destination: ResultsDestination);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_encodes_spaces_as_percent_20() {
        let dest = ResultsDestination::new("Web Developer");
        assert_eq!(dest.to_uri(), "/results?role=Web%20Developer");
    }

    #[test]
    fn test_uri_encodes_reserved_characters() {
        let dest = ResultsDestination::new("Machine Learning / AI");
        assert_eq!(dest.to_uri(), "/results?role=Machine%20Learning%20%2F%20AI");
    }

    #[test]
    fn test_destination_serializes_role_only() {
        let json = serde_json::to_value(ResultsDestination::new("Data Engineer")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "Data Engineer" }));
    }
}
