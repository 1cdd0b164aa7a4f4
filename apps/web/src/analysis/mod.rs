//! Analysis — the seam where a real CV analysis backend would plug in.
//!
//! Default (and only) backend: `MockAnalysis`, which returns the fixed results
//! dataset for whatever role it is given. The uploaded CV never reaches it.
//!
//! `AppState` holds an `Arc<dyn AnalysisBackend>`.

pub mod schedule;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::results::mock::mock_payload;
use crate::results::ResultPayload;

#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, role: &str) -> Result<ResultPayload, AppError>;

    /// Short label for logs and the health endpoint.
    fn backend_name(&self) -> &'static str;
}

/// Placeholder backend returning the same dataset for every role.
pub struct MockAnalysis;

#[async_trait]
impl AnalysisBackend for MockAnalysis {
    async fn analyze(&self, role: &str) -> Result<ResultPayload, AppError> {
        Ok(mock_payload(role))
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_analysis_labels_payload_with_role() {
        let payload = MockAnalysis.analyze("DevOps Engineer").await.unwrap();
        assert_eq!(payload.role, "DevOps Engineer");
        assert_eq!(payload.score, 67);
    }

    #[test]
    fn test_mock_backend_name() {
        assert_eq!(MockAnalysis.backend_name(), "mock");
    }
}
