use axum::Json;

use crate::catalog::{RoleRecord, ROLE_CATALOG};

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<&'static [RoleRecord]> {
    Json(ROLE_CATALOG.as_slice())
}
