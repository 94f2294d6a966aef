//! Static service owner information.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::response::ApiResponse;
use crate::state::AppState;

/// Owner display name reported by `/info`.
pub const OWNER_FULL_NAME: &str = "Trinh Xuan Sang";

/// Owner student code reported by `/info`.
pub const OWNER_STUDENT_CODE: &str = "QE170101";

/// Payload of `GET /info`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoView {
    pub full_name: &'static str,
    pub student_code: &'static str,
}

/// GET /info - Fixed owner information.
async fn get_info() -> Json<ApiResponse<InfoView>> {
    Json(ApiResponse::data(InfoView {
        full_name: OWNER_FULL_NAME,
        student_code: OWNER_STUDENT_CODE,
    }))
}

/// Build info routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/info", get(get_info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_info() {
        let Json(response) = get_info().await;
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["fullName"], "Trinh Xuan Sang");
        assert_eq!(json["data"]["studentCode"], "QE170101");
    }
}
