use crate::{AnalyticsSummary, Complaint};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

/// Binds a JSON read endpoint to its path, method and response type, so the
/// API client and tests agree on the contract in one place.
pub trait ApiEndpoint {
    /// The response type returned by this endpoint.
    type Response: Serialize + DeserializeOwned;
    /// The URL path under the API origin.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// JSON read endpoints
// =========================================================

/// Aggregate complaint counts for the dashboard cards.
pub struct GetAnalytics;

impl ApiEndpoint for GetAnalytics {
    type Response = AnalyticsSummary;
    const PATH: &'static str = "/api/analytics";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Full complaint list for the triage table.
pub struct ListComplaints;

impl ApiEndpoint for ListComplaints {
    type Response = Vec<Complaint>;
    const PATH: &'static str = "/api/complaints";
    const METHOD: HttpMethod = HttpMethod::Get;
}

// =========================================================
// Multipart endpoints
// =========================================================
// These carry browser File objects and go out as multipart/form-data; only
// their paths and field names are declared here.

/// `POST` multipart `{ file }` → `ValidateImageResponse`.
pub const PATH_VALIDATE_IMAGE: &str = "/api/validate-image";

/// `POST` multipart citizen fields + image + coordinates → `ReportReceipt`.
pub const PATH_REPORT: &str = "/api/report";

/// `PATCH` multipart `{ status }`; no response body consumed.
pub fn complaint_status_path(complaint_id: &str) -> String {
    format!("/api/complaints/{complaint_id}")
}

pub const FIELD_FILE: &str = "file";
pub const FIELD_IMAGE: &str = "image";
pub const FIELD_NAME: &str = "name";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_WARD: &str = "ward";
pub const FIELD_DAMAGE_TYPE: &str = "damage_type";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_LATITUDE: &str = "latitude";
pub const FIELD_LONGITUDE: &str = "longitude";
pub const FIELD_STATUS: &str = "status";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_endpoints_are_plain_gets() {
        assert_eq!(GetAnalytics::PATH, "/api/analytics");
        assert_eq!(GetAnalytics::METHOD, HttpMethod::Get);
        assert_eq!(ListComplaints::PATH, "/api/complaints");
        assert_eq!(ListComplaints::METHOD, HttpMethod::Get);
    }

    #[test]
    fn status_path_embeds_the_complaint_id() {
        assert_eq!(complaint_status_path("A1B2C3D4"), "/api/complaints/A1B2C3D4");
    }
}
