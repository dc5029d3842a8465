use gloo_net::http::Request;
use roadwatch_shared::protocol::{
    self, ApiEndpoint, GetAnalytics, ListComplaints, complaint_status_path,
};
use roadwatch_shared::{
    AnalyticsSummary, Complaint, ComplaintStatus, ReportReceipt, ValidateImageResponse,
};
use web_sys::{File, FormData};

/// Client for the damage-reporting backend. Paths are relative to the
/// configured origin; the deployed app talks same-origin.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadWatchApi {
    base_url: String,
}

impl Default for RoadWatchApi {
    /// Same-origin client, the deployed configuration.
    fn default() -> Self {
        Self::new("")
    }
}

impl RoadWatchApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// One typed GET per [`ApiEndpoint`] implementation.
    async fn get_json<E: ApiEndpoint>(&self) -> Result<E::Response, String> {
        let res = Request::get(&self.url(E::PATH))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("request to {} failed: {}", E::PATH, res.status()));
        }

        res.json::<E::Response>().await.map_err(|e| e.to_string())
    }

    async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, String> {
        let res = Request::post(&self.url(path))
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("request to {path} failed: {}", res.status()));
        }

        res.json::<T>().await.map_err(|e| e.to_string())
    }

    /// Send the photo for AI classification and EXIF GPS extraction.
    pub async fn validate_image(&self, file: &File) -> Result<ValidateImageResponse, String> {
        let form = FormData::new().map_err(|e| format!("{e:?}"))?;
        form.append_with_blob(protocol::FIELD_FILE, file)
            .map_err(|e| format!("{e:?}"))?;
        self.post_multipart(protocol::PATH_VALIDATE_IMAGE, form).await
    }

    /// File the complaint. The caller assembles the multipart body via
    /// `ReportFormState::to_form_data`, which guarantees exactly one photo
    /// and one coordinate pair.
    pub async fn submit_report(&self, form: FormData) -> Result<ReportReceipt, String> {
        self.post_multipart(protocol::PATH_REPORT, form).await
    }

    pub async fn get_analytics(&self) -> Result<AnalyticsSummary, String> {
        self.get_json::<GetAnalytics>().await
    }

    pub async fn get_complaints(&self) -> Result<Vec<Complaint>, String> {
        self.get_json::<ListComplaints>().await
    }

    /// Single-field status update; no response body is consumed.
    pub async fn update_status(
        &self,
        complaint_id: &str,
        status: ComplaintStatus,
    ) -> Result<(), String> {
        let form = FormData::new().map_err(|e| format!("{e:?}"))?;
        form.append_with_str(protocol::FIELD_STATUS, status.as_str())
            .map_err(|e| format!("{e:?}"))?;

        let res = Request::patch(&self.url(&complaint_status_path(complaint_id)))
            .body(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.ok() {
            return Err(format!("status update failed: {}", res.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadwatch_shared::protocol;

    #[test]
    fn explicit_base_is_normalized_and_prefixed() {
        let api = RoadWatchApi::new("http://localhost:8000/");
        assert_eq!(
            api.url(protocol::PATH_VALIDATE_IMAGE),
            "http://localhost:8000/api/validate-image"
        );
    }

    #[test]
    fn default_client_is_same_origin() {
        let api = RoadWatchApi::default();
        assert_eq!(api, RoadWatchApi::new(""));
        assert_eq!(api.url(protocol::PATH_REPORT), "/api/report");
    }
}
