use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

pub mod location;
pub mod overlay;
pub mod protocol;
pub mod session;
pub mod wizard;

// =========================================================
// Constants
// =========================================================

/// Label the AI service uses for a positive detection. Step gating and
/// damage-type pre-fill key off this exact string.
pub const AI_DAMAGE_DETECTED: &str = "Road Damage Detected";

/// Fallback coordinate when neither photo metadata nor device geolocation
/// produced a fix (Bangalore city center).
pub const DEFAULT_LATITUDE: f64 = 12.9716;
pub const DEFAULT_LONGITUDE: f64 = 77.5946;

// =========================================================
// Domain Models
// =========================================================

/// Triage state of a complaint. The UI never offers any transition target
/// outside these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Pending,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    /// Wire form, exactly as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplaintStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ComplaintStatus::Pending),
            "In Progress" => Ok(ComplaintStatus::InProgress),
            "Resolved" => Ok(ComplaintStatus::Resolved),
            _ => Err(()),
        }
    }
}

/// The fixed damage taxonomy offered in the report form. The AI's `type`
/// string is mapped onto this enum, falling back to `Pothole` when it does
/// not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DamageType {
    #[default]
    Pothole,
    Crack,
    #[serde(rename = "Surface Damage")]
    SurfaceDamage,
    #[serde(rename = "Water Logging")]
    WaterLogging,
}

impl DamageType {
    pub const ALL: [DamageType; 4] = [
        DamageType::Pothole,
        DamageType::Crack,
        DamageType::SurfaceDamage,
        DamageType::WaterLogging,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Pothole => "Pothole",
            DamageType::Crack => "Crack",
            DamageType::SurfaceDamage => "Surface Damage",
            DamageType::WaterLogging => "Water Logging",
        }
    }
}

impl Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DamageType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pothole" => Ok(DamageType::Pothole),
            "Crack" => Ok(DamageType::Crack),
            "Surface Damage" => Ok(DamageType::SurfaceDamage),
            "Water Logging" => Ok(DamageType::WaterLogging),
            _ => Err(()),
        }
    }
}

/// One row of `GET /api/complaints`. Created by the backend on submission,
/// mutated only through status updates, never deleted by the client.
///
/// The list endpoint does not echo the citizen's phone number, so it is
/// absent here on purpose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub complaint_id: String,
    pub citizen_name: String,
    pub ward: String,
    pub damage_type: String,
    pub status: ComplaintStatus,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub ai_confidence: Option<f64>,
}

impl Complaint {
    /// Relative URL of the uploaded photo under the API origin.
    pub fn image_url(&self) -> Option<String> {
        self.image_path.as_ref().map(|p| format!("/{p}"))
    }

    /// External map link for the recorded coordinate.
    pub fn map_url(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => {
                Some(format!("https://www.google.com/maps?q={lat},{lng}"))
            }
            _ => None,
        }
    }
}

/// The classification service's verdict on one uploaded photo. Held only in
/// wizard session state, never persisted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResult {
    /// Detection label; compare against [`AI_DAMAGE_DETECTED`].
    pub result: String,
    /// Damage class name as reported by the model. Missing on error verdicts.
    #[serde(rename = "type", default)]
    pub damage_type: String,
    #[serde(default)]
    pub confidence: f64,
    /// `[x1, y1, x2, y2]` in source-image pixel coordinates.
    #[serde(default)]
    pub bbox: Option<[f64; 4]>,
}

impl AiResult {
    pub fn is_damage_detected(&self) -> bool {
        self.result == AI_DAMAGE_DETECTED
    }

    /// Detection confidence as a display percentage.
    pub fn confidence_percent(&self) -> f64 {
        self.confidence * 100.0
    }
}

/// Coordinates the backend extracted from the photo's EXIF metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsData {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response of `POST /api/validate-image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateImageResponse {
    pub ai_result: AiResult,
    #[serde(default)]
    pub gps_data: Option<GpsData>,
}

/// Response of `POST /api/report`. The backend also sends a human-readable
/// `message` field; only the identifier is consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportReceipt {
    pub complaint_id: String,
}

/// Response of `GET /api/analytics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub resolved: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_format_matches_backend_strings() {
        for status in ComplaintStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: ComplaintStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
        assert_eq!(ComplaintStatus::InProgress.as_str(), "In Progress");
    }

    #[test]
    fn status_parses_only_the_three_known_values() {
        assert_eq!("Pending".parse(), Ok(ComplaintStatus::Pending));
        assert_eq!("In Progress".parse(), Ok(ComplaintStatus::InProgress));
        assert_eq!("Resolved".parse(), Ok(ComplaintStatus::Resolved));
        assert!("Closed".parse::<ComplaintStatus>().is_err());
        assert!("pending".parse::<ComplaintStatus>().is_err());
    }

    #[test]
    fn damage_type_covers_the_fixed_enumeration() {
        let labels: Vec<&str> = DamageType::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            labels,
            ["Pothole", "Crack", "Surface Damage", "Water Logging"]
        );
        assert_eq!("Water Logging".parse(), Ok(DamageType::WaterLogging));
        assert!("Sinkhole".parse::<DamageType>().is_err());
    }

    #[test]
    fn validate_response_deserializes_with_and_without_gps() {
        let with_gps = r#"{
            "ai_result": {"result": "Road Damage Detected", "type": "Pothole",
                          "confidence": 0.91, "bbox": [10.0, 20.0, 110.0, 220.0]},
            "gps_data": {"latitude": 12.90, "longitude": 77.60}
        }"#;
        let parsed: ValidateImageResponse = serde_json::from_str(with_gps).unwrap();
        assert!(parsed.ai_result.is_damage_detected());
        assert_eq!(parsed.ai_result.bbox, Some([10.0, 20.0, 110.0, 220.0]));
        assert_eq!(
            parsed.gps_data,
            Some(GpsData {
                latitude: 12.90,
                longitude: 77.60
            })
        );

        // Error verdicts omit type/bbox and carry a null gps_data.
        let no_gps = r#"{
            "ai_result": {"result": "No Road Damage", "confidence": 0.0},
            "gps_data": null
        }"#;
        let parsed: ValidateImageResponse = serde_json::from_str(no_gps).unwrap();
        assert!(!parsed.ai_result.is_damage_detected());
        assert_eq!(parsed.ai_result.damage_type, "");
        assert!(parsed.gps_data.is_none());
    }

    #[test]
    fn complaint_row_parses_backend_shape() {
        let row = r#"{
            "complaint_id": "A1B2C3D4",
            "citizen_name": "Asha",
            "ward": "Ward 12",
            "damage_type": "Pothole",
            "status": "In Progress",
            "latitude": 12.9716,
            "longitude": 77.5946,
            "created_at": "2026-08-30T10:15:00",
            "image_path": "uploads/A1B2C3D4_road.jpg",
            "ai_confidence": 0.87,
            "ai_metadata": null
        }"#;
        let c: Complaint = serde_json::from_str(row).unwrap();
        assert_eq!(c.status, ComplaintStatus::InProgress);
        assert_eq!(c.image_url().as_deref(), Some("/uploads/A1B2C3D4_road.jpg"));
        assert_eq!(
            c.map_url().as_deref(),
            Some("https://www.google.com/maps?q=12.9716,77.5946")
        );
    }
}
