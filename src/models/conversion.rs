// Conversion Model
// Job, result, and progress records exchanged with the frontend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FileNamingMode, FileType};

/// Lifecycle status of a conversion job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Cancelled,
}

/// A completed or in-flight conversion record, as shown in the history view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub id: u32,
    pub input_path: String,
    pub output_path: String,
    pub input_format: String,
    pub output_format: String,
    pub file_type: FileType,
    pub file_size: i64,
    pub output_size: i64,
    pub status: ConversionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub progress: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// A single conversion request from the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionJob {
    pub input_path: String,
    pub output_path: String,
    pub output_format: String,
    pub overwrite_output: bool,
}

/// Outcome of one conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub success: bool,
    pub input_path: String,
    pub output_path: String,
    pub output_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Wall-clock duration in milliseconds
    #[serde(rename = "duration")]
    pub duration_ms: i64,
}

/// Progress snapshot for an ongoing conversion, emitted to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionProgress {
    pub id: u32,
    pub input_path: String,
    /// Percent complete, 0-100
    pub progress: f64,
    pub status: ConversionStatus,
}

/// A request to convert several files with shared output options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConversionRequest {
    pub files: Vec<String>,
    pub output_format: String,
    pub output_directory: String,
    pub naming_mode: FileNamingMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_names: Option<Vec<String>>,
    pub make_copies: bool,
}

/// Aggregate outcome of a batch conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConversionResult {
    pub total_files: usize,
    pub success_count: usize,
    pub fail_count: usize,
    pub results: Vec<ConversionResult>,
    /// Total wall-clock duration in milliseconds
    #[serde(rename = "totalDuration")]
    pub total_duration_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_value(ConversionStatus::Processing).unwrap();
        assert_eq!(json, "processing");
    }

    #[test]
    fn test_result_omits_absent_error() {
        let result = ConversionResult {
            success: true,
            input_path: "/in/a.mp4".to_string(),
            output_path: "/out/a.webm".to_string(),
            output_size: 1024,
            error_message: None,
            duration_ms: 1500,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("errorMessage").is_none());
        assert_eq!(json["duration"], 1500);
    }

    #[test]
    fn test_batch_request_round_trip() {
        let json = r#"{
            "files": ["/in/a.mp4"],
            "outputFormat": "webm",
            "outputDirectory": "/out",
            "namingMode": "custom",
            "customNames": ["renamed"],
            "makeCopies": false
        }"#;
        let request: BatchConversionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.naming_mode, FileNamingMode::Custom);
        assert_eq!(request.custom_names.as_deref(), Some(&["renamed".to_string()][..]));
        assert!(!request.make_copies);
    }
}
