// File Model
// File typing and supported format tables

use serde::{Deserialize, Serialize};

/// The broad category of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Video,
    Image,
    Unknown,
}

/// Information about a file selected for conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub path: String,
    pub name: String,
    pub extension: String,
    pub size: i64,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

/// Supported video input extensions (lowercase, no leading dot)
pub const VIDEO_FORMATS: &[&str] = &[
    "mp4", "webm", "avi", "mkv", "mov", "wmv", "flv", "m4v", "mpeg", "mpg",
    "3gp", "mts", "m2ts", "ts", "vob", "ogv", "rm", "rmvb", "asf", "divx",
    "f4v",
];

/// Supported image input extensions (lowercase, no leading dot)
pub const IMAGE_FORMATS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff", "tif", "ico", "svg",
];

/// Output formats offered for video inputs
pub const VIDEO_OUTPUT_FORMATS: &[&str] = &["mp4", "webm", "avi", "mkv", "mov", "gif"];

/// Output formats offered for image inputs
pub const IMAGE_OUTPUT_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tiff"];

/// Classify a file by its extension
///
/// Accepts the extension with or without a leading dot, in any case.
pub fn file_type_for_extension(extension: &str) -> FileType {
    let ext = extension.trim_start_matches('.').to_ascii_lowercase();
    if VIDEO_FORMATS.contains(&ext.as_str()) {
        FileType::Video
    } else if IMAGE_FORMATS.contains(&ext.as_str()) {
        FileType::Image
    } else {
        FileType::Unknown
    }
}

/// Output formats available for a given file type
pub fn output_formats_for(file_type: FileType) -> &'static [&'static str] {
    match file_type {
        FileType::Video => VIDEO_OUTPUT_FORMATS,
        FileType::Image => IMAGE_OUTPUT_FORMATS,
        FileType::Unknown => &[],
    }
}
