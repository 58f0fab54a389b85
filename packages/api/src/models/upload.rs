use serde::{Deserialize, Serialize};

/// Body for `POST /api/upload-url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_name: String,
    pub content_type: String,
}

/// Presigned destination for a direct upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadTarget {
    /// Where the client PUTs the bytes.
    pub upload_url: String,
    /// Public URL of the file once uploaded.
    pub file_url: String,
}
