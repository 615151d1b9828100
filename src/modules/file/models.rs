use serde::{Deserialize, Serialize};

/// Outcome of one stored upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadFileResponse {
    pub file_name: String,
    pub file_download_uri: String,
    pub file_type: String,
    pub size: u64,
}
