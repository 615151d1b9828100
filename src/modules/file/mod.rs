pub mod models;
pub mod routes;
pub mod storage;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use erudio_http::hateoas::LinkBuilder;
use erudio_kernel::{settings::FileStorageSettings, InitCtx, Module};

use routes::FileState;
use storage::FileStorage;

/// Upload and download endpoints mounted under `/file`
pub struct FileModule {
    state: FileState,
    max_upload_bytes: usize,
}

impl FileModule {
    pub fn new(settings: &FileStorageSettings, links: LinkBuilder) -> anyhow::Result<Self> {
        Ok(Self {
            state: FileState {
                storage: FileStorage::new(settings)?,
                links,
            },
            max_upload_bytes: settings.max_upload_bytes,
        })
    }
}

#[async_trait]
impl Module for FileModule {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            upload_dir = %self.state.storage.root().display(),
            "file module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.state.clone(), self.max_upload_bytes)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let upload = serde_json::json!({ "$ref": "#/components/schemas/UploadFileResponse" });
        let error = serde_json::json!({ "$ref": "#/components/schemas/ErrorResponse" });

        Some(serde_json::json!({
            "paths": {
                "/upload": {
                    "post": {
                        "summary": "Upload one file (multipart part `file`)",
                        "tags": ["File"],
                        "responses": {
                            "200": { "description": "Stored file", "content": { "application/json": { "schema": upload } } },
                            "400": { "description": "Invalid file name", "content": { "application/json": { "schema": error } } }
                        }
                    }
                },
                "/uploadMultipleFiles": {
                    "post": {
                        "summary": "Upload several files (multipart parts `files`)",
                        "tags": ["File"],
                        "responses": {
                            "200": {
                                "description": "Stored files",
                                "content": { "application/json": { "schema": { "type": "array", "items": upload } } }
                            }
                        }
                    }
                },
                "/downloadFile/{filename}": {
                    "get": {
                        "summary": "Download a stored file",
                        "tags": ["File"],
                        "parameters": [
                            { "name": "filename", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": { "description": "File contents" },
                            "404": { "description": "Unknown file", "content": { "application/json": { "schema": error } } }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "UploadFileResponse": {
                        "type": "object",
                        "properties": {
                            "file_name": { "type": "string" },
                            "file_download_uri": { "type": "string" },
                            "file_type": { "type": "string" },
                            "size": { "type": "integer" }
                        }
                    }
                }
            }
        }))
    }
}

pub fn create_module(
    settings: &FileStorageSettings,
    links: LinkBuilder,
) -> anyhow::Result<Arc<dyn Module>> {
    Ok(Arc::new(FileModule::new(settings, links)?))
}
