use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use erudio_http::{
    error::AppError,
    hateoas::{encode_segment, LinkBuilder},
};
use tracing::info;

use super::{models::UploadFileResponse, storage::FileStorage};

const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Clone)]
pub struct FileState {
    pub storage: FileStorage,
    pub links: LinkBuilder,
}

pub fn router(state: FileState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/upload", post(upload_file))
        .route("/uploadMultipleFiles", post(upload_multiple_files))
        .route("/downloadFile/{filename}", get(download_file))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Store every multipart part named `field_name`, in order.
async fn store_parts(
    state: &FileState,
    multipart: &mut Multipart,
    field_name: &str,
) -> Result<Vec<UploadFileResponse>, AppError> {
    let mut stored = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let file_type = field.content_type().unwrap_or(OCTET_STREAM).to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let file_name = state.storage.store(&original_name, &data).await?;
        info!(file_name = %file_name, size = data.len(), "stored upload");

        stored.push(UploadFileResponse {
            file_download_uri: state
                .links
                .url(&format!("/file/downloadFile/{}", encode_segment(&file_name))),
            file_name,
            file_type,
            size: data.len() as u64,
        });
    }

    Ok(stored)
}

async fn upload_file(
    State(state): State<FileState>,
    mut multipart: Multipart,
) -> Result<Json<UploadFileResponse>, AppError> {
    info!("Storing file to disk");
    store_parts(&state, &mut multipart, "file")
        .await?
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(|| AppError::bad_request("multipart part 'file' is required"))
}

async fn upload_multiple_files(
    State(state): State<FileState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<UploadFileResponse>>, AppError> {
    info!("Storing files to disk");
    let stored = store_parts(&state, &mut multipart, "files").await?;
    Ok(Json(stored))
}

async fn download_file(
    State(state): State<FileState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    info!(filename = %filename, "Reading file from disk");
    let path = state.storage.load(&filename).await?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::file_storage(format!("Could not read file {}", filename), e))?;

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(filename.as_str())
        .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name.replace('"', "")),
            ),
        ],
        bytes,
    )
        .into_response())
}
