use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use folio_core::models::{InspectionResponse, UploadedDocument};
use folio_core::AppError;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Name of the multipart field carrying the document.
const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/api/v0/inspections",
    tag = "inspections",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Document inspected", body = InspectionResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "Unsupported document format", body = ErrorResponse),
        (status = 422, description = "Unreadable document", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn inspect_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let document = read_file_part(multipart).await?;

    state
        .document_validator()
        .validate_all(
            &document.filename,
            document.content_type.as_deref(),
            document.size(),
        )
        .map_err(HttpAppError::from)?;

    let result = state
        .inspector
        .inspect(&document)
        .map_err(HttpAppError::from)?;

    tracing::info!(
        file_name = %document.filename,
        file_size = document.size(),
        page_count = result.page_count,
        word_count = result.word_count,
        estimated = result.format.is_estimated(),
        "Document inspected"
    );

    Ok(Json(InspectionResponse::new(&result, &document)))
}

/// Pull the `file` part out of the multipart body.
async fn read_file_part(mut multipart: Multipart) -> Result<UploadedDocument, HttpAppError> {
    while let Some(field) = multipart.next_field().await.map_err(HttpAppError::from)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::InvalidInput("File part has no filename".to_string()))?;
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(HttpAppError::from)?;

        return Ok(UploadedDocument {
            bytes,
            content_type,
            filename,
        });
    }

    Err(HttpAppError(AppError::InvalidInput(
        "No file provided".to_string(),
    )))
}
