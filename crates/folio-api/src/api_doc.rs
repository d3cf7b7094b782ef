//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use folio_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Folio API",
        version = "0.1.0",
        description = "Document inspection API (v0) for translation orders: upload a PDF or DOCX and receive the page count and word count the order price is based on. All endpoints are versioned under /api/v0/."
    ),
    paths(
        handlers::inspections::inspect_document,
    ),
    components(schemas(
        models::InspectionResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "inspections", description = "Document inspection endpoints")
    )
)]
pub struct ApiDoc;
