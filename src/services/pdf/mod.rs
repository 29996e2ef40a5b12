pub mod invoice;
pub mod receipt;
pub mod report;
pub mod summary;
pub mod template;

use axum::response::{IntoResponse, Response};
use http::{header, StatusCode};

/// wraps rendered document bytes into a downloadable PDF response
pub fn pdf_response(filename: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, String::from("application/pdf")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}
