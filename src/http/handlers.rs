//! Axum HTTP handlers for the web server

use axum::Json;
use axum_extra::TypedHeader;
use serde::Serialize;

use super::headers::MyHeader;

pub const DEFAULT_HEADER_VALUE: &str = "no header found";

#[derive(Debug, Serialize)]
pub struct HeaderValueResponse {
    pub header_value: String,
}

pub async fn read_header(my_header: Option<TypedHeader<MyHeader>>) -> Json<HeaderValueResponse> {
    let header_value = match my_header {
        Some(TypedHeader(value)) => value.into_inner(),
        None => DEFAULT_HEADER_VALUE.to_string(),
    };

    Json(HeaderValueResponse { header_value })
}
