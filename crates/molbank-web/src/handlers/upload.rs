//! Bulk upload from a JSON file.
//!
//! The file must be a JSON list of objects, each with a string `structure`.
//! The whole file is validated before anything is written, then stored in a
//! single transaction.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::handlers::parse_structure;
use crate::state::SharedState;
use molbank_common::messages;

pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub count: usize,
}

/// POST /upload (multipart, field `file`)
pub async fn upload_molecules(
    State(state): State<SharedState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!("Upload without multipart body: {}", rejection);
        ApiError::BadRequest(messages::UPLOAD_NO_FILE.to_string())
    })?;

    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if !is_json_content_type(field.content_type()) {
            debug!(content_type = ?field.content_type(), "Rejected upload content type");
            return Err(ApiError::BadRequest(messages::UPLOAD_ONLY_JSON.to_string()));
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        upload = Some((filename, field.bytes().await?));
        break;
    }
    let Some((filename, contents)) = upload else {
        return Err(ApiError::BadRequest(messages::UPLOAD_NO_FILE.to_string()));
    };

    let structures = parse_upload(&contents)?;
    let count = state.molecules.insert_many(&structures).await?;

    info!(filename = %filename, count, "Molecules uploaded");
    Ok(Json(UploadResponse { message: messages::MOLECULES_UPLOADED, count }))
}

/// `application/json`, parameters such as `charset` allowed.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Validate an uploaded file and return the structures it holds, in file order.
pub fn parse_upload(contents: &[u8]) -> Result<Vec<String>, ApiError> {
    let bad_request = |message: &str| ApiError::BadRequest(message.to_string());

    let text = std::str::from_utf8(contents).map_err(|_| bad_request(messages::UPLOAD_INVALID_JSON))?;
    if text.trim().is_empty() {
        return Err(bad_request(messages::UPLOAD_EMPTY));
    }

    let value: Value =
        serde_json::from_str(text).map_err(|_| bad_request(messages::UPLOAD_INVALID_JSON))?;
    let Value::Array(items) = value else {
        return Err(bad_request(messages::UPLOAD_NOT_A_LIST));
    };

    let mut structures = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(mut object) = item else {
            return Err(bad_request(messages::UPLOAD_NOT_A_LIST));
        };
        let Some(Value::String(structure)) = object.remove("structure") else {
            return Err(bad_request(messages::UPLOAD_MISSING_STRUCTURE));
        };
        parse_structure(&structure)?;
        structures.push(structure);
    }
    Ok(structures)
}
