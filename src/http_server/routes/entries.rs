use serde::{Deserialize, Serialize};

use crate::http_server::extract::Json;

/// Accept-and-discard stub. Submitted entries are acknowledged but
/// never persisted; the ingestion pipeline owns all writes.
#[derive(Debug, Deserialize)]
pub struct AddEntryBody {
    entry: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct AddEntryResponse {
    status: bool,
    message: &'static str,
}

pub async fn add_entry(Json(body): Json<AddEntryBody>) -> Json<AddEntryResponse> {
    if let Some(entry) = &body.entry {
        log::debug!("Discarding submitted entry: {entry}");
    }

    Json(AddEntryResponse {
        status: true,
        message: "entry received",
    })
}
