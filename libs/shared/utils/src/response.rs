use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

/// `{ success, data, timestamp }`
pub fn success<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Envelope for collections, with an item count.
pub fn success_list<T: Serialize>(data: Vec<T>) -> Json<Value> {
    let count = data.len();
    Json(json!({
        "success": true,
        "data": data,
        "count": count,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub fn success_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<Value> {
    Json(json!({
        "success": true,
        "data": data,
        "message": message.into(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
