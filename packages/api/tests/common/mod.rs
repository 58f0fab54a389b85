//! In-process stub of the CODEFLIX backend for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const VALID_TOKEN: &str = "tok-kim";
pub const UPGRADED_TOKEN: &str = "tok-kim-instructor";
pub const EXPIRED_TOKEN: &str = "tok-expired";

/// Bind the stub on an ephemeral port and return its base URL.
pub async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    format!("http://{addr}")
}

fn router() -> Router {
    Router::new()
        .route("/api/user/login", post(login))
        .route("/api/user/logout", post(logout))
        .route("/api/user/me", get(me))
        .route("/api/chat/unreadCount", get(unread_count))
        .route("/api/community/posts", get(posts))
        .route("/api/upload-url", post(upload_url))
        .route("/upload/{file}", put(upload))
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

fn kim(instructor: bool) -> Value {
    let instructor_id = if instructor { json!(77) } else { Value::Null };
    json!({
        "id": 1,
        "name": "kim",
        "isInstructor": instructor,
        "instructorId": instructor_id,
        "profileImage": "https://cdn.codeflix.kr/u/1.png"
    })
}

async fn login(Json(body): Json<Value>) -> Json<Value> {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("kim@codeflix.kr"), Some("correct")) => Json(json!({
            "count": 1,
            "user": kim(false),
            "accessToken": VALID_TOKEN
        })),
        (Some("notoken@codeflix.kr"), Some("correct")) => Json(json!({
            "count": 1,
            "user": kim(false)
        })),
        _ => Json(json!({ "count": 0, "message": "Invalid email or password." })),
    }
}

async fn logout(headers: HeaderMap) -> StatusCode {
    match bearer(&headers) {
        Some(VALID_TOKEN) => StatusCode::OK,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn me(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some(VALID_TOKEN) => Json(kim(false)).into_response(),
        Some(UPGRADED_TOKEN) => Json(kim(true)).into_response(),
        Some(EXPIRED_TOKEN) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "token expired" })),
        )
            .into_response(),
        _ => Json(Value::Null).into_response(),
    }
}

async fn unread_count(Query(params): Query<HashMap<String, String>>) -> Response {
    match params.get("userId").map(String::as_str) {
        Some("1") => Json(json!(4)).into_response(),
        Some("2") => Json(json!({ "unreadCount": 7 })).into_response(),
        Some("3") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Some("4") => Json(json!("seven")).into_response(),
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn posts(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
    let size: u32 = params.get("size").and_then(|p| p.parse().ok()).unwrap_or(10);
    let keyword = params.get("keyword").cloned().unwrap_or_default();
    let sort = params.get("sort").cloned().unwrap_or_default();
    Json(json!({
        "items": [format!("{keyword}:{sort}:{page}")],
        "total": 25,
        "page": page,
        "size": size
    }))
}

async fn upload_url(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let Some(name) = body["fileName"].as_str() else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "message": "fileName is required" })))
            .into_response();
    };
    let host = headers
        .get("host")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("127.0.0.1");
    Json(json!({
        "uploadUrl": format!("http://{host}/upload/{name}"),
        "fileUrl": format!("https://cdn.codeflix.kr/videos/{name}")
    }))
    .into_response()
}

async fn upload(headers: HeaderMap, body: axum::body::Bytes) -> StatusCode {
    let is_video = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "video/mp4");
    if is_video && !body.is_empty() && bearer(&headers).is_none() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}
