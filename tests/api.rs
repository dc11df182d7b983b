#![cfg(feature = "server")]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use numerology::api::router;
use numerology::ServerConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(ServerConfig::default())
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"], "OK");
}

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = send(app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], "Numerology API is running");
}

#[tokio::test]
async fn test_analyze() {
    let request = post_json(
        "/api/analyze",
        json!({
            "name": "Shivam Ahuja",
            "dob": "1990-06-29",
            "gender": "male",
            "target_date": "2025-01-01"
        }),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["mulank"], 2);
    assert_eq!(data["bhagyank"], 9);
    assert_eq!(data["kua"], 1);
    assert_eq!(data["name_number"]["total_sum"], 34);
    assert_eq!(data["periods"]["current"]["personal_year"], 8);
    assert_eq!(data["periods"]["yearly_forecast"].as_array().unwrap().len(), 10);
    assert_eq!(data["pinnacles"].as_array().unwrap().len(), 4);
    assert_eq!(data["essence"].as_array().unwrap().len(), 101);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn test_analyze_kua_formula_override() {
    let request = post_json(
        "/api/analyze",
        json!({
            "name": "A",
            "dob": "2009-01-01",
            "gender": "male",
            "target_date": "2025-01-01",
            "kua_formula": "classic"
        }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["kua"], 9);
}

#[tokio::test]
async fn test_analyze_malformed_date() {
    let request = post_json(
        "/api/analyze",
        json!({ "name": "Shivam", "dob": "29-06", "gender": "male" }),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Malformed date"));
}

#[tokio::test]
async fn test_analyze_bad_target_date() {
    let request = post_json(
        "/api/analyze",
        json!({
            "name": "Shivam",
            "dob": "1990-06-29",
            "gender": "male",
            "target_date": "2025-13-01"
        }),
    );
    let (status, body) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("evaluation date"));
}

#[tokio::test]
async fn test_analyze_mobile() {
    let request = post_json(
        "/api/analyze/mobile",
        json!({ "dob": "1990-06-29", "mobile_number": "9876543210" }),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["mobile_total"], 9);
    assert_eq!(body["data"]["mobile_compound"], 45);
    assert_eq!(body["data"]["compatibility"]["status"], "Unlucky");
}

#[tokio::test]
async fn test_analyze_vehicle_and_house() {
    let request = post_json(
        "/api/analyze/vehicle",
        json!({ "dob": "1990-06-01", "vehicle_number": "MH01AB1234" }),
    );
    let (_, body) = send(app(), request).await;
    assert_eq!(body["data"]["vehicle_total"], 2);
    assert_eq!(body["data"]["vehicle_compound"], 11);

    let request = post_json(
        "/api/analyze/house",
        json!({ "dob": "1990-06-01", "house_number": "101" }),
    );
    let (_, body) = send(app(), request).await;
    assert_eq!(body["data"]["house_total"], 2);
    assert_eq!(body["data"]["compatibility"]["lucky_numbers"], json!([1, 2, 3, 5, 6, 9]));
}

#[tokio::test]
async fn test_compatibility_endpoint() {
    let (_, body) = send(app(), get("/api/compatibility/1/8")).await;
    assert_eq!(body["data"]["status"], "Unlucky");

    let (_, body) = send(app(), get("/api/compatibility/12/3")).await;
    assert_eq!(body["data"]["status"], "Unknown");
    assert_eq!(body["data"]["lucky_numbers"], json!([]));
}

#[tokio::test]
async fn test_compatibility_malformed_segments() {
    for uri in ["/api/compatibility/-1/3", "/api/compatibility/x/3"] {
        let (status, body) = send(app(), get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["status"], "Unknown");
        assert_eq!(body["data"]["lucky_numbers"], json!([]));
    }

    let (status, body) = send(app(), get("/api/compatibility/1/x")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "Neutral");
    assert_eq!(body["data"]["lucky_numbers"], json!([1, 2, 3, 5, 6, 9]));
}

#[tokio::test]
async fn test_name_number_endpoint() {
    let (status, body) = send(app(), get("/api/name-number/Shivam")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["total_sum"], 20);
    assert_eq!(body["data"]["single_digit"], 2);
}
