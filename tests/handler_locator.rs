mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use std::sync::Arc;

use common::RecordingDelivery;

fn server() -> TestServer {
    let state = common::create_test_state(Arc::new(RecordingDelivery::healthy()));
    TestServer::new(common::test_app(state)).unwrap()
}

#[tokio::test]
async fn test_map_defaults_to_manhattan_every_day() {
    let server = server();

    let response = server.get("/api/map").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();

    assert_eq!(json["criteria"]["boroughs"], serde_json::json!(["Manhattan"]));
    assert_eq!(json["criteria"]["days"].as_array().unwrap().len(), 7);
    assert_eq!(json["map"]["markers"].as_array().unwrap().len(), 2);
    assert_eq!(json["map"]["skipped"], 1);
    assert_eq!(json["map"]["zoom"], 12);
    assert_eq!(json["map"]["popup_max_width"], 650);
    assert!(json["map"]["legend_html"].as_str().unwrap().contains("Food Pantry"));
}

#[tokio::test]
async fn test_map_marker_carries_popup_and_icon() {
    let server = server();

    let response = server
        .get("/api/map")
        .add_query_param("borough", "Queens")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let marker = &json["map"]["markers"][0];

    assert_eq!(marker["title"], "Astoria Pantry");
    assert_eq!(marker["icon"]["color"], "blue");
    assert_eq!(marker["icon"]["glyph"], "info-sign");
    let popup = marker["popup_html"].as_str().unwrap();
    assert!(popup.contains("Astoria Pantry"));
    assert!(popup.contains("212-555-0100"));
    assert!(popup.contains("Astoria Pantry Street"));
    assert_eq!(json["map"]["center"]["latitude"], 40.76);
}

#[tokio::test]
async fn test_map_with_nothing_selected_uses_default_center() {
    let server = server();

    let response = server.get("/api/map?filtered=1").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();

    assert!(json["map"]["markers"].as_array().unwrap().is_empty());
    assert_eq!(json["map"]["center"]["latitude"], 40.7831);
    assert_eq!(json["map"]["center"]["longitude"], -73.9712);
}

#[tokio::test]
async fn test_pantries_filter_by_borough_and_day() {
    let server = server();

    let response = server
        .get("/api/pantries?borough=Manhattan&borough=Brooklyn&day=sat")
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();

    assert_eq!(json["count"], 2);
    let programs: Vec<&str> = json["table"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["program"].as_str().unwrap())
        .collect();
    assert_eq!(programs, vec!["Midtown Pantry", "Sunset Park Pantry"]);
}

#[tokio::test]
async fn test_pantries_include_rows_without_coordinates() {
    let server = server();

    let response = server.get("/api/pantries?borough=Manhattan&day=sat").await;

    let json = response.json::<serde_json::Value>();
    let row = &json["table"]["rows"][0];

    assert_eq!(row["program"], "Midtown Pantry");
    assert!(row["latitude"].is_null());
    assert_eq!(json["table"]["columns"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_unknown_filter_value_is_bad_request() {
    let server = server();

    let response = server.get("/api/pantries?borough=Hoboken").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(
        json["error"]["details"]["invalid"][0]
            .as_str()
            .unwrap()
            .contains("Hoboken")
    );
}

#[tokio::test]
async fn test_institutions_are_listed_in_dataset_order() {
    let server = server();

    let response = server.get("/api/institutions").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["institutions"],
        serde_json::json!(["Example College", "Other College"])
    );
}
