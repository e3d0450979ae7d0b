//! End-to-end pipeline tests against a mocked catalog: region filtering,
//! per-site fallback on detail failure, ordering, and forecast
//! passthrough.

use seatscan_core::AppConfig;
use seatscan_scraper::{run_pipeline, CatalogClient, PipelineOptions};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base: &str) -> AppConfig {
    AppConfig {
        list_url: format!("{base}/app/v3/sites"),
        site_url_base: format!("{base}/app/v3/sites"),
        site_page_base: "https://affluences.com/site".to_owned(),
        origin: "https://affluences.com".to_owned(),
        referer: "https://affluences.com/".to_owned(),
        user_agent: "seatscan-test/0.1".to_owned(),
        accept: "application/json, text/plain, */*".to_owned(),
        category_id: 1,
        request_timeout_secs: 5,
        inter_request_delay_ms: 0,
        max_retries: 0,
        retry_backoff_base_secs: 0,
        log_level: "info".to_owned(),
    }
}

fn options() -> PipelineOptions {
    PipelineOptions {
        category_id: 1,
        inter_request_delay_ms: 0,
    }
}

fn listing_site(id: i64, region: &str) -> serde_json::Value {
    json!({
        "id": id,
        "slug": format!("site-{id}"),
        "primary_name": format!("Bibliothèque {id}"),
        "location": {
            "address": {"region": region, "route": "1 rue des Écoles", "city": "Paris"},
            "coordinates": {"latitude": 48.85, "longitude": 2.35}
        },
        "estimated_distance": 250.0,
        "infos": [{"title": "Places disponibles", "description": format!("{id}0")}]
    })
}

async fn mount_listing(server: &MockServer, sites: Vec<serde_json::Value>) {
    Mock::given(method("POST"))
        .and(path("/app/v3/sites"))
        .and(body_json(json!({"selected_categories": [1], "page": 0})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"data": {"results": sites}})),
        )
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/app/v3/sites"))
        .and(body_json(json!({"selected_categories": [1], "page": 1})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"data": {"results": []}})),
        )
        .mount(server)
        .await;
}

async fn mount_detail(server: &MockServer, slug: &str, detail: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/app/v3/sites/{slug}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"data": detail})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn pipeline_filters_to_target_region() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        vec![
            listing_site(1, "Île-de-France"),
            listing_site(2, "Bretagne"),
        ],
    )
    .await;
    mount_detail(&server, "site-1", json!({"id": 1, "slug": "site-1"})).await;

    let client = CatalogClient::new(&test_config(&server.uri())).unwrap();
    let records = run_pipeline(&client, &options()).await.unwrap();

    assert_eq!(records.len(), 1, "only the Île-de-France site survives");
    assert_eq!(records[0].id, Some(1));
}

#[tokio::test]
async fn pipeline_preserves_listing_order() {
    let server = MockServer::start().await;
    mount_listing(
        &server,
        vec![
            listing_site(3, "Île-de-France"),
            listing_site(1, "ILE DE FRANCE"),
            listing_site(2, "Region Ile-de-France"),
        ],
    )
    .await;
    for slug in ["site-3", "site-1", "site-2"] {
        mount_detail(&server, slug, json!({"id": 0, "slug": slug})).await;
    }

    let client = CatalogClient::new(&test_config(&server.uri())).unwrap();
    let records = run_pipeline(&client, &options()).await.unwrap();

    let ids: Vec<Option<i64>> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![Some(3), Some(1), Some(2)]);
}

#[tokio::test]
async fn pipeline_detail_failure_degrades_to_listing_record() {
    let server = MockServer::start().await;
    mount_listing(&server, vec![listing_site(7, "Île-de-France")]).await;

    Mock::given(method("GET"))
        .and(path("/app/v3/sites/site-7"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&test_config(&server.uri())).unwrap();
    let records = run_pipeline(&client, &options()).await.unwrap();

    assert_eq!(records.len(), 1, "detail failure must not drop the site");
    let record = &records[0];
    // Seats resolve from the listing's own infos ("70" for id 7).
    assert_eq!(record.available_seats, Some(70));
    assert!(record.occupancy_percent.is_none());
    assert!(record.detail_url.is_none());
    assert_eq!(record.name.as_deref(), Some("Bibliothèque 7"));
}

#[tokio::test]
async fn pipeline_passes_through_detail_forecast_and_url() {
    let server = MockServer::start().await;
    mount_listing(&server, vec![listing_site(5, "Île-de-France")]).await;
    mount_detail(
        &server,
        "site-5",
        json!({
            "id": 5,
            "slug": "site-5",
            "infos": [{"title": "Available seats", "description": "123"}],
            "current_forecast": {"occupancy": 72.5},
            "url": "https://affluences.com/site/site-5"
        }),
    )
    .await;

    let client = CatalogClient::new(&test_config(&server.uri())).unwrap();
    let records = run_pipeline(&client, &options()).await.unwrap();

    let record = &records[0];
    assert_eq!(record.available_seats, Some(123));
    assert_eq!(record.occupancy_percent, Some(72.5));
    assert_eq!(
        record.detail_url.as_deref(),
        Some("https://affluences.com/site/site-5")
    );
    assert_eq!(record.estimated_distance_m, Some(250.0));
    assert_eq!(record.latitude, Some(48.85));
    assert_eq!(record.longitude, Some(2.35));
}

#[tokio::test]
async fn pipeline_uses_listing_infos_when_detail_has_none() {
    let server = MockServer::start().await;
    mount_listing(&server, vec![listing_site(4, "Île-de-France")]).await;
    mount_detail(
        &server,
        "site-4",
        json!({"id": 4, "slug": "site-4", "infos": []}),
    )
    .await;

    let client = CatalogClient::new(&test_config(&server.uri())).unwrap();
    let records = run_pipeline(&client, &options()).await.unwrap();

    assert_eq!(records[0].available_seats, Some(40));
}

#[tokio::test]
async fn pipeline_aborts_on_listing_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/app/v3/sites"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = CatalogClient::new(&test_config(&server.uri())).unwrap();
    let result = run_pipeline(&client, &options()).await;

    assert!(result.is_err(), "listing failure must abort the run");
}
