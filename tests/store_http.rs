use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;

use hoptub_dashboard::campaign::{CampaignCatalog, PlaceholderGateway};
use hoptub_dashboard::config::AppConfig;
use hoptub_dashboard::server::{router, state_with};
use hoptub_dashboard::store::{DEMO_STORE_ID, StoreDirectory};

fn setup() -> (TestServer, StoreDirectory) {
    let config = AppConfig::load_from_args(["hoptub-dashboard"]).expect("default config");
    let stores = StoreDirectory::with_demo_store();
    let state = state_with(
        Arc::new(config),
        Arc::new(CampaignCatalog::builtin()),
        Arc::new(PlaceholderGateway),
        stores.clone(),
    );
    (TestServer::new(router(state)).expect("test server"), stores)
}

fn hx_request() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("hx-request"),
        HeaderValue::from_static("true"),
    )
}

#[tokio::test]
async fn test_edit_page_has_one_header_and_one_form() {
    let (server, _) = setup();

    let response = server.get("/stores/demo/edit").await;
    response.assert_status_ok();
    let html = response.text();

    assert_eq!(html.matches("data-region=\"header\"").count(), 1);
    assert_eq!(html.matches("data-region=\"form\"").count(), 1);
    assert!(html.contains("Edit Store | Hoptub"));
    assert!(html.contains("value=\"hoptub_demo\""));
}

#[tokio::test]
async fn test_unknown_store_is_not_found() {
    let (server, _) = setup();

    server
        .get("/stores/missing/edit")
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post("/stores/missing")
        .form(&[("name", "x"), ("username", "y"), ("description", "")])
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_save_updates_store() {
    let (server, stores) = setup();

    let (name, header) = hx_request();
    let response = server
        .post("/stores/demo")
        .add_header(name, header)
        .form(&[
            ("name", "  Vintage Finds "),
            ("username", "vintagefinds"),
            ("description", "Denim"),
        ])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(!html.contains("<!DOCTYPE html>"));
    assert!(html.contains("store-saved"));
    assert!(html.contains("value=\"Vintage Finds\""));

    let profile = stores.get(DEMO_STORE_ID).expect("demo store");
    assert_eq!(profile.name, "Vintage Finds");
    assert_eq!(profile.username, "vintagefinds");
}

#[tokio::test]
async fn test_save_rejects_blank_fields() {
    let (server, stores) = setup();

    let (name, header) = hx_request();
    let response = server
        .post("/stores/demo")
        .add_header(name, header)
        .form(&[("name", " "), ("username", ""), ("description", "")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Store name is required"));
    assert!(html.contains("Poshmark username is required"));
    assert!(!html.contains("store-saved"));

    let profile = stores.get(DEMO_STORE_ID).expect("demo store");
    assert_eq!(profile.username, "hoptub_demo");
}

#[tokio::test]
async fn test_save_without_htmx_renders_full_page() {
    let (server, _) = setup();

    let html = server
        .post("/stores/demo")
        .form(&[("name", ""), ("username", "closet"), ("description", "")])
        .await
        .text();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(html.matches("data-region=\"form\"").count(), 1);
    assert!(html.contains("Store name is required"));
}

#[tokio::test]
async fn test_saved_description_stays_inert() {
    let (server, _) = setup();
    let payload = "</textarea><script>alert(1)</script>";

    server
        .post("/stores/demo")
        .form(&[("name", "Closet"), ("username", "closet"), ("description", payload)])
        .await
        .assert_status_ok();

    let html = server.get("/stores/demo/edit").await.text();
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert_eq!(html.matches("</textarea>").count(), 1);
}

#[tokio::test]
async fn test_home_links_to_wizard_and_store() {
    let (server, _) = setup();

    let html = server.get("/").await.text();
    assert!(html.contains("href=\"/campaigns/create\""));
    assert!(html.contains("href=\"/stores/demo/edit\""));
}
