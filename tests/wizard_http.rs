use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use tokio::sync::Notify;

use hoptub_dashboard::campaign::{
    CampaignCatalog, CampaignGateway, CampaignTypeRequest, PlaceholderGateway, SubmitError,
};
use hoptub_dashboard::config::AppConfig;
use hoptub_dashboard::server::{router, state_with};
use hoptub_dashboard::store::StoreDirectory;

const ALL_TYPES: [&str; 6] = [
    "shareCloset",
    "sendOffers",
    "followOthers",
    "findBuyers",
    "findBrandLovers",
    "commentUsers",
];

fn hx_request() -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("hx-request"),
        HeaderValue::from_static("true"),
    )
}

fn test_config() -> AppConfig {
    AppConfig::load_from_args(["hoptub-dashboard"]).expect("default config")
}

fn server_with(config: AppConfig, gateway: Arc<dyn CampaignGateway>) -> TestServer {
    let state = state_with(
        Arc::new(config),
        Arc::new(CampaignCatalog::builtin()),
        gateway,
        StoreDirectory::with_demo_store(),
    );
    TestServer::new(router(state)).expect("test server")
}

/// Start a wizard and return its page path.
async fn start_wizard(server: &TestServer) -> String {
    let response = server.get("/campaigns/create").await;
    response.assert_status(StatusCode::SEE_OTHER);
    response
        .header("location")
        .to_str()
        .expect("ascii location")
        .to_string()
}

/// Whether the card for `value` carries a checked radio.
fn option_checked(html: &str, value: &str) -> bool {
    let marker = format!("data-option=\"{value}\"");
    let start = html.find(&marker).expect("option rendered");
    let end = html[start..].find("</label>").map_or(html.len(), |i| start + i);
    html[start..end].contains("aria-checked=\"true\"")
}

#[derive(Debug, Default)]
struct CountingGateway {
    calls: AtomicUsize,
}

#[async_trait]
impl CampaignGateway for CountingGateway {
    async fn submit_campaign_type(&self, _request: &CampaignTypeRequest) -> Result<(), SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Debug)]
struct RejectingGateway;

#[async_trait]
impl CampaignGateway for RejectingGateway {
    async fn submit_campaign_type(&self, _request: &CampaignTypeRequest) -> Result<(), SubmitError> {
        Err(SubmitError::Rejected {
            status: 422,
            message: "Campaign limit reached".into(),
        })
    }
}

/// Holds every submission until released.
#[derive(Debug, Default)]
struct BlockingGateway {
    entered: Notify,
    release: Notify,
}

#[async_trait]
impl CampaignGateway for BlockingGateway {
    async fn submit_campaign_type(&self, _request: &CampaignTypeRequest) -> Result<(), SubmitError> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(())
    }
}

#[tokio::test]
async fn test_page_defaults_to_send_offers() {
    let server = server_with(test_config(), Arc::new(PlaceholderGateway));
    let page = start_wizard(&server).await;

    let response = server.get(&page).await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Please select Poshmark campaign type"));
    assert_eq!(html.matches("type=\"radio\"").count(), 6);
    assert_eq!(html.matches("aria-checked=\"true\"").count(), 1);
    assert!(option_checked(&html, "sendOffers"));
    assert!(html.contains("data-status=\"idle\""));
    assert!(!html.contains("campaign-type-error"));
}

#[tokio::test]
async fn test_no_previous_without_back_target() {
    let server = server_with(test_config(), Arc::new(PlaceholderGateway));
    let page = start_wizard(&server).await;

    let html = server.get(&page).await.text();
    assert!(!html.contains("Previous"));
    assert!(html.contains("Next"));
}

#[tokio::test]
async fn test_previous_links_to_back_target() {
    let mut config = test_config();
    config.wizard.back_url = Some("/campaigns".into());
    let server = server_with(config, Arc::new(PlaceholderGateway));
    let page = start_wizard(&server).await;

    let html = server.get(&page).await.text();
    assert!(html.contains("Previous"));
    assert!(html.contains("href=\"/campaigns\""));
}

#[tokio::test]
async fn test_unknown_wizard_is_not_found() {
    let server = server_with(test_config(), Arc::new(PlaceholderGateway));

    server
        .get("/campaigns/create/does-not-exist")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_select_each_campaign_type() {
    let server = server_with(test_config(), Arc::new(PlaceholderGateway));
    let page = start_wizard(&server).await;
    let select = format!("{page}/type");

    for value in ALL_TYPES {
        let (name, header) = hx_request();
        let response = server
            .post(&select)
            .add_header(name, header)
            .form(&[("campaign_type", value)])
            .await;
        response.assert_status_ok();

        let html = response.text();
        assert!(!html.contains("<!DOCTYPE html>"), "HTMX gets a fragment");
        assert_eq!(html.matches("aria-checked=\"true\"").count(), 1);
        assert!(option_checked(&html, value), "{value} should be checked");
    }

    // Selection persists on the wizard
    let html = server.get(&page).await.text();
    assert!(option_checked(&html, "commentUsers"));
}

#[tokio::test]
async fn test_select_unknown_type_is_rejected() {
    let server = server_with(test_config(), Arc::new(PlaceholderGateway));
    let page = start_wizard(&server).await;

    server
        .post(&format!("{page}/type"))
        .form(&[("campaign_type", "massUnfollow")])
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let html = server.get(&page).await.text();
    assert!(option_checked(&html, "sendOffers"));
}

#[tokio::test]
async fn test_submit_success_redirects_once() {
    let gateway = Arc::new(CountingGateway::default());
    let server = server_with(test_config(), gateway.clone());
    let page = start_wizard(&server).await;

    let (name, header) = hx_request();
    let response = server
        .post(&format!("{page}/submit"))
        .add_header(name, header)
        .form(&[("campaign_type", "findBuyers")])
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("hx-redirect"), "/");
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

    let html = server.get(&page).await.text();
    assert!(option_checked(&html, "findBuyers"));
    assert!(html.contains("data-status=\"idle\""));
}

#[tokio::test]
async fn test_submit_without_htmx_uses_see_other() {
    let mut config = test_config();
    config.wizard.next_url = Some("/campaigns/create/{id}/schedule".into());
    let server = server_with(config, Arc::new(PlaceholderGateway));
    let page = start_wizard(&server).await;

    let response = server
        .post(&format!("{page}/submit"))
        .form(&[("campaign_type", "shareCloset")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), format!("{page}/schedule").as_str());
}

#[tokio::test]
async fn test_submit_failure_shows_message_without_redirect() {
    let server = server_with(test_config(), Arc::new(RejectingGateway));
    let page = start_wizard(&server).await;

    let (name, header) = hx_request();
    let response = server
        .post(&format!("{page}/submit"))
        .add_header(name, header)
        .form(&[("campaign_type", "followOthers")])
        .await;

    response.assert_status_ok();
    assert!(response.maybe_header("hx-redirect").is_none());

    let html = response.text();
    assert!(html.contains("campaign-type-error"));
    assert!(html.contains("Campaign limit reached"));
    assert!(html.contains("data-status=\"failed\""));
    assert!(option_checked(&html, "followOthers"));
    // Next is usable again for a retry
    assert!(html.contains("aria-disabled=\"false\""));
}

#[tokio::test]
async fn test_failure_cleared_by_next_attempt() {
    let server = server_with(test_config(), Arc::new(RejectingGateway));
    let page = start_wizard(&server).await;
    let submit = format!("{page}/submit");

    let first = server.post(&submit).form(&[("campaign_type", "")]).await.text();
    let second = server.post(&submit).form(&[("campaign_type", "")]).await.text();

    assert_eq!(first.matches("Campaign limit reached").count(), 1);
    assert_eq!(second.matches("Campaign limit reached").count(), 1);
}

#[tokio::test]
async fn test_pending_disables_next_and_rejects_second_submit() {
    let gateway = Arc::new(BlockingGateway::default());
    let server = server_with(test_config(), gateway.clone());
    let page = start_wizard(&server).await;
    let submit = format!("{page}/submit");

    let (first, ()) = tokio::join!(
        async {
            let (name, header) = hx_request();
            server
                .post(&submit)
                .add_header(name, header)
                .form(&[("campaign_type", "sendOffers")])
                .await
        },
        async {
            gateway.entered.notified().await;

            let html = server.get(&page).await.text();
            assert!(html.contains("data-status=\"pending\""));
            assert!(html.contains("aria-disabled=\"true\""));

            server
                .post(&submit)
                .form(&[("campaign_type", "")])
                .await
                .assert_status(StatusCode::CONFLICT);

            gateway.release.notify_one();
        }
    );

    assert_eq!(first.header("hx-redirect"), "/");
    let html = server.get(&page).await.text();
    assert!(html.contains("data-status=\"idle\""));
    assert!(html.contains("aria-disabled=\"false\""));
}

#[tokio::test]
async fn test_timed_out_request_does_not_strand_wizard() {
    let mut config = test_config();
    config.server.request_timeout_secs = 1;
    let gateway = Arc::new(BlockingGateway::default());
    let server = server_with(config, gateway.clone());
    let page = start_wizard(&server).await;
    let submit = format!("{page}/submit");

    server
        .post(&submit)
        .form(&[("campaign_type", "shareCloset")])
        .await
        .assert_status(StatusCode::REQUEST_TIMEOUT);

    // The gateway call outlives the request
    let html = server.get(&page).await.text();
    assert!(html.contains("data-status=\"pending\""));

    gateway.release.notify_one();
    let mut settled = false;
    for _ in 0..50 {
        if server.get(&page).await.text().contains("data-status=\"idle\"") {
            settled = true;
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert!(settled, "wizard should leave Pending once the gateway answers");

    // Let the retry through as well
    gateway.release.notify_one();
    let (name, header) = hx_request();
    let retry = server
        .post(&submit)
        .add_header(name, header)
        .form(&[("campaign_type", "")])
        .await;
    assert_eq!(retry.header("hx-redirect"), "/");
}
