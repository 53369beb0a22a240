use axum::{
    Form, Router,
    extract::{DefaultBodyLimit, Path, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::campaign::{CampaignCatalog, CampaignGateway, HttpGateway, PlaceholderGateway};
use crate::config::AppConfig;
use crate::store::{StoreDirectory, StoreError, StoreForm};
use crate::ui;
use crate::wizard::{CampaignTypeStep, SubmitOutcome, WizardError, WizardStore};

/// How often idle wizards are swept.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Build shared state from configuration: catalog, gateway and stores.
pub fn build_state(config: Arc<AppConfig>) -> anyhow::Result<AppState> {
    let catalog = match config.wizard.catalog_file() {
        Some(path) => {
            let catalog = CampaignCatalog::load_from_file(path)?;
            info!(
                name: "catalog.loaded",
                path = %path,
                campaign_types = catalog.len(),
                "Campaign catalog loaded"
            );
            catalog
        }
        None => CampaignCatalog::builtin(),
    };

    let gateway: Arc<dyn CampaignGateway> = match config.gateway.endpoint() {
        Some(endpoint) => {
            let gateway = HttpGateway::new(
                endpoint,
                config.gateway.timeout(),
                config.gateway.api_key.clone(),
            )?;
            info!(
                name: "gateway.configured",
                url = %gateway.url(),
                "Campaign API gateway configured"
            );
            Arc::new(gateway)
        }
        None => {
            info!(
                name: "gateway.configured",
                "No campaign API endpoint set, using placeholder gateway"
            );
            Arc::new(PlaceholderGateway)
        }
    };

    Ok(state_with(
        config,
        Arc::new(catalog),
        gateway,
        StoreDirectory::with_demo_store(),
    ))
}

/// Assemble state from already-built parts.
pub fn state_with(
    config: Arc<AppConfig>,
    catalog: Arc<CampaignCatalog>,
    gateway: Arc<dyn CampaignGateway>,
    stores: StoreDirectory,
) -> AppState {
    let mut step = CampaignTypeStep::new(Arc::clone(&catalog), config.wizard.navigation());
    if let Some(class) = &config.wizard.class {
        step = step.with_class(class.clone());
    }

    AppState {
        wizards: WizardStore::new(catalog),
        step: Arc::new(step),
        gateway,
        stores,
        config,
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let timeout_duration = state.config.server.request_timeout();

    Router::new()
        // HTML pages
        .route("/", get(home_handler))
        .route("/campaigns/create", get(start_wizard))
        .route("/campaigns/create/{id}", get(show_wizard))
        .route("/campaigns/create/{id}/type", post(select_campaign_type))
        .route("/campaigns/create/{id}/submit", post(submit_campaign_type))
        .route("/stores/{id}/edit", get(edit_store))
        .route("/stores/{id}", post(save_store))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout_duration, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = build_state(Arc::clone(&config))?;

    // Sweep idle wizards
    let wizards = state.wizards.clone();
    let idle_timeout = config.wizard.idle_timeout();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            interval.tick().await;
            let removed = wizards.cleanup_expired_with_timeout(idle_timeout);
            if removed > 0 {
                tracing::debug!(name: "wizard.cleanup", removed = removed, "Removed idle wizards");
            }
        }
    });

    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request")
}

/// Follow a forward target: `HX-Redirect` for HTMX, `303 See Other` otherwise.
fn navigate(headers: &HeaderMap, href: &str) -> Response {
    if is_htmx(headers) {
        (StatusCode::OK, [("hx-redirect", href.to_string())]).into_response()
    } else {
        Redirect::to(href).into_response()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Dashboard landing page.
async fn home_handler() -> Html<String> {
    Html(ui::home::render_home())
}

/// GET /campaigns/create - Start a wizard and redirect to it.
async fn start_wizard(State(state): State<AppState>) -> Redirect {
    let id = state.wizards.create();
    info!(name: "wizard.created", wizard_id = %id, "Wizard started");
    Redirect::to(&format!("/campaigns/create/{id}"))
}

/// GET /campaigns/create/:id - Render the campaign-type step.
async fn show_wizard(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, WizardError> {
    let step_state = state.wizards.get(&id)?;
    Ok(Html(ui::wizard::render_create_page(
        &state.step,
        &id,
        step_state,
    )))
}

/// Form body of the selection endpoint.
#[derive(Debug, Deserialize)]
struct SelectForm {
    campaign_type: String,
}

/// POST /campaigns/create/:id/type - Select a campaign type.
async fn select_campaign_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<SelectForm>,
) -> Result<Html<String>, WizardError> {
    let step_state = state.wizards.select(&id, &form.campaign_type)?;
    tracing::debug!(
        name: "wizard.selected",
        wizard_id = %id,
        campaign_type = %form.campaign_type,
        "Campaign type selected"
    );

    Ok(Html(if is_htmx(&headers) {
        ui::wizard::render_step(&state.step, &id, step_state)
    } else {
        ui::wizard::render_create_page(&state.step, &id, step_state)
    }))
}

/// Form body of the submit endpoint. Carries the checked radio, if any.
#[derive(Debug, Default, Deserialize)]
struct SubmitForm {
    #[serde(default)]
    campaign_type: Option<String>,
}

/// POST /campaigns/create/:id/submit - Confirm the step.
async fn submit_campaign_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<SubmitForm>,
) -> Result<Response, WizardError> {
    if let Some(value) = form.campaign_type.as_deref().filter(|v| !v.is_empty()) {
        state.wizards.select(&id, value)?;
    }

    let outcome = state
        .step
        .submit(&state.wizards, &id, Arc::clone(&state.gateway))
        .await?;

    Ok(match outcome {
        SubmitOutcome::Advance(href) => navigate(&headers, &href),
        SubmitOutcome::Stay(step_state) => {
            let html = if is_htmx(&headers) {
                ui::wizard::render_step(&state.step, &id, step_state)
            } else {
                ui::wizard::render_create_page(&state.step, &id, step_state)
            };
            Html(html).into_response()
        }
    })
}

/// GET /stores/:id/edit - Render the store edit page.
async fn edit_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, StoreError> {
    let profile = state.stores.get(&id)?;
    Ok(Html(ui::store::render_edit_page(
        &id,
        profile.to_form(),
        Vec::new(),
        false,
    )))
}

/// POST /stores/:id - Save the store edit form.
async fn save_store(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Form(form): Form<StoreForm>,
) -> Result<Html<String>, StoreError> {
    let (values, errors, saved) = match state.stores.update(&id, &form)? {
        Ok(profile) => {
            info!(name: "store.updated", store_id = %id, "Store updated");
            (profile.to_form(), Vec::new(), true)
        }
        Err(errors) => {
            tracing::debug!(
                name: "store.invalid",
                store_id = %id,
                errors = errors.len(),
                "Store form rejected"
            );
            (form, errors, false)
        }
    };

    Ok(Html(if is_htmx(&headers) {
        ui::store::render_edit_form(&id, values, errors, saved)
    } else {
        ui::store::render_edit_page(&id, values, errors, saved)
    }))
}
