use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};

use crate::dto::vehicle_dto::{DeleteSaleForm, FlashQuery, TractorEntryForm, UpdateCostForm};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};
use crate::views::{pages, Flash};

pub fn create_tractor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(main_page))
        .route("/health", get(health_check))
        .route("/tractor_entry", get(tractor_entry_form).post(tractor_entry))
        .route("/update_cost", get(update_cost_form).post(update_cost))
        .route("/total_cost", get(total_cost))
        .route("/tractor_sales", get(tractor_sales))
        .route("/delete_sale", post(delete_sale))
}

fn flash_from(query: &FlashQuery) -> Option<Flash> {
    query.flash.as_deref().and_then(Flash::from_code)
}

fn redirect_with(state: &AppState, path: &str, flash: Flash) -> Redirect {
    Redirect::to(&format!("{}?flash={}", state.config.url_for(path), flash.code()))
}

async fn main_page(State(state): State<AppState>) -> Html<String> {
    Html(pages::main_page(&state.config))
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "tractor_ledger",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn tractor_entry_form(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Html<String> {
    Html(pages::tractor_entry_page(&state.config, flash_from(&query)))
}

async fn tractor_entry(
    State(state): State<AppState>,
    Form(form): Form<TractorEntryForm>,
) -> AppResult<Redirect> {
    let vehicle = match form.into_new_vehicle() {
        Ok(vehicle) => vehicle,
        Err(AppError::Validation(_) | AppError::BadRequest(_)) => {
            return Ok(redirect_with(&state, "/tractor_entry", Flash::InvalidInput));
        }
        Err(e) => return Err(e),
    };

    let flash = match state.records().create_vehicle(vehicle).await {
        Ok(()) => Flash::VehicleAdded,
        Err(AppError::DuplicateKey(_)) => Flash::DuplicateVehicle,
        Err(e) => return Err(e),
    };
    Ok(redirect_with(&state, "/tractor_entry", flash))
}

async fn update_cost_form(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Html<String> {
    Html(pages::update_cost_page(&state.config, flash_from(&query)))
}

async fn update_cost(
    State(state): State<AppState>,
    Form(form): Form<UpdateCostForm>,
) -> AppResult<Redirect> {
    let (vehicle_number, updated_cost) = match form.parse() {
        Ok(parsed) => parsed,
        Err(AppError::Validation(_) | AppError::BadRequest(_)) => {
            return Ok(redirect_with(&state, "/update_cost", Flash::InvalidInput));
        }
        Err(e) => return Err(e),
    };

    // Un vehículo inexistente no es error: el mensaje es el mismo
    state
        .records()
        .set_cost_adjustment(&vehicle_number, updated_cost)
        .await?;
    Ok(redirect_with(&state, "/update_cost", Flash::CostUpdated))
}

async fn total_cost(State(state): State<AppState>) -> AppResult<Html<String>> {
    let report = state.records().get_total_costs().await?;
    Ok(Html(pages::total_cost_page(&state.config, &report)))
}

async fn tractor_sales(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> AppResult<Html<String>> {
    let sales = state.records().get_sales_report().await?;
    Ok(Html(pages::tractor_sales_page(&state.config, &sales, flash_from(&query))))
}

async fn delete_sale(
    State(state): State<AppState>,
    Form(form): Form<DeleteSaleForm>,
) -> AppResult<Redirect> {
    state.records().delete_vehicle(form.vehicle_number.trim()).await?;
    Ok(redirect_with(&state, "/tractor_sales", Flash::RecordDeleted))
}
