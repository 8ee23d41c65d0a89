use crate::classify::{classify_at, summary_at};
use crate::errors::AppError;
use crate::models::{Category, CategoryResponse, RosterResponse, SummaryResponse};
use crate::provider::{DEFAULT_SCOPE, fetch_roster};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ScopeQuery {
    pub scope: Option<String>,
}

pub async fn index() -> Html<String> {
    Html(render_index(&today().to_string()))
}

pub async fn get_roster(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<RosterResponse>, AppError> {
    let members = fetch_roster(&state.roster_dir, query.scope.as_deref()).await?;
    Ok(Json(RosterResponse {
        scope: scope_label(query.scope),
        count: members.len(),
        members,
    }))
}

/// The selected category travels as an explicit route parameter; there is
/// no filter state carried between requests.
pub async fn get_category(
    State(state): State<AppState>,
    Path(keyword): Path<String>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = Category::from_keyword(&keyword);
    let roster = fetch_roster(&state.roster_dir, query.scope.as_deref()).await?;

    let today = today();
    let members: Vec<_> = classify_at(today, &roster, category)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(CategoryResponse {
        category: category.keyword(),
        scope: scope_label(query.scope),
        date: today.to_string(),
        count: members.len(),
        members,
    }))
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let roster = fetch_roster(&state.roster_dir, query.scope.as_deref()).await?;

    let today = today();
    Ok(Json(SummaryResponse {
        scope: scope_label(query.scope),
        date: today.to_string(),
        total: roster.len(),
        buckets: summary_at(today, &roster),
    }))
}

fn scope_label(scope: Option<String>) -> String {
    scope.unwrap_or_else(|| DEFAULT_SCOPE.to_string())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
