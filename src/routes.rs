use axum::{extract::State, routing::get};
use chrono::{DateTime, Utc};
use maud::html;

use crate::{
    views::{footer::Footer, Page},
    AppState,
};

pub fn routes(app_state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", get(home))
        .with_state(app_state)
}

async fn home(State(state): State<AppState>) -> Page {
    tracing::debug!("Rendering index page");
    index_page(&state, Utc::now())
}

pub(crate) fn index_page(state: &AppState, now: DateTime<Utc>) -> Page {
    let title = state.config.title.clone().unwrap_or_default();

    Page::new(
        title.clone(),
        html! {
          h1 { (title) }
        },
        Footer::new(&state.config, now),
    )
}
