use axum::{extract::State, response::Html};
use tracing::debug;

use crate::{AppState, view::IndexPage};

pub async fn handle_index(State(state): State<AppState>) -> Html<String> {
    let entries = state.store.snapshot().await;
    debug!(count = entries.len(), "render homepage");
    Html(IndexPage::new(&state.seo, &entries).render())
}
