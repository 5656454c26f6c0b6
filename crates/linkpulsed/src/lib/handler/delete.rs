use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::Response,
};
use serde::Deserialize;
use tracing::info;

use crate::{
    AppState,
    handler::{
        error::{AppError, RequestError, required},
        to_homepage,
    },
};

pub async fn handle_delete(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = form?;
    let DeleteRequest { title } = form.try_into()?;
    let removed = state.store.remove_by_title(&title).await?;
    info!(%title, removed, "delete");
    Ok(to_homepage())
}

#[derive(Deserialize, Debug)]
pub struct DeleteForm {
    title: Option<String>,
}

#[derive(Debug)]
pub struct DeleteRequest {
    pub title: String,
}

impl TryFrom<DeleteForm> for DeleteRequest {
    type Error = RequestError;

    fn try_from(form: DeleteForm) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(form.title, "title")?,
        })
    }
}
