use crate::app_context::AppContext;
use crate::http::errors::HttpError;
use crate::search::requests::SearchForm;
use crate::search::responses::PlacesResponse;
use crate::search::services::{PlacesApiHttpHandler, SearchPageHttpHandler};
use crate::sessions::extractors::Session;
use crate::storage::sessions::HashMapSessionsStorage;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Json, Response};
use axum::Form;

#[axum::debug_handler]
pub async fn index(
    session: Session,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Result<Response, HttpError> {
    SearchPageHttpHandler::new(app_context, &session)
        .page()
        .await
}

#[axum::debug_handler]
pub async fn submit(
    session: Session,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Form(form): Form<SearchForm>,
) -> Result<Response, HttpError> {
    SearchPageHttpHandler::new(app_context, &session)
        .submit(form)
        .await
}

#[axum::debug_handler]
pub async fn places(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Query(form): Query<SearchForm>,
) -> (StatusCode, Json<PlacesResponse>) {
    let (status, response) = PlacesApiHttpHandler::new(app_context).search(form).await;
    (status, Json(response))
}
