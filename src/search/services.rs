use crate::app_context::AppContext;
use crate::http::errors::HttpError;
use crate::maps::errors::MapsError;
use crate::maps::models::Coordinate;
use crate::render::page::{Notice, NoticeLevel, PageContext, LOCATION_NOT_FOUND, NO_PLACES_ON_MAP};
use crate::search::models::{SearchOutcome, SearchQuery};
use crate::search::pipeline::SearchPipeline;
use crate::search::requests::SearchForm;
use crate::search::responses::{PlacesResponse, PlacesResponseError};
use crate::sessions::extractors::Session;
use crate::sessions::models::SessionState;
use crate::storage::interface::ISessionStorage;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

async fn run_search<SS: ISessionStorage>(
    app_context: &AppContext<SS>,
    query: &SearchQuery,
) -> Result<SearchOutcome, MapsError> {
    SearchPipeline::new(
        app_context.geocoder.as_ref(),
        app_context.places.as_ref(),
        &app_context.sampler,
    )
    .run(query)
    .await
}

/// Serves the HTML page of one session.
pub struct SearchPageHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    session: &'a Session,
}

impl<'a, SS> SearchPageHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, session: &'a Session) -> Self {
        Self {
            app_context,
            session,
        }
    }

    pub async fn page(&self) -> Result<Response, HttpError> {
        let state = self.app_context.sessions.state(&self.session.id).await;
        let page = PageContext::new(&state.form, state.outcome.as_ref())?;
        self.respond(StatusCode::OK, &page)
    }

    /// Runs a search and stores its outcome, replacing whatever the session showed before.
    ///
    /// Bad input and provider failures don't count as a search: the previous outcome stays
    /// and only an error message is added on top of it.
    pub async fn submit(&self, form: SearchForm) -> Result<Response, HttpError> {
        let query = match form.to_query() {
            Ok(query) => query,
            Err(invalid) => {
                return self
                    .respond_with_previous(
                        StatusCode::UNPROCESSABLE_ENTITY,
                        &form,
                        Notice::new(NoticeLevel::Error, invalid.to_string()),
                    )
                    .await;
            }
        };

        match run_search(&self.app_context, &query).await {
            Ok(outcome) => {
                let state = SessionState {
                    form,
                    outcome: Some(outcome),
                };
                let page = PageContext::new(&state.form, state.outcome.as_ref())?;
                self.app_context
                    .sessions
                    .save(&self.session.id, state)
                    .await;
                self.respond(StatusCode::OK, &page)
            }
            Err(err) => {
                tracing::warn!(
                    task = "search",
                    location = %query.location,
                    error = %err,
                    "Maps provider failed to complete a search."
                );
                self.respond_with_previous(
                    StatusCode::BAD_GATEWAY,
                    &form,
                    Notice::new(
                        NoticeLevel::Error,
                        format!("Couldn't reach the maps provider, please try again! ({err})"),
                    ),
                )
                .await
            }
        }
    }

    async fn respond_with_previous(
        &self,
        status: StatusCode,
        form: &SearchForm,
        notice: Notice,
    ) -> Result<Response, HttpError> {
        let state = self.app_context.sessions.state(&self.session.id).await;
        let page = PageContext::new(form, state.outcome.as_ref())?.with_map_notice(notice);
        self.respond(status, &page)
    }

    fn respond(&self, status: StatusCode, page: &PageContext) -> Result<Response, HttpError> {
        let html = self.app_context.pages.render(page)?;
        Ok((
            status,
            [(SET_COOKIE, self.session.set_cookie_header())],
            Html(html),
        )
            .into_response())
    }
}

/// Serves the same search as JSON, without touching any session.
pub struct PlacesApiHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> PlacesApiHttpHandler<SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    pub async fn search(&self, form: SearchForm) -> (StatusCode, PlacesResponse) {
        let query = match form.to_query() {
            Ok(query) => query,
            Err(invalid) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    failure(PlacesResponseError::InvalidLocation, invalid.to_string(), None),
                );
            }
        };

        match run_search(&self.app_context, &query).await {
            Ok(SearchOutcome::Found(result)) => (
                StatusCode::OK,
                PlacesResponse {
                    error: false,
                    error_code: None,
                    message: None,
                    center: Some(result.center),
                    places: Some(result.places),
                },
            ),
            Ok(SearchOutcome::LocationNotFound) => (
                StatusCode::OK,
                failure(
                    PlacesResponseError::LocationNotFound,
                    LOCATION_NOT_FOUND.to_string(),
                    None,
                ),
            ),
            Ok(SearchOutcome::NoPlacesNearby { center }) => (
                StatusCode::OK,
                failure(
                    PlacesResponseError::NoPlacesNearby,
                    NO_PLACES_ON_MAP.to_string(),
                    Some(center),
                ),
            ),
            Err(err) => {
                tracing::warn!(
                    task = "search",
                    location = %query.location,
                    error = %err,
                    "Maps provider failed to complete a search."
                );
                (
                    StatusCode::BAD_GATEWAY,
                    failure(PlacesResponseError::ProviderFailure, err.to_string(), None),
                )
            }
        }
    }
}

fn failure(
    error_code: PlacesResponseError,
    message: String,
    center: Option<Coordinate>,
) -> PlacesResponse {
    PlacesResponse {
        error: true,
        error_code: Some(error_code),
        message: Some(message),
        center,
        places: None,
    }
}
