use crate::maps::models::PlaceType;
use crate::render::map::{self, MapView};
use crate::render::table::{self, TableView};
use crate::search::consts::{MAX_COUNT, MAX_RADIUS, MIN_COUNT, MIN_RADIUS};
use crate::search::models::SearchOutcome;
use crate::search::requests::SearchForm;
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::sync::Arc;

const INDEX_TEMPLATE: &str = "index";

pub const LOCATION_NOT_FOUND: &str = "Location not found!";
pub const NO_PLACES_ON_MAP: &str = "No places found in this area. Just have something delivered";
pub const NO_PLACES_IN_TABLE: &str = "No results found. Just have something delivered";
pub const AWAITING_SEARCH: &str = "Run a search to see results.";

#[derive(Clone)]
pub struct PageRenderer {
    registry: Arc<Handlebars<'static>>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(INDEX_TEMPLATE, include_str!("templates/index.hbs"))?;
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    pub fn render(&self, page: &PageContext) -> Result<String, RenderError> {
        self.registry.render(INDEX_TEMPLATE, page)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct PlaceTypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize)]
pub struct FormView {
    pub location: String,
    pub place_types: Vec<PlaceTypeOption>,
    pub radius: u32,
    pub min_radius: u32,
    pub max_radius: u32,
    pub count: usize,
    pub min_count: usize,
    pub max_count: usize,
}

impl From<&SearchForm> for FormView {
    fn from(form: &SearchForm) -> Self {
        Self {
            location: form.location.clone(),
            place_types: PlaceType::ALL
                .iter()
                .map(|place_type| PlaceTypeOption {
                    value: place_type.as_str(),
                    label: place_type.label(),
                    selected: *place_type == form.place_type,
                })
                .collect(),
            radius: form.radius.clamp(MIN_RADIUS, MAX_RADIUS),
            min_radius: MIN_RADIUS,
            max_radius: MAX_RADIUS,
            count: form.count.clamp(MIN_COUNT, MAX_COUNT),
            min_count: MIN_COUNT,
            max_count: MAX_COUNT,
        }
    }
}

/// Everything the page template needs: the form plus one of the two page states.
#[derive(Clone, Debug, Serialize)]
pub struct PageContext {
    pub form: FormView,
    pub map_notice: Option<Notice>,
    pub map: Option<MapView>,
    pub map_json: Option<String>,
    pub table_notice: Option<Notice>,
    pub table: Option<TableView>,
}

impl PageContext {
    pub fn new(
        form: &SearchForm,
        outcome: Option<&SearchOutcome>,
    ) -> Result<Self, serde_json::Error> {
        let mut page = Self {
            form: FormView::from(form),
            map_notice: None,
            map: None,
            map_json: None,
            table_notice: None,
            table: None,
        };
        match outcome {
            None => {
                page.table_notice = Some(Notice::new(NoticeLevel::Info, AWAITING_SEARCH));
            }
            Some(SearchOutcome::LocationNotFound) => {
                page.map_notice = Some(Notice::new(NoticeLevel::Error, LOCATION_NOT_FOUND));
                page.table_notice = Some(Notice::new(NoticeLevel::Info, AWAITING_SEARCH));
            }
            Some(SearchOutcome::NoPlacesNearby { .. }) => {
                page.map_notice = Some(Notice::new(NoticeLevel::Warning, NO_PLACES_ON_MAP));
                page.table_notice = Some(Notice::new(NoticeLevel::Warning, NO_PLACES_IN_TABLE));
            }
            Some(SearchOutcome::Found(result)) => {
                let map_view = map::build(result.center, &result.places);
                page.map_json = Some(map_view.to_script_json()?);
                page.map = Some(map_view);
                page.table = Some(table::present(&result.places));
            }
        }
        Ok(page)
    }

    /// Puts a one-off message above the map without touching what is shown below it.
    pub fn with_map_notice(mut self, notice: Notice) -> Self {
        self.map_notice = Some(notice);
        self
    }
}
