use crate::search::models::SearchOutcome;
use crate::search::requests::SearchForm;

/// Per-session UI state. Only a search submission replaces it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Inputs of the last submitted search, shown back in the form.
    pub form: SearchForm,
    /// `None` until the first search of the session completes.
    pub outcome: Option<SearchOutcome>,
}
