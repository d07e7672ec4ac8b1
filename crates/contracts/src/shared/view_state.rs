use crate::domain::a001_person::aggregate::{IdValidationError, PersonId};
use crate::shared::error::CatalogError;
use crate::shared::request_generation::{FetchTicket, RequestGenerations};

/// What a view keyed by a person identifier currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus<T> {
    /// The identifier in the URL did not validate; nothing was requested
    Invalid(IdValidationError),
    Loading,
    Ready(T),
    /// Terminal until the identifier changes
    Failed(CatalogError),
}

impl<T> ViewStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Text for the error banner, if the view is in an error state
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Invalid(e) => Some(CatalogError::Validation(e.clone()).to_string()),
            Self::Failed(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// View state driven by the `id` query parameter: activated on every URL change,
/// resolved when the fetch it asked for completes.
pub trait KeyedFetch {
    type Output;

    /// Returns a ticket when a fetch must be issued
    fn activate(&mut self, raw_id: Option<&str>) -> Option<FetchTicket>;

    /// Returns `false` when the outcome was stale and dropped
    fn resolve(&mut self, ticket: &FetchTicket, outcome: Result<Self::Output, CatalogError>)
        -> bool;
}

/// Fetch lifecycle of one view instance.
///
/// `activate` is called whenever the `id` query parameter is (re)read and tells
/// the caller whether a fetch must start; `resolve` applies its outcome unless a
/// newer activation superseded it.
#[derive(Debug, Clone)]
pub struct KeyedView<T> {
    generations: RequestGenerations,
    status: ViewStatus<T>,
}

impl<T> Default for KeyedView<T> {
    fn default() -> Self {
        Self {
            generations: RequestGenerations::new(),
            status: ViewStatus::Loading,
        }
    }
}

impl<T> KeyedView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ViewStatus<T> {
        &self.status
    }

    pub fn person_id(&self) -> Option<PersonId> {
        self.generations.current_person()
    }

    /// Returns a ticket when a fetch must be issued.
    ///
    /// The same valid identifier never refetches, so a failure stays on screen
    /// until the identifier changes. An invalid identifier abandons any fetch in
    /// flight and goes straight to `Invalid`.
    pub fn activate(&mut self, raw_id: Option<&str>) -> Option<FetchTicket> {
        match PersonId::validate_optional(raw_id) {
            Err(e) => {
                self.generations.invalidate();
                self.status = ViewStatus::Invalid(e);
                None
            }
            Ok(id) if self.generations.current_person() == Some(id) => None,
            Ok(id) => {
                self.status = ViewStatus::Loading;
                Some(self.generations.issue(id))
            }
        }
    }

    /// Apply a fetch outcome. Returns `false` (and changes nothing) for a stale ticket.
    pub fn resolve(&mut self, ticket: &FetchTicket, outcome: Result<T, CatalogError>) -> bool {
        if !self.generations.is_current(ticket) {
            return false;
        }
        self.status = match outcome {
            Ok(value) => ViewStatus::Ready(value),
            Err(e) => ViewStatus::Failed(e),
        };
        true
    }
}

impl<T> KeyedFetch for KeyedView<T> {
    type Output = T;

    fn activate(&mut self, raw_id: Option<&str>) -> Option<FetchTicket> {
        KeyedView::activate(self, raw_id)
    }

    fn resolve(&mut self, ticket: &FetchTicket, outcome: Result<T, CatalogError>) -> bool {
        KeyedView::resolve(self, ticket, outcome)
    }
}
