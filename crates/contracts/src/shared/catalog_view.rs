use crate::domain::a001_person::aggregate::PersonId;
use crate::domain::common::catalog_item::{CatalogItem, ItemCollection};
use crate::shared::error::CatalogError;
use crate::shared::pagination::PaginationController;
use crate::shared::request_generation::FetchTicket;
use crate::shared::view_state::{KeyedFetch, KeyedView, ViewStatus};

/// State behind the purchase-history table and the magazine carousel:
/// one fetched collection plus the page currently shown.
#[derive(Debug, Clone)]
pub struct CatalogViewState {
    view: KeyedView<ItemCollection>,
    pager: PaginationController,
}

impl CatalogViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            view: KeyedView::new(),
            pager: PaginationController::new(page_size, 0),
        }
    }

    pub fn status(&self) -> &ViewStatus<ItemCollection> {
        self.view.status()
    }

    pub fn person_id(&self) -> Option<PersonId> {
        self.view.person_id()
    }

    pub fn pager(&self) -> &PaginationController {
        &self.pager
    }

    pub fn activate(&mut self, raw_id: Option<&str>) -> Option<FetchTicket> {
        let ticket = self.view.activate(raw_id);
        if ticket.is_some() || !matches!(self.view.status(), ViewStatus::Ready(_)) {
            self.pager.reset(0);
        }
        ticket
    }

    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ItemCollection, CatalogError>,
    ) -> bool {
        let total = outcome.as_ref().map(Vec::len).unwrap_or(0);
        if !self.view.resolve(ticket, outcome) {
            return false;
        }
        self.pager.reset(total);
        true
    }

    /// Items of the current page; empty unless loaded
    pub fn visible_items(&self) -> &[CatalogItem] {
        match self.view.status() {
            ViewStatus::Ready(items) => self.pager.visible_slice(items),
            _ => &[],
        }
    }

    /// Loaded, but the service returned nothing
    pub fn is_empty(&self) -> bool {
        self.view.status().ready().is_some_and(|items| items.is_empty())
    }

    pub fn advance(&mut self) -> bool {
        self.pager.advance()
    }

    pub fn retreat(&mut self) -> bool {
        self.pager.retreat()
    }
}

impl KeyedFetch for CatalogViewState {
    type Output = ItemCollection;

    fn activate(&mut self, raw_id: Option<&str>) -> Option<FetchTicket> {
        CatalogViewState::activate(self, raw_id)
    }

    fn resolve(
        &mut self,
        ticket: &FetchTicket,
        outcome: Result<ItemCollection, CatalogError>,
    ) -> bool {
        CatalogViewState::resolve(self, ticket, outcome)
    }
}
