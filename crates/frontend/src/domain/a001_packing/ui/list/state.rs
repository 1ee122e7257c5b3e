use contracts::domain::a001_packing::{HistoryQuery, PackingHeader};
use contracts::shared::envelope::Pagination;
use leptos::prelude::*;

use crate::domain::a001_packing::api::HistoryPage;
use crate::domain::a001_packing::selection::SelectionSet;
use crate::shared::error::AppError;

/// A history request that has been issued but not yet settled
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingQuery {
    pub ticket: u64,
    pub query: HistoryQuery,
}

#[derive(Clone, Debug)]
pub struct HistoryState {
    pub items: Vec<PackingHeader>,
    pub start_date: String,
    pub end_date: String,
    pub pagination: Pagination,
    pub page_size: u32,
    pub selection: SelectionSet,
    pub loading: bool,
    pub error: Option<AppError>,
    /// Ticket of the most recently issued request; older responses are stale
    latest_ticket: u64,
    /// Last pagination confirmed by the server, restored when a fetch fails
    committed: Pagination,
}

impl HistoryState {
    /// Both dates default to `today` (`YYYY-MM-DD`)
    pub fn new(today: &str, page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            start_date: today.to_string(),
            end_date: today.to_string(),
            pagination: Pagination::default(),
            page_size,
            selection: SelectionSet::new(),
            loading: false,
            error: None,
            latest_ticket: 0,
            committed: Pagination::default(),
        }
    }

    /// Every issued request supersedes the previous one and drops the
    /// selection, which belongs to the result set being replaced.
    fn issue(&mut self, page: u32) -> PendingQuery {
        if !self.loading {
            self.committed = self.pagination;
        }
        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        self.selection.clear();
        self.pagination.current_page = page;
        PendingQuery {
            ticket: self.latest_ticket,
            query: HistoryQuery {
                start_date: self.start_date.clone(),
                end_date: self.end_date.clone(),
                page,
                limit: self.page_size,
            },
        }
    }

    pub fn set_range(&mut self, start_date: String, end_date: String) -> PendingQuery {
        self.start_date = start_date;
        self.end_date = end_date;
        self.issue(1)
    }

    pub fn set_start_date(&mut self, start_date: String) -> PendingQuery {
        let end_date = self.end_date.clone();
        self.set_range(start_date, end_date)
    }

    pub fn set_end_date(&mut self, end_date: String) -> PendingQuery {
        let start_date = self.start_date.clone();
        self.set_range(start_date, end_date)
    }

    /// Refused outside `1..=total_pages` and while a fetch is in flight
    pub fn go_to_page(&mut self, page: u32) -> Option<PendingQuery> {
        if self.loading || page < 1 || page > self.pagination.total_pages {
            return None;
        }
        Some(self.issue(page))
    }

    pub fn next_page(&mut self) -> Option<PendingQuery> {
        if !self.can_go_next() {
            return None;
        }
        self.go_to_page(self.pagination.current_page + 1)
    }

    pub fn prev_page(&mut self) -> Option<PendingQuery> {
        if !self.can_go_prev() {
            return None;
        }
        self.go_to_page(self.pagination.current_page - 1)
    }

    /// Reload the current page (after save/delete, or on demand)
    pub fn refresh(&mut self) -> PendingQuery {
        let page = self.pagination.current_page.max(1);
        self.issue(page)
    }

    /// Apply a response; `false` if a newer request superseded it
    pub fn apply(&mut self, ticket: u64, page: HistoryPage) -> bool {
        if ticket != self.latest_ticket {
            log::debug!("Discarding stale history response #{}", ticket);
            return false;
        }
        self.items = page.items;
        self.pagination = page.pagination;
        self.committed = page.pagination;
        self.loading = false;
        true
    }

    pub fn fail(&mut self, ticket: u64, error: AppError) -> bool {
        if ticket != self.latest_ticket {
            log::debug!("Discarding stale history error #{}", ticket);
            return false;
        }
        self.error = Some(error);
        self.pagination = self.committed;
        self.loading = false;
        true
    }

    pub fn can_go_prev(&self) -> bool {
        !self.loading && self.pagination.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        !self.loading && self.pagination.current_page < self.pagination.total_pages
    }

    /// At least one row is selected, so the batch print action is offered
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.items.iter().map(|h| h.pack_nomor.clone()).collect()
    }

    pub fn toggle_all(&mut self) {
        let visible = self.visible_ids();
        self.selection.toggle_all(&visible);
    }
}

pub fn create_state(today: &str, page_size: u32) -> RwSignal<HistoryState> {
    RwSignal::new(HistoryState::new(today, page_size))
}
