use contracts::dashboard::DashboardSummary;
use contracts::sales::SaleRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

/// Which end of the date range a filter change targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// Coordinator state for the dashboard page.
///
/// Owns everything shared between the summary panel, the sales list and the
/// add-sale form: the fetched collections, the date range, loading and error
/// flags, and the form-visibility toggle. All updates go through the methods
/// below; views receive the signals read-only.
///
/// Each fetch type carries a monotonically increasing request token. A
/// response is applied only if its token is still the latest issued, so a
/// slow response can never overwrite the result of a later request.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub summary: RwSignal<Option<DashboardSummary>>,
    pub sales: RwSignal<Vec<SaleRecord>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// ISO `YYYY-MM-DD`, empty string when the bound is unset.
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub show_add_form: RwSignal<bool>,
    summary_token: RwSignal<u64>,
    sales_token: RwSignal<u64>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            summary: RwSignal::new(None),
            sales: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            date_from: RwSignal::new(String::new()),
            date_to: RwSignal::new(String::new()),
            show_add_form: RwSignal::new(false),
            summary_token: RwSignal::new(0),
            sales_token: RwSignal::new(0),
        }
    }

    /// Load the aggregate summary. On failure the summary is cleared so the
    /// panel never shows a snapshot older than the reported error.
    pub fn load_summary(self) {
        let token = issue_token(self.summary_token);
        self.loading.set(true);
        self.error.set(None);

        spawn_local(async move {
            let result = api::fetch_summary().await;
            if !is_latest(self.summary_token, token) {
                return;
            }
            self.loading.set(false);
            match result {
                Ok(summary) => {
                    self.summary.set(Some(summary));
                }
                Err(e) => {
                    log::error!("dashboard summary fetch failed: {}", e);
                    self.error.set(Some(e));
                    self.summary.set(None);
                }
            }
        });
    }

    /// Load the sales collection for the current date range.
    pub fn load_sales(self) {
        let token = issue_token(self.sales_token);
        self.loading.set(true);
        self.error.set(None);
        let start = self.date_from.get_untracked();
        let end = self.date_to.get_untracked();

        spawn_local(async move {
            let result = api::fetch_sales(&start, &end).await;
            if !is_latest(self.sales_token, token) {
                return;
            }
            self.loading.set(false);
            match result {
                Ok(records) => {
                    self.sales.set(records);
                }
                Err(e) => {
                    log::error!("sales fetch failed: {}", e);
                    self.error.set(Some(e));
                    self.sales.set(Vec::new());
                }
            }
        });
    }

    /// Update one bound of the date range. The refetch itself is driven by
    /// the page effect subscribed to both bounds.
    pub fn set_date_bound(&self, bound: DateBound, value: String) {
        match bound {
            DateBound::Start => self.date_from.set(value),
            DateBound::End => self.date_to.set(value),
        }
    }

    /// Reset both bounds; the next fetch omits both query parameters.
    pub fn clear_dates(&self) {
        self.date_from.set(String::new());
        self.date_to.set(String::new());
    }

    pub fn toggle_add_form(&self) {
        self.show_add_form.update(|visible| *visible = !*visible);
    }

    /// Called by the add-sale form after a successful submit: refresh both
    /// collections and hide the form.
    pub fn on_sale_added(self) {
        self.load_summary();
        self.load_sales();
        self.show_add_form.set(false);
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

fn issue_token(counter: RwSignal<u64>) -> u64 {
    let token = counter.get_untracked() + 1;
    counter.set(token);
    token
}

fn is_latest(counter: RwSignal<u64>, token: u64) -> bool {
    counter.get_untracked() == token
}
