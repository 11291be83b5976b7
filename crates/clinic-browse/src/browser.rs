//! Record browser
//!
//! Per-view state of a list page: the record store, the active tab, the page
//! and the checked rows. Handlers here are the only way to mutate that state,
//! which keeps the couplings between components in one place:
//! - changing the tab or the rows per page returns to the first page
//! - deleting a record drops it from the selection

use crate::config::BrowserConfig;
use crate::error::BrowseError;
use crate::filter::{self, StatusFilter};
use crate::pager::{self, DisplayedRows, PageSize, PageState};
use crate::selection::Selection;
use clinic_record::{
    Collection, LabelVariant, Record, RecordId, RecordSource, RecordStatus, RecordStore,
    StatusColor,
};
use serde::Serialize;

/// State of one list view
#[derive(Debug, Clone)]
pub struct RecordBrowser<R: Record> {
    store: RecordStore<R>,
    filter: StatusFilter<R::Status>,
    page: PageState,
    selection: Selection,
    config: BrowserConfig,
}

impl<R: Record> RecordBrowser<R> {
    /// Create view over `store`
    ///
    /// # Errors
    /// Returns error if `config` is invalid
    pub fn new(store: RecordStore<R>, config: &BrowserConfig) -> Result<Self, BrowseError> {
        config.validate()?;
        let page = PageState::new(config.page_size()?);

        Ok(Self {
            store,
            filter: StatusFilter::All,
            page,
            selection: Selection::new(),
            config: config.clone(),
        })
    }

    /// Create view over the records of `source`
    ///
    /// # Errors
    /// Returns error if the source fails or `config` is invalid
    pub fn from_source<S: RecordSource<R> + ?Sized>(
        source: &S,
        config: &BrowserConfig,
    ) -> Result<Self, BrowseError> {
        let store = RecordStore::from_source(source)?;
        Self::new(store, config)
    }

    /// Back to mount defaults: all tab, first page, default size, nothing checked
    pub fn reset(&mut self) {
        self.filter = StatusFilter::All;
        self.page = PageState::new(self.page_size_default());
        self.selection.clear();
        tracing::debug!(kind = R::KIND, "view reset");
    }

    // ------------------------------------------------------------------
    // Handlers
    // ------------------------------------------------------------------

    /// Switch tab and return to the first page
    pub fn apply_filter(&mut self, filter: impl Into<StatusFilter<R::Status>>) {
        self.filter = filter.into();
        self.page = self.page.go_to(0);
        tracing::debug!(kind = R::KIND, filter = %self.filter, "filter applied");
    }

    /// Switch tab by wire value; unknown values show an empty tab
    pub fn apply_filter_str(&mut self, value: &str) {
        self.apply_filter(StatusFilter::parse(value));
    }

    /// Go to page `index`
    ///
    /// Indices past the end are kept and render as an empty page.
    pub fn change_page(&mut self, index: usize) {
        self.page = self.page.go_to(index);
        tracing::debug!(kind = R::KIND, page = index, "page changed");
    }

    /// Change rows per page and return to the first page
    ///
    /// # Errors
    /// Returns [`BrowseError::InvalidPageSize`] for zero
    pub fn change_rows_per_page(&mut self, rows: usize) -> Result<(), BrowseError> {
        let size = PageSize::try_from(rows)?;
        self.page = self.page.change_rows_per_page(size);
        tracing::debug!(kind = R::KIND, rows, "rows per page changed");
        Ok(())
    }

    /// Header checkbox: select or clear every record of the current tab
    pub fn toggle_all(&mut self, checked: bool) {
        let ids = self.filtered_ids();
        self.selection = Selection::toggle_all(&ids, checked);
        tracing::debug!(kind = R::KIND, checked, selected = self.selection.len(), "toggled all");
    }

    /// Row checkbox
    ///
    /// Ids not in the store are ignored so the selection never references a
    /// missing record.
    pub fn toggle_one(&mut self, id: &RecordId) {
        if !self.store.contains(id) {
            tracing::debug!(kind = R::KIND, %id, "ignored toggle of unknown record");
            return;
        }
        let selected = self.selection.toggle(id);
        tracing::debug!(kind = R::KIND, %id, selected, "toggled row");
    }

    /// Delete one record and drop it from the selection
    ///
    /// Returns `true` if a record was removed.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        let existed = self.store.contains(id);
        self.store.delete(id);
        self.selection.remove(id);
        tracing::debug!(kind = R::KIND, %id, existed, "delete requested");
        existed
    }

    /// Delete every selected record visible under the current tab
    ///
    /// Latent selections outside the tab are left alone. Returns the number of
    /// records removed.
    pub fn delete_selected(&mut self) -> usize {
        let doomed: Vec<RecordId> = self
            .filtered_ids()
            .into_iter()
            .filter(|id| self.selection.is_selected(id))
            .collect();

        let removed = self.store.delete_many(&doomed);
        for id in &doomed {
            self.selection.remove(id);
        }
        tracing::debug!(kind = R::KIND, removed, "deleted selected rows");
        removed
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    /// Every record of the view
    #[inline]
    #[must_use]
    pub fn records(&self) -> &Collection<R> {
        self.store.get_all()
    }

    /// Active tab
    #[inline]
    #[must_use]
    pub fn filter(&self) -> &StatusFilter<R::Status> {
        &self.filter
    }

    /// Page index and size
    #[inline]
    #[must_use]
    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Checked rows
    #[inline]
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Configuration the view was created with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    /// Records under the active tab
    #[must_use]
    pub fn filtered(&self) -> Vec<&R> {
        filter::apply(self.store.get_all(), &self.filter)
    }

    /// Ids under the active tab
    #[must_use]
    pub fn filtered_ids(&self) -> Vec<RecordId> {
        filter::filtered_ids(self.store.get_all(), &self.filter)
    }

    /// Records on the current page
    #[must_use]
    pub fn visible(&self) -> Vec<&R> {
        let filtered = self.filtered();
        pager::slice(&filtered, self.page).visible().to_vec()
    }

    /// Check whether a record renders as checked in the current tab
    #[must_use]
    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
            && self
                .store
                .get(id)
                .is_some_and(|record| self.filter.matches(record.status()))
    }

    /// Tab strip with counts
    #[must_use]
    pub fn tabs(&self) -> Vec<Tab<R::Status>> {
        filter::available_filters(self.store.get_all())
            .into_iter()
            .map(|fc| Tab {
                label: fc.filter.label().to_string(),
                color: fc.filter.color(),
                variant: fc.filter.label_variant(&self.filter),
                active: fc.filter == self.filter,
                count: fc.count,
                filter: fc.filter,
            })
            .collect()
    }

    /// Everything the rendering layer needs for one frame
    #[must_use]
    pub fn render(&self) -> ViewModel<'_, R> {
        let filtered = self.filtered();
        let filtered_ids: Vec<RecordId> = filtered.iter().map(|r| r.id().clone()).collect();
        let page = pager::slice(&filtered, self.page);

        let rows = page
            .visible()
            .iter()
            .map(|record| Row {
                record: *record,
                selected: self.selection.is_selected(record.id()),
                color: record.status().color(),
            })
            .collect();

        ViewModel {
            kind: R::KIND,
            tabs: self.tabs(),
            rows,
            padding_rows: page.padding(),
            padding_height_px: page.padding_height(self.config.row_height()),
            header: HeaderCheckbox {
                checked: self.selection.all_selected(&filtered_ids),
                indeterminate: self.selection.indeterminate(&filtered_ids),
                selected_count: self.selection.selected_in(&filtered_ids),
            },
            pagination: Pagination {
                page: self.page.index(),
                rows_per_page: self.page.size().get(),
                count: filtered.len(),
                page_count: self.page.page_count(filtered.len()),
                rows_per_page_options: self.config.rows_per_page_options.clone(),
                displayed: page.displayed_rows(),
            },
        }
    }

    fn page_size_default(&self) -> PageSize {
        self.config.page_size().unwrap_or_default()
    }
}

/// One tab of the tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "S: RecordStatus"))]
pub struct Tab<S> {
    /// Filter selected by the tab
    pub filter: StatusFilter<S>,
    /// Tab text
    pub label: String,
    /// Badge count
    pub count: usize,
    /// Badge color
    pub color: StatusColor,
    /// Badge variant
    pub variant: LabelVariant,
    /// Currently selected tab
    pub active: bool,
}

/// One table row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound(serialize = "R: Serialize"))]
pub struct Row<'a, R> {
    /// Record shown in the row
    pub record: &'a R,
    /// Row checkbox state
    pub selected: bool,
    /// Status badge color
    pub color: StatusColor,
}

/// Header checkbox state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HeaderCheckbox {
    /// Every row of the tab checked
    pub checked: bool,
    /// Some rows of the tab checked
    pub indeterminate: bool,
    /// Checked rows in the tab
    pub selected_count: usize,
}

/// Pagination footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Zero-based page index
    pub page: usize,
    /// Rows per page
    pub rows_per_page: usize,
    /// Records under the active tab
    pub count: usize,
    /// Pages under the active tab
    pub page_count: usize,
    /// Rows-per-page selector choices
    pub rows_per_page_options: Vec<usize>,
    /// "from–to of count" range
    pub displayed: DisplayedRows,
}

/// Render input for one frame of a list view
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "R: Serialize"))]
pub struct ViewModel<'a, R: Record> {
    /// Record kind
    pub kind: &'static str,
    /// Tab strip
    pub tabs: Vec<Tab<R::Status>>,
    /// Rows of the current page
    pub rows: Vec<Row<'a, R>>,
    /// Filler rows after the last record
    pub padding_rows: usize,
    /// Filler height in pixels
    pub padding_height_px: usize,
    /// Header checkbox
    pub header: HeaderCheckbox,
    /// Footer
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_domain::{Appointment, AppointmentStatus};
    use clinic_test_utils::appointments_with;

    fn browser(statuses: &[AppointmentStatus]) -> RecordBrowser<Appointment> {
        RecordBrowser::new(
            RecordStore::new(appointments_with(statuses)),
            &BrowserConfig::default(),
        )
        .unwrap()
    }

    fn twelve() -> RecordBrowser<Appointment> {
        use AppointmentStatus::*;
        browser(&[
            Confirmed, Pending, Confirmed, Cancelled, Completed, Pending, Confirmed, Pending,
            Completed, Pending, Confirmed, Pending,
        ])
    }

    #[test]
    fn mounts_with_defaults() {
        let b = twelve();
        assert_eq!(b.filter(), &StatusFilter::All);
        assert_eq!(b.page_state().index(), 0);
        assert_eq!(b.page_state().size().get(), 5);
        assert!(b.selection().is_empty());
        assert_eq!(b.visible().len(), 5);
    }

    #[test]
    fn apply_filter_resets_page() {
        let mut b = twelve();
        b.change_page(2);
        b.apply_filter(AppointmentStatus::Pending);
        assert_eq!(b.page_state().index(), 0);
        assert_eq!(b.filtered().len(), 5);
    }

    #[test]
    fn change_rows_per_page_resets_page() {
        let mut b = twelve();
        b.change_page(1);
        b.change_rows_per_page(10).unwrap();
        assert_eq!(b.page_state().index(), 0);
        assert_eq!(b.visible().len(), 10);
        assert!(matches!(
            b.change_rows_per_page(0),
            Err(BrowseError::InvalidPageSize(0))
        ));
        assert_eq!(b.page_state().size().get(), 10);
    }

    #[test]
    fn toggle_all_uses_filtered_view() {
        let mut b = twelve();
        b.apply_filter(AppointmentStatus::Confirmed);
        b.toggle_all(true);
        assert_eq!(b.selection().len(), 4);

        b.apply_filter(StatusFilter::All);
        let vm = b.render();
        assert!(vm.header.indeterminate);
        assert!(!vm.header.checked);
        assert_eq!(vm.header.selected_count, 4);
    }

    #[test]
    fn filtered_out_selection_is_not_rendered() {
        let mut b = twelve();
        let first = b.records().ids()[0].clone();
        b.toggle_one(&first);
        assert!(b.is_selected(&first));

        b.apply_filter(AppointmentStatus::Cancelled);
        assert!(!b.is_selected(&first));
        assert!(b.selection().is_selected(&first));
    }

    #[test]
    fn toggle_one_ignores_unknown_id() {
        let mut b = twelve();
        let unknown = RecordId::new("removed-upstream");
        b.toggle_one(&unknown);
        assert!(b.selection().is_empty());

        b.toggle_all(true);
        b.toggle_one(&unknown);
        assert!(!b.selection().is_selected(&unknown));
        assert_eq!(b.selection().len(), 12);
    }

    #[test]
    fn delete_prunes_selection() {
        let mut b = twelve();
        let id = b.records().ids()[3].clone();
        b.toggle_one(&id);
        assert!(b.delete(&id));
        assert!(!b.selection().is_selected(&id));
        assert_eq!(b.records().len(), 11);
        assert!(!b.delete(&id));
    }

    #[test]
    fn delete_selected_only_touches_current_tab() {
        let mut b = twelve();
        let ids = b.records().ids();
        // ids[0] confirmed, ids[1] pending, ids[3] cancelled
        b.toggle_one(&ids[0]);
        b.toggle_one(&ids[1]);
        b.toggle_one(&ids[3]);

        b.apply_filter(AppointmentStatus::Pending);
        assert_eq!(b.delete_selected(), 1);
        assert!(!b.records().contains(&ids[1]));
        assert!(b.records().contains(&ids[0]));
        assert_eq!(b.selection().len(), 2);
    }

    #[test]
    fn tabs_track_active_filter() {
        let mut b = twelve();
        b.apply_filter_str("pending");
        let tabs = b.tabs();
        let active: Vec<_> = tabs.iter().filter(|t| t.active).map(|t| t.label.as_str()).collect();
        assert_eq!(active, vec!["Pending"]);
        assert_eq!(tabs[0].count, 12);
        assert_eq!(tabs[0].variant, LabelVariant::Filled);
    }

    #[test]
    fn unknown_filter_string_renders_empty() {
        let mut b = twelve();
        b.apply_filter_str("no-show");
        let vm = b.render();
        assert!(vm.rows.is_empty());
        assert_eq!(vm.pagination.count, 0);
        assert!(vm.tabs.iter().all(|t| !t.active));
    }

    #[test]
    fn render_pads_last_page() {
        let mut b = twelve();
        b.change_page(2);
        let vm = b.render();
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.padding_rows, 3);
        assert_eq!(vm.padding_height_px, 3 * 53);
        assert_eq!(vm.pagination.page_count, 3);
        assert_eq!(vm.pagination.displayed.to_string(), "11\u{2013}12 of 12");
    }

    #[test]
    fn reset_restores_mount_state() {
        let mut b = twelve();
        b.apply_filter(AppointmentStatus::Completed);
        b.change_rows_per_page(25).unwrap();
        b.toggle_all(true);
        b.reset();
        assert_eq!(b.filter(), &StatusFilter::All);
        assert_eq!(b.page_state(), PageState::new(PageSize::DEFAULT));
        assert!(b.selection().is_empty());
        assert_eq!(b.records().len(), 12);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BrowserConfig::new().with_rows_per_page(3);
        let result = RecordBrowser::new(RecordStore::<Appointment>::default(), &config);
        assert!(matches!(result, Err(BrowseError::Config(_))));
    }

    #[test]
    fn view_model_serializes() {
        let b = browser(&[AppointmentStatus::Confirmed]);
        let json = serde_json::to_value(b.render()).unwrap();
        assert_eq!(json["kind"], "appointment");
        assert_eq!(json["tabs"][1]["filter"], "confirmed");
        assert_eq!(json["rows"][0]["color"], "info");
        assert_eq!(json["rows"][0]["record"]["status"], "confirmed");
    }
}
