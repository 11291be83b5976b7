use clinic_browse::{apply, slice, BrowserConfig, PageSize, PageState, RecordBrowser, StatusFilter};
use clinic_domain::{Appointment, AppointmentStatus};
use clinic_record::{Record, RecordId, RecordStore};
use clinic_test_utils::{appointments_with, init_tracing};
use pretty_assertions::assert_eq;
use AppointmentStatus::{Cancelled, Completed, Confirmed, Pending};

fn browser(statuses: &[AppointmentStatus]) -> RecordBrowser<Appointment> {
    init_tracing();
    RecordBrowser::new(
        RecordStore::new(appointments_with(statuses)),
        &BrowserConfig::default(),
    )
    .unwrap()
}

#[test]
fn confirmed_tab_fits_on_one_page() {
    let mut view = browser(&[
        Confirmed, Pending, Confirmed, Completed, Pending, Confirmed, Cancelled, Pending,
        Completed, Confirmed,
    ]);

    view.apply_filter(Confirmed);
    assert_eq!(view.filtered().len(), 4);

    let frame = view.render();
    assert_eq!(frame.pagination.page, 0);
    assert_eq!(frame.pagination.rows_per_page, 5);
    assert_eq!(frame.rows.len(), 4);
    assert_eq!(frame.padding_rows, 0);
    assert_eq!(frame.pagination.displayed.to_string(), "1\u{2013}4 of 4");
}

#[test]
fn deleting_last_cancelled_empties_its_tab() {
    let mut view = browser(&[
        Confirmed, Pending, Completed, Cancelled, Pending, Confirmed, Completed, Pending,
        Confirmed, Completed,
    ]);
    let cancelled = RecordId::new("appt-3");
    assert_eq!(view.records().find(&cancelled).map(Record::status), Some(Cancelled));

    view.toggle_all(true);
    assert!(view.selection().is_selected(&cancelled));

    assert!(view.delete(&cancelled));

    let tabs = view.tabs();
    let cancelled_tab = tabs
        .iter()
        .find(|tab| tab.filter == StatusFilter::Status(Cancelled))
        .unwrap();
    assert_eq!(cancelled_tab.count, 0);
    assert_eq!(tabs[0].count, 9);

    view.apply_filter(Cancelled);
    assert!(view.visible().is_empty());
    assert!(!view.selection().is_selected(&cancelled));
    assert_eq!(view.selection().len(), 9);
    assert!(!view.render().header.indeterminate);
}

#[test]
fn stale_page_after_narrowing_filter_renders_empty_with_padding() {
    init_tracing();
    let mut statuses = vec![Pending; 15];
    statuses[1] = Cancelled;
    statuses[7] = Cancelled;
    statuses[12] = Cancelled;
    let collection = appointments_with(&statuses);

    let third_page = PageState::new(PageSize::DEFAULT).go_to(2);
    let everything = apply(&collection, &StatusFilter::All);
    assert_eq!(slice(&everything, third_page).len(), 5);

    // Page index not yet reset when the narrower filter is applied
    let narrowed = apply(&collection, &StatusFilter::Status(Cancelled));
    assert_eq!(narrowed.len(), 3);

    let page = slice(&narrowed, third_page);
    assert!(page.is_empty());
    assert_eq!(page.padding(), 12);
}

#[test]
fn browser_handler_resets_stale_page_on_filter() {
    let mut statuses = vec![Pending; 15];
    statuses[1] = Cancelled;
    statuses[7] = Cancelled;
    statuses[12] = Cancelled;
    let mut view = browser(&statuses);

    view.change_page(2);
    assert_eq!(view.visible().len(), 5);

    view.apply_filter(Cancelled);
    let frame = view.render();
    assert_eq!(frame.pagination.page, 0);
    assert_eq!(frame.rows.len(), 3);
    assert_eq!(frame.padding_rows, 0);
}

#[test]
fn deleting_selected_rows_in_tab_updates_counts() {
    let mut view = browser(&[Confirmed, Pending, Confirmed, Pending, Pending, Completed]);

    view.apply_filter(Pending);
    view.toggle_all(true);
    assert_eq!(view.render().header.selected_count, 3);

    assert_eq!(view.delete_selected(), 3);
    assert!(view.selection().is_empty());
    assert!(view.visible().is_empty());

    view.apply_filter(StatusFilter::All);
    assert_eq!(
        view.records().ids(),
        vec![
            RecordId::new("appt-0"),
            RecordId::new("appt-2"),
            RecordId::new("appt-5"),
        ]
    );
}

#[test]
fn toggling_missing_record_never_reaches_selection() {
    let mut view = browser(&[Pending, Confirmed, Pending]);
    let missing = RecordId::new("appt-99");

    view.toggle_one(&missing);
    let _ = view.render();
    assert_eq!(view.delete_selected(), 0);
    view.apply_filter(Pending);

    assert!(!view.selection().is_selected(&missing));
    assert!(view.selection().is_empty());
    assert_eq!(view.render().header.selected_count, 0);
}
