use std::cell::RefCell;
use std::rc::Rc;

use crate::model::{DisplaySetDescriptor, Labelmap3D};
use crate::panel::{PanelError, Selection};

use super::{AppContext, AppError};

const SERIES: &str = "1.2.840.113619.2.55.3";

fn descriptor(labelmap_index: usize, is_loaded: bool) -> DisplaySetDescriptor {
    DisplaySetDescriptor {
        labelmap_index,
        series_date: "20230101".to_string(),
        series_time: format!("09000{labelmap_index}"),
        series_description: String::new(),
        is_loaded,
    }
}

fn seeded_context() -> AppContext {
    let mut app = AppContext::new();
    app.catalog_mut().insert(SERIES, descriptor(0, true), true);
    app.catalog_mut().insert(SERIES, descriptor(1, false), true);
    app.store_mut().mutate(SERIES, |series| {
        series.push_labelmap(Labelmap3D::default());
    });
    app
}

#[test]
fn switch_loads_target_and_marks_catalog() {
    let mut app = seeded_context();

    let outcome = app.switch_labelmap(SERIES, 1).expect("switch");
    assert_eq!(outcome, Selection::Changed(1));
    assert_eq!(app.render().requests(), 1);
    assert!(
        app.catalog()
            .descriptor(SERIES, 1)
            .expect("descriptor")
            .is_loaded
    );
    let state = app.store().series_state(SERIES).expect("series");
    assert_eq!(state.active_labelmap_index, 1);
    assert_eq!(state.labelmaps.len(), 2);
}

#[test]
fn switch_to_unknown_display_set_is_an_error() {
    let mut app = seeded_context();
    let result = app.switch_labelmap(SERIES, 7);
    assert!(matches!(
        result,
        Err(AppError::UnknownDisplaySet {
            labelmap_index: 7,
            ..
        })
    ));
}

#[test]
fn failed_load_keeps_state_and_catalog_untouched() {
    let mut app = AppContext::new();
    app.catalog_mut().insert(SERIES, descriptor(0, true), true);
    app.catalog_mut().insert(SERIES, descriptor(1, false), false);
    app.store_mut().mutate(SERIES, |series| {
        series.push_labelmap(Labelmap3D::default());
    });

    let result = app.switch_labelmap(SERIES, 1);
    assert!(matches!(result, Err(AppError::Panel(PanelError::Load(_)))));
    assert_eq!(app.render().requests(), 0);
    let state = app.store().series_state(SERIES).expect("series");
    assert_eq!(state.active_labelmap_index, 0);
    assert!(
        !app.catalog()
            .descriptor(SERIES, 1)
            .expect("descriptor")
            .is_loaded
    );
}

#[test]
fn select_segment_requires_an_active_labelmap() {
    let mut app = AppContext::new();
    let result = app.select_segment(SERIES, 2);
    assert!(matches!(result, Err(AppError::NoActiveLabelmap { .. })));
}

#[test]
fn segment_selection_writes_then_refreshes() {
    let mut app = seeded_context();

    let outcome = app.select_segment(SERIES, 4).expect("select");
    assert_eq!(outcome, Selection::Changed(4));
    assert_eq!(app.render().requests(), 1);

    let outcome = app.select_segment(SERIES, 4).expect("select");
    assert_eq!(outcome, Selection::AlreadyActive(4));
    assert_eq!(app.render().requests(), 1);

    let outcome = app.decrement_segment(SERIES).expect("select");
    assert_eq!(outcome, Selection::Changed(3));
}

#[test]
fn store_notifies_listeners_after_each_write() {
    let mut app = seeded_context();
    let seen: Rc<RefCell<Vec<String>>> = Rc::default();
    let sink = Rc::clone(&seen);
    app.store_mut()
        .subscribe(Box::new(move |series_key| sink.borrow_mut().push(series_key.to_string())));

    let revision_before = app.store().revision();
    app.select_segment(SERIES, 2).expect("select");
    assert_eq!(*seen.borrow(), vec![SERIES.to_string()]);
    assert!(app.store().revision() > revision_before);
}

#[test]
fn brush_radius_round_trips_with_clamping() {
    let mut app = AppContext::new();
    app.set_brush_radius(SERIES, 120.0);
    assert_eq!(app.brush_radius(SERIES), crate::model::MAX_BRUSH_RADIUS);
    assert_eq!(app.brush_radius("other-series"), crate::model::DEFAULT_BRUSH_RADIUS);
}
