use super::*;

#[test]
fn progress_clamps_overscroll() {
    assert_eq!(Progress::clamped(-0.5).get(), 0.0);
    assert_eq!(Progress::clamped(1.5).get(), 1.0);
    assert_eq!(Progress::clamped(0.25).get(), 0.25);
    assert_eq!(Progress::clamped(f64::NAN), Progress::START);
    assert_eq!(Progress::clamped(f64::INFINITY), Progress::END);
}

#[test]
fn progress_serializes_as_plain_number() {
    let s = serde_json::to_string(&Progress::clamped(0.5)).unwrap();
    assert_eq!(s, "0.5");
    let p: Progress = serde_json::from_str("3.0").unwrap();
    assert_eq!(p, Progress::END);
}

#[test]
fn scroll_range_rejects_inverted_bounds() {
    assert!(ScrollRange::new(10.0, 5.0).is_err());
    assert!(ScrollRange::new(0.0, f64::NAN).is_err());
    assert!(ScrollRange::new(5.0, 5.0).is_ok());
}

#[test]
fn scroll_range_normalizes_positions() {
    let r = ScrollRange::new(100.0, 300.0).unwrap();
    assert_eq!(r.progress_at(100.0).get(), 0.0);
    assert_eq!(r.progress_at(200.0).get(), 0.5);
    assert_eq!(r.progress_at(300.0).get(), 1.0);
    assert_eq!(r.progress_at(-40.0).get(), 0.0);
    assert_eq!(r.progress_at(900.0).get(), 1.0);
}

#[test]
fn empty_scroll_range_steps_at_start() {
    let r = ScrollRange::for_container(50.0, 600.0, 800.0).unwrap();
    assert!(r.is_empty());
    assert_eq!(r.progress_at(49.0), Progress::START);
    assert_eq!(r.progress_at(50.0), Progress::END);
}

#[test]
fn container_range_spans_scrollable_height() {
    let r = ScrollRange::for_container(0.0, 4000.0, 1000.0).unwrap();
    assert_eq!(r.end, 3000.0);
    assert_eq!(r.progress_at(750.0).get(), 0.25);
}

#[test]
fn motion_preference_from_flag() {
    assert_eq!(MotionPreference::from_reduced_flag(true), MotionPreference::Reduced);
    assert!(!MotionPreference::from_reduced_flag(false).is_reduced());
    assert_eq!(MotionPreference::default(), MotionPreference::Full);
}
