#[path = "../common/mod.rs"]
mod common;

use tagtune::presence::{Debouncer, PresenceEvent, PresenceState, debounce};

use common::fixtures::{mapped_tag, other_tag};

#[test]
fn continuous_presence_is_one_arrival() {
    let a = mapped_tag();
    let events = debounce(vec![Some(a.clone()), Some(a.clone()), Some(a.clone())]);
    assert_eq!(events, vec![PresenceEvent::TagArrived(a)]);
}

#[test]
fn arrival_then_removal() {
    let a = mapped_tag();
    assert_eq!(
        debounce(vec![Some(a.clone()), None]),
        vec![PresenceEvent::TagArrived(a.clone()), PresenceEvent::TagRemoved(a)]
    );
}

#[test]
fn swap_is_arrival_only() {
    let (a, b) = (mapped_tag(), other_tag());
    assert_eq!(
        debounce(vec![Some(a.clone()), Some(b.clone())]),
        vec![PresenceEvent::TagArrived(a), PresenceEvent::TagArrived(b)]
    );
}

#[test]
fn nothing_in_nothing_out() {
    assert!(debounce(vec![None, None, None]).is_empty());
}

#[test]
fn swap_then_removal_reports_the_second_tag() {
    let (a, b) = (mapped_tag(), other_tag());
    let mut d = Debouncer::new();
    d.observe(Some(a));
    d.observe(Some(b.clone()));
    assert_eq!(d.state(), &PresenceState::Present(b.clone()));
    assert_eq!(d.observe(None), Some(PresenceEvent::TagRemoved(b)));
}
