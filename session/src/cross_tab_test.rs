use std::cell::Cell;

use super::*;

fn counting_watch(tabs: &SimulatedTabs) -> (Rc<Cell<u32>>, Subscription) {
    let hits = Rc::new(Cell::new(0));
    let listener: Listener = {
        let hits = Rc::clone(&hits);
        Rc::new(move || hits.set(hits.get() + 1))
    };
    let sub = watch_session_keys(tabs, listener);
    (hits, sub)
}

#[test]
fn session_keys_are_recognised() {
    assert!(is_session_key(Some("accessToken")));
    assert!(is_session_key(Some("user")));
    assert!(is_session_key(None));
}

#[test]
fn unrelated_keys_are_not_session_keys() {
    assert!(!is_session_key(Some("temporaryUserToken")));
    assert!(!is_session_key(Some("gauntlet_dark")));
    assert!(!is_session_key(Some("AccessToken")));
}

#[test]
fn watch_fires_for_token_and_user_mutations() {
    let tabs = SimulatedTabs::new();
    let (hits, _sub) = counting_watch(&tabs);

    tabs.emit(Some(TOKEN_KEY));
    tabs.emit(Some(USER_KEY));

    assert_eq!(hits.get(), 2);
}

#[test]
fn watch_ignores_unrelated_key() {
    let tabs = SimulatedTabs::new();
    let (hits, _sub) = counting_watch(&tabs);

    tabs.emit(Some("theme"));
    tabs.emit(Some("recentSearches"));

    assert_eq!(hits.get(), 0);
}

#[test]
fn watch_fires_when_storage_is_cleared() {
    let tabs = SimulatedTabs::new();
    let (hits, _sub) = counting_watch(&tabs);

    tabs.emit(None);
    assert_eq!(hits.get(), 1);
}

#[test]
fn dropped_watch_stops_receiving() {
    let tabs = SimulatedTabs::new();
    let (hits, sub) = counting_watch(&tabs);
    drop(sub);

    tabs.emit(Some(TOKEN_KEY));
    assert_eq!(hits.get(), 0);
    assert_eq!(tabs.listener_count(), 0);
}
