#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn local_store_is_empty_outside_browser() {
    assert!(LocalSessionStore.load().is_none());
}

#[test]
fn local_store_save_and_clear_are_noops_but_callable() {
    let session = Session { token: "t".to_owned(), username: "ada".to_owned() };
    LocalSessionStore.save(&session);
    assert!(LocalSessionStore.load().is_none());
    LocalSessionStore.clear();
}
