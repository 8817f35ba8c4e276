use super::*;

#[test]
fn new_flag_is_live() {
    assert!(!CancelFlag::new().is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let flag = CancelFlag::new();
    let pending = flag.clone();
    flag.cancel();
    assert!(pending.is_cancelled());
}

#[cfg(not(feature = "csr"))]
#[test]
fn schedule_never_fires_outside_browser() {
    let fired = std::rc::Rc::new(std::cell::Cell::new(false));
    let flag_fired = fired.clone();
    schedule(Duration::ZERO, CancelFlag::new(), move || flag_fired.set(true));
    assert!(!fired.get());
}
