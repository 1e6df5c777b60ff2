//! Lifecycle tests for `Maybe` as seen from outside the crate.

use std::cell::RefCell;
use std::rc::Rc;

use widgetry::Maybe;

/// Records construction and destruction in a shared log.
struct Tracked {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Tracked {
    fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
        log.borrow_mut().push(format!("new {name}"));
        Self { name, log: log.clone() }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(format!("drop {}", self.name));
    }
}

/// No `Default`; can only be built once its inputs are known.
struct Endpoint {
    host: String,
    port: u16,
}

impl From<(&str, u16)> for Endpoint {
    fn from((host, port): (&str, u16)) -> Self {
        Self { host: host.to_owned(), port }
    }
}

#[test]
fn test_deferred_construction_of_non_default_type() {
    let mut endpoint: Maybe<Endpoint> = Maybe::new();
    assert!(endpoint.is_empty());

    let (host, port) = ("localhost", 4000);
    endpoint.construct_from((host, port));
    assert_eq!(endpoint.get().host, "localhost");
    assert_eq!(endpoint.get().port, 4000);
}

#[test]
fn test_reconstruct_after_destroy() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut slot = Maybe::new();
        slot.construct(Tracked::new("a", &log));
        slot.destroy();
        slot.construct(Tracked::new("b", &log));
        assert_eq!(slot.get().name, "b");
    }
    assert_eq!(*log.borrow(), vec!["new a", "drop a", "new b", "drop b"]);
}

#[test]
fn test_struct_field_slot_dropped_with_owner() {
    struct Owner {
        cached: Maybe<Tracked>,
    }

    let log = Rc::new(RefCell::new(Vec::new()));
    let mut owner = Owner { cached: Maybe::new() };
    owner.cached.construct_with(|| Tracked::new("cached", &log));
    drop(owner);
    assert_eq!(*log.borrow(), vec!["new cached", "drop cached"]);
}

#[test]
fn test_destroy_if_constructed_is_idempotent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = Maybe::new();
    slot.destroy_if_constructed();
    slot.construct(Tracked::new("x", &log));
    slot.destroy_if_constructed();
    slot.destroy_if_constructed();
    drop(slot);
    assert_eq!(*log.borrow(), vec!["new x", "drop x"]);
}

#[test]
fn test_into_option_hands_over_ownership() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut slot = Maybe::new();
    slot.construct(Tracked::new("moved", &log));
    let value = slot.into_option().unwrap();
    assert_eq!(*log.borrow(), vec!["new moved"]);
    drop(value);
    assert_eq!(*log.borrow(), vec!["new moved", "drop moved"]);
}

#[test]
fn test_as_option_reflects_state() {
    let mut slot: Maybe<u32> = Maybe::default();
    assert_eq!(slot.as_option(), None);
    slot.construct(7);
    assert_eq!(slot.as_option(), Some(&7));
    // SAFETY: constructed just above.
    assert_eq!(unsafe { *slot.get_unchecked() }, 7);
}
