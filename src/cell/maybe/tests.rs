use super::Maybe;
use std::cell::Cell;
use std::rc::Rc;

struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[derive(Debug, PartialEq)]
struct Rect {
    x: i32,
    y: i32,
    w: u32,
    h: u32,
}

impl From<(i32, i32, u32, u32)> for Rect {
    fn from((x, y, w, h): (i32, i32, u32, u32)) -> Self {
        Self { x, y, w, h }
    }
}

#[test]
fn test_construct_ref_destroy_scenario() {
    let mut m: Maybe<i32> = Maybe::new();
    m.construct(42);
    assert_eq!(*m.get(), 42);
    m.destroy();
    assert!(m.is_empty());
}

#[test]
fn test_state_transitions() {
    let mut m: Maybe<u64> = Maybe::default();
    assert!(m.is_empty());
    m.construct_default();
    assert!(!m.is_empty());
    *m.get_mut() += 9;
    assert_eq!(*m.get(), 9);
    m.destroy();
    assert!(m.is_empty());
    m.construct(1);
    assert_eq!(m.into_option(), Some(1));
}

#[test]
fn test_four_argument_constructor() {
    let mut m: Maybe<Rect> = Maybe::new();
    m.construct_from((1, -2, 30, 40));
    assert_eq!(m.get(), &Rect { x: 1, y: -2, w: 30, h: 40 });
}

#[test]
fn test_drop_runs_payload_destructor_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut m = Maybe::new();
        m.construct(DropCounter(drops.clone()));
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_destroy_then_drop_does_not_double_drop() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut m = Maybe::new();
        m.construct(DropCounter(drops.clone()));
        m.destroy();
        assert_eq!(drops.get(), 1);
    }
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_empty_drop_is_noop() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut m: Maybe<DropCounter> = Maybe::new();
        m.destroy_if_constructed();
    }
    assert_eq!(drops.get(), 0);
}

#[test]
fn test_take_moves_value_out() {
    let drops = Rc::new(Cell::new(0));
    let mut m = Maybe::new();
    m.construct(DropCounter(drops.clone()));
    let taken = m.take();
    assert!(m.is_empty());
    assert!(m.take().is_none());
    drop(m);
    assert_eq!(drops.get(), 0);
    drop(taken);
    assert_eq!(drops.get(), 1);
}

#[test]
fn test_addr_points_into_slot() {
    let mut m: Maybe<[u8; 4]> = Maybe::new();
    m.construct([1, 2, 3, 4]);
    let p = m.addr();
    assert_eq!(p, m.get() as *const [u8; 4]);
    // SAFETY: constructed, and no other reference is live.
    unsafe { (*m.addr_mut())[0] = 9 };
    assert_eq!(m.get()[0], 9);
}

#[test]
fn test_panicking_initializer_leaves_slot_empty() {
    let mut m: Maybe<String> = Maybe::new();
    let r = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        m.construct_with(|| panic!("init failed"));
    }));
    assert!(r.is_err());
    assert!(m.is_empty());
}

#[test]
fn test_debug_format() {
    let mut m: Maybe<u8> = Maybe::new();
    assert_eq!(format!("{m:?}"), "Maybe(<empty>)");
    m.construct(3);
    assert_eq!(format!("{m:?}"), "Maybe(3)");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "contract violated: !self.constructed")]
fn test_double_construct_fails_in_diagnostic_build() {
    let mut m: Maybe<i32> = Maybe::new();
    m.construct(1);
    m.construct(2);
}

#[test]
#[should_panic(expected = "contract violated: self.constructed")]
fn test_get_on_empty_panics() {
    let m: Maybe<i32> = Maybe::new();
    let _ = m.get();
}

#[test]
#[should_panic(expected = "contract violated: self.constructed")]
fn test_destroy_on_empty_panics() {
    let mut m: Maybe<i32> = Maybe::new();
    m.destroy();
}

#[test]
#[should_panic(expected = "tests.rs")]
fn test_empty_access_reports_calling_line() {
    let mut m: Maybe<u8> = Maybe::new();
    let _ = m.get_mut();
}
