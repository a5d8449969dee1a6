//! Closure capture in loops: a per-iteration copy versus shared, live state.
//!
//! Rust closures borrow by default and `move` takes ownership. A closure
//! cannot outlive a borrowed loop variable, so the "everyone sees the final
//! value" case is built explicitly with a shared `Rc<Cell<_>>` counter.

use std::cell::Cell;
use std::rc::Rc;

pub type Reporter = Box<dyn Fn() -> i32>;

/// 每次迭代以 `move` 複製計數器，依建立順序呼叫得到 0..count
pub fn capture_by_value(count: i32) -> Vec<Reporter> {
    let mut reporters: Vec<Reporter> = Vec::new();
    for i in 0..count {
        reporters.push(Box::new(move || i));
    }
    reporters
}

/// 所有 closure 共用同一個計數器；迴圈結束後全部回報最終值 `count`
pub fn capture_shared(count: i32) -> Vec<Reporter> {
    let counter = Rc::new(Cell::new(0));
    let mut reporters: Vec<Reporter> = Vec::new();
    while counter.get() < count {
        let shared = Rc::clone(&counter);
        reporters.push(Box::new(move || shared.get()));
        counter.set(counter.get() + 1);
    }
    reporters
}

fn make_reporter(x: i32) -> Reporter {
    Box::new(move || x)
}

/// 透過工廠函式明確綁定每次迭代的值
pub fn capture_via_factory(count: i32) -> Vec<Reporter> {
    (0..count).map(make_reporter).collect()
}

pub fn invoke_all(reporters: &[Reporter]) -> Vec<i32> {
    reporters.iter().map(|report| report()).collect()
}

/// Value run followed by the shared run, e.g. `0 1 2 3 4 4 4 4` for 4.
pub fn run_demo(count: i32) -> Vec<i32> {
    let mut outputs = invoke_all(&capture_by_value(count));
    tracing::debug!("value capture produced {:?}", outputs);

    let shared = invoke_all(&capture_shared(count));
    tracing::debug!("shared capture produced {:?}", shared);

    outputs.extend(shared);
    outputs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_capture_sees_each_iteration() {
        assert_eq!(invoke_all(&capture_by_value(4)), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_shared_capture_sees_final_value() {
        assert_eq!(invoke_all(&capture_shared(4)), vec![4, 4, 4, 4]);
    }

    #[test]
    fn test_factory_binding_matches_value_capture() {
        assert_eq!(
            invoke_all(&capture_via_factory(4)),
            invoke_all(&capture_by_value(4))
        );
    }

    #[test]
    fn test_run_demo_output() {
        assert_eq!(run_demo(4), vec![0, 1, 2, 3, 4, 4, 4, 4]);
        assert!(run_demo(0).is_empty());
    }
}
