use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use stratvec::prelude::*;

// A strategy defined outside the crate, counting how often it is invoked.
// This proves the trait is implementable by "outside crates".
struct CountingSort {
    calls: Arc<AtomicUsize>,
}

impl<T> SortStrategy<T> for CountingSort {
    fn sort(&self, data: &mut [T], cmp: &dyn Comparator<T>) {
        self.calls.fetch_add(1, AtomicOrdering::Relaxed);
        data.sort_by(|a, b| cmp.compare(a, b));
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

// A comparator with its own state rather than a closure.
struct ByDistance {
    origin: i32,
}

impl Comparator<i32> for ByDistance {
    fn compare(&self, a: &i32, b: &i32) -> Ordering {
        (a - self.origin).abs().cmp(&(b - self.origin).abs())
    }
}

#[test]
fn test_external_strategy_is_used() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut v: Vector<i32> = [3, 1, 2].into_iter().collect();
    v.set_strategy(Some(Box::new(CountingSort {
        calls: Arc::clone(&calls),
    })));

    v.sort();
    v.sort_by(&|a: &i32, b: &i32| b.cmp(a));

    assert_eq!(calls.load(AtomicOrdering::Relaxed), 2);
    assert_eq!(v.as_slice(), &[3, 2, 1]);
    assert_eq!(v.strategy().name(), "counting");
}

#[test]
fn test_external_comparator() {
    let origin = ByDistance { origin: 10 };
    for strategy in [
        Box::new(TopDownMergeSort) as BoxedStrategy<i32>,
        Box::new(BottomUpMergeSort),
    ] {
        let mut v: Vector<i32> = [4, 12, 10, 16, 8, 13].into_iter().collect();
        v.set_strategy(Some(strategy));
        v.sort_by(&origin);
        // Ties (12 and 8, 4 and 16) keep their input order.
        assert_eq!(v.as_slice(), &[10, 12, 8, 13, 4, 16]);
    }
}

#[test]
fn test_non_copy_elements() {
    #[derive(Clone, Debug, Default, PartialEq)]
    struct Record {
        name: String,
        score: u32,
    }

    let mut v = Vector::new();
    for (name, score) in [("ada", 3), ("bob", 1), ("cy", 3), ("di", 2)] {
        v.push(Record {
            name: name.to_string(),
            score,
        });
    }
    v.set_strategy(Some(Box::new(BottomUpMergeSort)));
    v.sort_by(&|a: &Record, b: &Record| b.score.cmp(&a.score));

    let names: Vec<&str> = v.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["ada", "cy", "di", "bob"]);

    let top = v.find(|r| r.score == 3).map(|r| r.name.clone());
    assert_eq!(top.as_deref(), Some("ada"));
}
