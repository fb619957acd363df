use flowpath::{
    AscendingRelationalComparator, CollectionsError, DescendingRelationalComparator, List,
    NegationComparator, Value,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(not(feature = "large_tests"))]
const MAX_RANDOM_LIST_SIZE: usize = 200;
#[cfg(feature = "large_tests")]
const MAX_RANDOM_LIST_SIZE: usize = 20_000;

const RNG_SEED: u64 = 0xf10e;

/// How deeply values are nested when exercising flattening.
const NESTING_DEPTH: usize = 200;

fn setup() {
    let _ = env_logger::builder()
        // Include all events in tests
        .filter_level(log::LevelFilter::max())
        // Ensure events are captured by `cargo test`
        .is_test(true)
        // Ignore errors initializing the logger if tests race to configure it
        .try_init();
}

fn number(value: i32) -> Value {
    Value::from(value)
}

#[test]
fn round_trips_arbitrary_arrays() {
    setup();

    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    for size in [0, 1, 2, MAX_RANDOM_LIST_SIZE] {
        let array: Vec<i64> = (0..size).map(|_| rng.gen()).collect();
        let list = List::from_items(array.clone());

        assert_eq!(list.to_array(), array);
        assert_eq!(list.size(), size);
    }
}

#[test]
fn negative_indexing_mirrors_positive_indexing() {
    setup();

    let mut rng = StdRng::seed_from_u64(RNG_SEED);
    let size = rng.gen_range(1..MAX_RANDOM_LIST_SIZE);
    let list: List<usize> = (0..size).collect();
    let signed_size = size as isize;

    for index in 0..signed_size {
        assert_eq!(list.get(index - signed_size), list.get(index));
    }
    assert_eq!(list.get(-1), list.get(signed_size - 1));
    assert_eq!(list.get(-signed_size), list.get(0));
    assert_eq!(list.get(-signed_size - 1), None);
    assert_eq!(list.get(signed_size), None);
}

#[test]
fn inserting_past_the_end_fills_gaps() {
    setup();

    let mut list = List::from_items(vec![number(4), number(5), number(6)]);
    let index = list.size() as isize + 2;
    list.insert(index, Value::from("item")).unwrap();

    assert_eq!(
        list.to_array(),
        vec![
            number(4),
            number(5),
            number(6),
            Value::Null,
            Value::Null,
            Value::from("item")
        ]
    );
}

#[test]
fn failed_operations_leave_the_list_unchanged() {
    setup();

    let mut list = List::from_items(vec![Some('a'), Some('b')]);

    let insert_error = list.insert(-3, Some('z')).unwrap_err();
    assert_eq!(
        insert_error.to_string(),
        "Index -3 is out of range. The minimum index allowed is -2"
    );

    let replace_error = list.replace(2, Some('z')).unwrap_err();
    assert_eq!(
        replace_error,
        CollectionsError::IndexOutOfRange {
            index: 2,
            min: -2,
            max: 1
        }
    );

    assert_eq!(list.delete_at(2), None);
    assert_eq!(list.to_array(), vec![Some('a'), Some('b')]);
}

#[test]
fn flattening_ignores_nesting_depth() {
    setup();

    let list = List::from_items(vec![
        number(1),
        number(2),
        Value::from(vec![
            number(3),
            number(4),
            Value::from(vec![number(5), number(6)]),
        ]),
        number(7),
    ]);
    let expected: Vec<Value> = (1..=7).map(number).collect();
    assert_eq!(list.flatten().to_array(), expected);

    // Build a deeply nested structure: [[[...[0]...]]]
    let mut deep = number(0);
    for _ in 0..NESTING_DEPTH {
        deep = Value::from(vec![deep]);
    }
    let deep_list = List::from_items(vec![deep, Value::from(List::from_items(vec![number(1)]))]);
    assert_eq!(deep_list.flatten().to_array(), vec![number(0), number(1)]);
}

#[test]
fn each_while_treats_zero_as_truthy_and_false_as_a_stop() {
    setup();

    let list = List::from_items(vec![number(1), number(2), number(3)]);

    assert_eq!(list.each_while(|_, _| 0), Some(3));
    assert_eq!(list.each_while(|_, _| Value::from(0)), Some(3));
    assert_eq!(list.each_while(|_, index| index != 1), Some(1));
    assert_eq!(list.each_while(|_, _| Value::Null), Some(0));
    assert_eq!(list.each_while(|_, _| false), Some(0));
}

#[test]
fn clones_are_independent_and_keep_the_comparator() {
    setup();

    let mut list = List::from_items_with_comparator(
        vec![3, 1, 2],
        NegationComparator::new(AscendingRelationalComparator),
    );
    let clone = list.clone();

    list.reverse();
    list.delete_at(0);

    assert_eq!(clone.to_array(), vec![3, 1, 2]);
    assert_eq!(clone.max(), Some(&1));
    assert_eq!(list.to_array(), vec![1, 3]);
}

#[test]
fn constructing_from_a_source_copies_it() {
    setup();

    let mut array = vec![1, 2, 3];
    let from_array = List::from_items(array.clone());
    array.push(4);

    let mut source =
        List::from_items_with_comparator(vec![9, 8], DescendingRelationalComparator::new());
    let from_list = List::from_list(&source);
    source.add(7);

    assert_eq!(from_array.to_array(), vec![1, 2, 3]);
    assert_eq!(from_list.to_array(), vec![9, 8]);
    // The copy falls back to the default ascending comparator
    assert_eq!(from_list.min(), Some(&8));
}
