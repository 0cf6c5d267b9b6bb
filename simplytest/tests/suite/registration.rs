use simplytest::{
    example::{sum, xor},
    Error, Expectation, Mock, Suite,
};

fn total(nums: Vec<i32>) -> i32 {
    nums.into_iter().sum()
}

struct Window<T>(Vec<T>);

impl<T: Copy + Default> Window<T> {
    fn first(values: Vec<T>) -> T {
        Window(values).0.first().copied().unwrap_or_default()
    }

    fn last(values: Vec<T>) -> T {
        Window(values).0.last().copied().unwrap_or_default()
    }
}

#[test]
fn empty_title_is_rejected() {
    let mut suite = Suite::new(xor);

    assert!(matches!(
        suite.case("", 0, vec![]),
        Err(Error::EmptyTitle)
    ));
    assert!(matches!(
        suite.predicate(String::new(), || true),
        Err(Error::EmptyTitle)
    ));
    assert_eq!(0, suite.case_count());

    suite.case("valid", 1, vec![1]).unwrap();
    assert!(suite.case("", 0, vec![]).is_err());
    assert_eq!(1, suite.case_count());
}

#[test]
fn duplicate_mock_is_rejected() {
    let first = Mock::new(sum, 1, 10);
    let second = Mock::new(sum, 2, 20);

    let mut suite = Suite::new(xor);
    suite.use_mock(&first).unwrap();

    let err = suite.use_mock(&second).err().unwrap();
    assert!(matches!(err, Error::DuplicateMock(name) if name == "sum"));
    assert_eq!(1, suite.mock_count());
}

#[test]
fn duplicate_check_ignores_case() {
    let first = Mock::new(sum, 1, 10);
    let second = Mock::new(total, 1, 10).with_name("SUM");

    let mut suite = Suite::new(xor);
    suite.use_mock(&first).unwrap();

    assert!(matches!(
        suite.use_mock(&second),
        Err(Error::DuplicateMock(name)) if name == "SUM"
    ));
    assert_eq!(1, suite.mock_count());
}

#[test]
fn failing_batch_adds_nothing() {
    let sum_mock = Mock::new(sum, 1, 10);
    let total_mock = Mock::new(total, 1, 10);
    let other_sum = Mock::new(sum, 1, 10);

    let mut suite = Suite::new(xor);
    let batch: Vec<Box<dyn Expectation>> =
        vec![sum_mock.boxed(), total_mock.boxed(), other_sum.boxed()];

    assert!(matches!(
        suite.use_mocks(batch),
        Err(Error::DuplicateMock(_))
    ));
    assert_eq!(0, suite.mock_count());

    suite
        .use_mocks([sum_mock.boxed(), total_mock.boxed()])
        .unwrap();
    assert_eq!(2, suite.mock_count());
}

#[test]
fn mocks_of_different_types_share_a_suite() {
    let sum_mock = Mock::new(sum, 0, 10);
    let label = Mock::new(|n: u8| n.to_string(), 0, String::from("x")).with_name("label");

    let mut suite = Suite::new(xor);
    suite
        .use_mocks([sum_mock.boxed(), label.boxed()])
        .unwrap();

    assert_eq!(2, suite.mock_count());
}

#[test]
fn methods_of_generic_type_are_distinct_mocks() {
    let first = Mock::new(Window::<u8>::first, 1, 0);
    let last = Mock::new(Window::<u8>::last, 1, 0);

    assert_eq!("first", first.name());
    assert_eq!("last", last.name());

    let mut suite = Suite::new(xor);
    suite.use_mock(&first).unwrap().use_mock(&last).unwrap();

    assert_eq!(2, suite.mock_count());
}
