use simplytest::{
    example::{sum, sum_based, xor},
    Mock, Recorder, Report, Suite, TimesRange,
};

#[test]
fn uncalled_mock_is_reported() {
    let mocked_sum = Mock::new(sum, 1, 10);

    let recorder = Recorder::new();
    let mut suite = Suite::new(xor).with_reporter(recorder.clone());
    suite
        .use_mock(&mocked_sum)
        .unwrap()
        .case("finds 4", 4, vec![4])
        .unwrap();

    let summary = suite.run().unwrap();

    assert_eq!(1, summary.passed);
    assert_eq!(1, summary.mock_mismatches);
    assert_eq!(
        vec![
            Report::Pass {
                suite: "xor".into(),
                case: "finds 4".into(),
            },
            Report::CallCountMismatch {
                mock: "sum".into(),
                observed: 0,
                expected: TimesRange::from(1),
            },
        ],
        recorder.records()
    );
}

#[test]
fn argument_mismatch_is_reported() {
    let mocked_sum = Mock::new(sum, 1, 10).with_args(vec![9, 9]);
    let instance = mocked_sum.instance();

    let recorder = Recorder::new();
    let mut suite = Suite::new(xor).with_reporter(recorder.clone());
    suite
        .use_mock(&mocked_sum)
        .unwrap()
        .predicate("calls the mock", move || instance(vec![4, 1, 2, 1]) == 10)
        .unwrap();

    let summary = suite.run().unwrap();

    assert_eq!(1, summary.mock_mismatches);
    assert_eq!(
        Some(&Report::ArgumentMismatch {
            mock: "sum".into(),
            observed: Some("[4, 1, 2, 1]".into()),
            expected: "[9, 9]".into(),
        }),
        recorder.records().last()
    );
    assert_eq!(
        "[mock] sum was called with [4, 1, 2, 1], but expected [9, 9]",
        recorder.lines()[1]
    );
}

#[test]
fn matching_arguments_are_not_reported() {
    let mocked_sum = Mock::new(sum, 1, 10).with_args(vec![4, 1, 2, 1]);
    let instance = mocked_sum.instance();

    let recorder = Recorder::new();
    let mut suite = Suite::new(xor).with_reporter(recorder.clone());
    suite
        .use_mock(&mocked_sum)
        .unwrap()
        .predicate("calls the mock", move || instance(vec![4, 1, 2, 1]) == 10)
        .unwrap();

    let summary = suite.run().unwrap();

    assert!(summary.is_success());
    assert_eq!(1, recorder.records().len());
}

#[test]
fn mock_called_inside_function_under_test() {
    let mocked_sum = Mock::new(sum, 2..=4, 3);
    let instance = mocked_sum.instance();

    let recorder = Recorder::new();
    let mut suite = Suite::new(move |nums: Vec<i32>| sum_based(&instance, &nums))
        .with_name("sum_based")
        .with_reporter(recorder.clone());
    suite
        .use_mock(&mocked_sum)
        .unwrap()
        .case("uses the preset value", 3, vec![1, 1])
        .unwrap();

    let summary = suite.run().unwrap();

    assert!(summary.is_success());
    assert_eq!(2, mocked_sum.times_called());
    assert_eq!(Some("[1, 1]".to_owned()), mocked_sum.called_with());
}

#[test]
fn mismatches_follow_all_case_records() {
    let first = Mock::new(sum, 1, 0).with_name("first");
    let second = Mock::new(sum, 0, 0).with_name("second");
    let call_second = second.instance();

    let recorder = Recorder::new();
    let mut suite = Suite::new(xor).with_reporter(recorder.clone());
    suite
        .use_mocks([first.boxed(), second.boxed()])
        .unwrap()
        .predicate("calls second", move || call_second(vec![1]) == 0)
        .unwrap()
        .case("still runs", 1, vec![1])
        .unwrap();

    suite.run().unwrap();

    assert_eq!(
        vec![
            "[pass] xor calls second".to_owned(),
            "[pass] xor still runs".to_owned(),
            "[mock] first was called 0 time(s), but expected 1 time(s)".to_owned(),
            "[mock] second was called 1 time(s), but expected 0 time(s)".to_owned(),
        ],
        recorder.lines()
    );
}
