//! The [`case`](self) module contains the registered test cases and their
//! execution.

use std::fmt::Debug;

use futures::future::LocalBoxFuture;

/// Type erased function under test.
pub(crate) type TestFn<'a, A, R> = Box<dyn Fn(A) -> LocalBoxFuture<'a, R> + 'a>;

/// Type erased predicate of a predicate case.
pub(crate) type PredicateFn<'a> = Box<dyn FnOnce() -> LocalBoxFuture<'a, bool> + 'a>;

/// A single registered test case.
pub(crate) struct Case<'a, A, R> {
    pub title: String,
    pub kind: CaseKind<'a, A, R>,
}

pub(crate) enum CaseKind<'a, A, R> {
    /// Passes if the predicate returns `true`.
    Predicate(PredicateFn<'a>),

    /// Passes if the function under test returns `expected` for `args`.
    Invocation { expected: R, args: A },
}

/// Result of a case that did not panic.
#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Verdict {
    Pass,
    Fail { expected: String, actual: String },
}

impl<'a, A, R> Case<'a, A, R>
where
    R: PartialEq + Debug,
{
    /// Execute the case and compare the result with the expected value.
    pub(crate) async fn execute(self, func: &TestFn<'a, A, R>) -> Verdict {
        match self.kind {
            CaseKind::Predicate(predicate) => {
                let actual = predicate().await;

                Verdict::new(&true, &actual)
            }
            CaseKind::Invocation { expected, args } => {
                let actual = func(args).await;

                Verdict::new(&expected, &actual)
            }
        }
    }
}

impl Verdict {
    fn new<T>(expected: &T, actual: &T) -> Self
    where
        T: PartialEq + Debug,
    {
        if expected == actual {
            Self::Pass
        } else {
            Self::Fail {
                expected: format!("{expected:?}"),
                actual: format!("{actual:?}"),
            }
        }
    }
}
