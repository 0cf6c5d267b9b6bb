//! The [`suite`](self) module implements the [`Suite`] test runner.

use std::fmt::Debug;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::{executor::block_on, future::ready, FutureExt};
use tracing::{debug, warn};

use crate::case::{Case, CaseKind, TestFn, Verdict};
use crate::error::{Error, Result};
use crate::misc::{function_name, panic_message};
use crate::mock::Expectation;
use crate::report::{ConsoleReporter, Report, Reporter, Summary};

/// Runs a list of test cases against a function under test and verifies the
/// mocks the function depends on.
///
/// Cases are executed in registration order. After the last case the usage of
/// every registered mock is checked against its expectations. All outcomes are
/// written to the [`Reporter`] of the suite, [`ConsoleReporter`] by default.
///
/// ```
/// use simplytest::{example::xor, Suite};
///
/// let mut suite = Suite::new(xor);
/// suite
///     .case("finds number at start", 4, vec![4, 1, 2, 1, 2])?
///     .predicate("returns 0 when none found", || xor(vec![2, 1, 2, 1]) == 0)?;
///
/// let summary = suite.run()?;
/// assert!(summary.is_success());
/// # Ok::<(), simplytest::Error>(())
/// ```
#[must_use]
pub struct Suite<'a, A, R> {
    name: String,
    func: TestFn<'a, A, R>,
    cases: Vec<Case<'a, A, R>>,
    mocks: Vec<Box<dyn Expectation + 'a>>,
    reporter: Box<dyn Reporter + 'a>,
}

impl<'a, A, R> Suite<'a, A, R>
where
    A: 'a,
    R: 'a,
{
    /// Create a new suite for the synchronous function `func`.
    ///
    /// The display name of the suite is derived from `func`, use
    /// [`with_name`](Suite::with_name) to set it explicitly.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(A) -> R + 'a,
    {
        let name = function_name::<F>();

        Self::with_func(name, Box::new(move |args| ready(func(args)).boxed_local()))
    }

    /// Create a new suite for the asynchronous function `func`.
    pub fn new_async<F, Fut>(func: F) -> Self
    where
        F: Fn(A) -> Fut + 'a,
        Fut: Future<Output = R> + 'a,
    {
        let name = function_name::<F>();

        Self::with_func(name, Box::new(move |args| func(args).boxed_local()))
    }

    fn with_func(name: String, func: TestFn<'a, A, R>) -> Self {
        Self {
            name,
            func,
            cases: Vec::new(),
            mocks: Vec::new(),
            reporter: Box::new(ConsoleReporter),
        }
    }

    /// Set the display name of the suite.
    pub fn with_name<N: Into<String>>(mut self, name: N) -> Self {
        self.name = name.into();

        self
    }

    /// Set the sink the records of the run are written to.
    pub fn with_reporter<T>(mut self, reporter: T) -> Self
    where
        T: Reporter + 'a,
    {
        self.reporter = Box::new(reporter);

        self
    }

    /// Display name of the suite.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered cases.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Number of registered mocks.
    #[must_use]
    pub fn mock_count(&self) -> usize {
        self.mocks.len()
    }

    /// Register a single mock.
    ///
    /// The suite stores a handle to `mock`, the tracked state stays shared
    /// with the caller.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateMock`] if a mock with the same name is
    /// already registered.
    pub fn use_mock<M>(&mut self, mock: &M) -> Result<&mut Self>
    where
        M: Expectation + Clone + 'a,
    {
        self.use_mocks([Box::new(mock.clone()) as Box<dyn Expectation + 'a>])
    }

    /// Register a batch of mocks.
    ///
    /// Names are compared case-insensitively. The batch is checked against
    /// the registered mocks and against itself before anything is added, so a
    /// failing call leaves the registered mocks untouched.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateMock`] naming the first duplicate found.
    pub fn use_mocks<I>(&mut self, mocks: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = Box<dyn Expectation + 'a>>,
    {
        let mocks = mocks.into_iter().collect::<Vec<_>>();

        let mut names = self
            .mocks
            .iter()
            .map(|mock| mock.name().to_lowercase())
            .collect::<Vec<_>>();

        for mock in &mocks {
            let name = mock.name();
            let key = name.to_lowercase();
            if names.contains(&key) {
                return Err(Error::DuplicateMock(name));
            }

            names.push(key);
        }

        for mock in mocks {
            debug!(suite = %self.name, mock = %mock.name(), "registered mock");

            self.mocks.push(mock);
        }

        Ok(self)
    }

    /// Register a case that passes if the function under test returns
    /// `expected` when called with `args`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyTitle`] if `title` is empty.
    pub fn case<T>(&mut self, title: T, expected: R, args: A) -> Result<&mut Self>
    where
        T: Into<String>,
    {
        self.push(title.into(), CaseKind::Invocation { expected, args })
    }

    /// Register a case that passes if `predicate` returns `true`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyTitle`] if `title` is empty.
    pub fn predicate<T, F>(&mut self, title: T, predicate: F) -> Result<&mut Self>
    where
        T: Into<String>,
        F: FnOnce() -> bool + 'a,
    {
        let predicate = Box::new(move || ready(predicate()).boxed_local());

        self.push(title.into(), CaseKind::Predicate(predicate))
    }

    /// Register a case that passes if the future returned by `predicate`
    /// resolves to `true`.
    ///
    /// # Errors
    /// Returns [`Error::EmptyTitle`] if `title` is empty.
    pub fn predicate_async<T, F, Fut>(&mut self, title: T, predicate: F) -> Result<&mut Self>
    where
        T: Into<String>,
        F: FnOnce() -> Fut + 'a,
        Fut: Future<Output = bool> + 'a,
    {
        let predicate = Box::new(move || predicate().boxed_local());

        self.push(title.into(), CaseKind::Predicate(predicate))
    }

    fn push(&mut self, title: String, kind: CaseKind<'a, A, R>) -> Result<&mut Self> {
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        self.cases.push(Case { title, kind });

        Ok(self)
    }
}

impl<'a, A, R> Suite<'a, A, R>
where
    A: 'a,
    R: PartialEq + Debug + 'a,
{
    /// Execute all cases, verify the mocks and block until everything has
    /// been reported.
    ///
    /// # Errors
    /// Returns an error only if the reporter failed to write a record.
    pub fn run(self) -> Result<Summary> {
        block_on(self.run_async())
    }

    /// Asynchronous version of [`run`](Suite::run).
    ///
    /// Each case is awaited before the next one starts, so the records are
    /// written in registration order. A panicking case becomes a
    /// [`Report::Crash`]; the process wide panic hook is not replaced, so it
    /// still reports the panic on stderr as well.
    ///
    /// # Errors
    /// Returns an error only if the reporter failed to write a record.
    pub async fn run_async(self) -> Result<Summary> {
        let Self {
            name,
            func,
            cases,
            mocks,
            mut reporter,
        } = self;

        let mut summary = Summary::default();

        for case in cases {
            let title = case.title.clone();
            debug!(suite = %name, case = %title, "running case");

            let record = match AssertUnwindSafe(case.execute(&func)).catch_unwind().await {
                Ok(Verdict::Pass) => {
                    summary.passed += 1;

                    Report::Pass {
                        suite: name.clone(),
                        case: title,
                    }
                }
                Ok(Verdict::Fail { expected, actual }) => {
                    summary.failed += 1;

                    Report::Fail {
                        suite: name.clone(),
                        case: title,
                        expected,
                        actual,
                    }
                }
                Err(payload) => {
                    let message = panic_message(&*payload);
                    warn!(suite = %name, case = %title, %message, "case panicked");
                    summary.crashed += 1;

                    Report::Crash {
                        suite: name.clone(),
                        case: title,
                        message,
                    }
                }
            };

            reporter.report(record)?;
        }

        for mock in &mocks {
            for record in mock.mismatches() {
                summary.mock_mismatches += 1;

                reporter.report(record)?;
            }
        }

        debug!(suite = %name, %summary, "suite finished");
        reporter.finish(&summary)?;

        Ok(summary)
    }
}
