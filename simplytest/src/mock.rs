//! The [`mock`](self) module implements [`Mock`], a call tracking stand-in for
//! a dependency function.

use std::fmt::Debug;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::misc::function_name;
use crate::report::Report;
use crate::times::{Times, TimesRange};

/// Replaces a dependency function with a callable that returns a preset
/// value and records how it was used.
///
/// A [`Mock`] is a cheap handle: clones share the same tracked state, so the
/// caller may keep one clone to inject [`instance`](Mock::instance) into the
/// code under test while another one is registered at a [`Suite`](crate::Suite).
///
/// Only the arguments of the most recent call are retained.
#[must_use]
#[derive(Debug)]
pub struct Mock<A, R> {
    inner: Arc<Inner<A, R>>,
}

#[derive(Debug)]
struct Inner<A, R> {
    times: Times,
    state: Mutex<State<A, R>>,
}

#[derive(Debug)]
struct State<A, R> {
    name: String,
    returns: R,
    expected_args: Option<A>,
    called_with: Option<A>,
}

impl<A, R> Mock<A, R> {
    /// Create a new mock for `target`.
    ///
    /// The mock is expected to be called `times` times and returns `returns`
    /// on every call. The target is only used to derive the name of the mock,
    /// it is never executed.
    pub fn new<F, T>(_target: F, times: T, returns: R) -> Self
    where
        F: Fn(A) -> R,
        T: Into<TimesRange>,
    {
        let name = function_name::<F>();

        Self {
            inner: Arc::new(Inner {
                times: Times::new(times),
                state: Mutex::new(State {
                    name,
                    returns,
                    expected_args: None,
                    called_with: None,
                }),
            }),
        }
    }

    /// Override the name derived from the target function.
    pub fn with_name<N: Into<String>>(self, name: N) -> Self {
        self.inner.state.lock().name = name.into();

        self
    }

    /// Declare the arguments the mock is expected to be called with.
    ///
    /// Leaving the arguments undeclared means they are unconstrained: the
    /// arguments of the calls are not verified, even if the mock is never
    /// called.
    pub fn with_args(self, args: A) -> Self {
        self.inner.state.lock().expected_args = Some(args);

        self
    }

    /// The callable to inject wherever the original function would be used.
    pub fn instance(&self) -> impl Fn(A) -> R + Clone
    where
        R: Clone,
    {
        let inner = self.inner.clone();

        move |args| inner.intercept(args)
    }

    /// Name of the mock.
    #[must_use]
    pub fn name(&self) -> String {
        self.inner.state.lock().name.clone()
    }

    /// Number of calls observed so far.
    #[must_use]
    pub fn times_called(&self) -> usize {
        self.inner.times.count()
    }

    /// Number of calls the mock is expected to receive.
    #[must_use]
    pub fn times_expected(&self) -> TimesRange {
        *self.inner.times.range()
    }
}

impl<A, R> Mock<A, R>
where
    A: Debug,
{
    /// Arguments of the most recent call, or `None` if the mock was not called yet.
    #[must_use]
    pub fn called_with(&self) -> Option<String> {
        self.inner
            .state
            .lock()
            .called_with
            .as_ref()
            .map(|args| format!("{args:?}"))
    }

    /// Arguments the mock is expected to be called with, if declared.
    #[must_use]
    pub fn expected_args(&self) -> Option<String> {
        self.inner
            .state
            .lock()
            .expected_args
            .as_ref()
            .map(|args| format!("{args:?}"))
    }

    /// Box this mock as [`Expectation`] to register it at a [`Suite`](crate::Suite).
    pub fn boxed<'a>(&self) -> Box<dyn Expectation + 'a>
    where
        A: PartialEq + 'a,
        R: 'a,
    {
        Box::new(self.clone())
    }
}

impl<A, R> Clone for Mock<A, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A, R> Inner<A, R>
where
    R: Clone,
{
    fn intercept(&self, args: A) -> R {
        let call = self.times.increment();

        let mut state = self.state.lock();
        trace!(mock = %state.name, call, "intercepted call");
        state.called_with = Some(args);

        state.returns.clone()
    }
}

/// Usage expectations of a mocked function, as verified by a [`Suite`](crate::Suite)
/// after all cases have been executed.
pub trait Expectation {
    /// Name that identifies the mock within a suite.
    fn name(&self) -> String;

    /// Number of calls observed so far.
    fn times_called(&self) -> usize;

    /// Number of calls the mock is expected to receive.
    fn times_expected(&self) -> TimesRange;

    /// Returns `true` if the observed number of calls matches the expectation.
    fn is_times_satisfied(&self) -> bool;

    /// Rendered arguments of the most recent call, `None` if never called.
    fn called_with(&self) -> Option<String>;

    /// Rendered expected arguments, `None` if no arguments were declared.
    fn expected_args(&self) -> Option<String>;

    /// Returns `true` if the most recent call matches the declared arguments.
    fn is_args_satisfied(&self) -> bool;

    /// Report records describing every unmet expectation.
    fn mismatches(&self) -> Vec<Report> {
        let mut ret = Vec::new();

        if !self.is_times_satisfied() {
            ret.push(Report::CallCountMismatch {
                mock: self.name(),
                observed: self.times_called(),
                expected: self.times_expected(),
            });
        }

        if !self.is_args_satisfied() {
            ret.push(Report::ArgumentMismatch {
                mock: self.name(),
                observed: self.called_with(),
                expected: self.expected_args().unwrap_or_default(),
            });
        }

        ret
    }
}

impl<A, R> Expectation for Mock<A, R>
where
    A: Debug + PartialEq,
{
    fn name(&self) -> String {
        Mock::name(self)
    }

    fn times_called(&self) -> usize {
        Mock::times_called(self)
    }

    fn times_expected(&self) -> TimesRange {
        Mock::times_expected(self)
    }

    fn is_times_satisfied(&self) -> bool {
        self.inner.times.is_satisfied()
    }

    fn called_with(&self) -> Option<String> {
        Mock::called_with(self)
    }

    fn expected_args(&self) -> Option<String> {
        Mock::expected_args(self)
    }

    fn is_args_satisfied(&self) -> bool {
        let state = self.inner.state.lock();

        match (&state.expected_args, &state.called_with) {
            (None, _) => true,
            (Some(expected), Some(actual)) => expected == actual,
            (Some(_), None) => false,
        }
    }
}
