//! The [`report`](self) module contains the records emitted by a
//! [`Suite`](crate::Suite) run and the sinks they are written to.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io::{stderr, stdout, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::times::TimesRange;

/// One outcome of a suite run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Report {
    /// The case produced the expected value.
    Pass {
        /// Display name of the suite.
        suite: String,
        /// Title of the case.
        case: String,
    },

    /// The case produced a value different from the expected one.
    Fail {
        /// Display name of the suite.
        suite: String,
        /// Title of the case.
        case: String,
        /// Rendered expected value.
        expected: String,
        /// Rendered actual value.
        actual: String,
    },

    /// The case panicked.
    ///
    /// Only the panic message is recorded. The installed panic hook is left
    /// untouched, so the default hook still prints its own line with the
    /// panic location to stderr.
    Crash {
        /// Display name of the suite.
        suite: String,
        /// Title of the case.
        case: String,
        /// Message of the panic.
        message: String,
    },

    /// A mock was called more or less often than expected.
    CallCountMismatch {
        /// Name of the mock.
        mock: String,
        /// Number of observed calls.
        observed: usize,
        /// Expected number of calls.
        expected: TimesRange,
    },

    /// The most recent call of a mock did not use the expected arguments.
    ArgumentMismatch {
        /// Name of the mock.
        mock: String,
        /// Rendered arguments of the most recent call, `None` if never called.
        observed: Option<String>,
        /// Rendered expected arguments.
        expected: String,
    },
}

impl Report {
    /// Returns `true` for records that describe a problem.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !matches!(self, Self::Pass { .. })
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Pass { suite, case } => write!(f, "[pass] {suite} {case}"),
            Self::Fail {
                suite,
                case,
                expected,
                actual,
            } => write!(
                f,
                "[fail] {suite} {case}; expected={expected}, actual={actual}"
            ),
            Self::Crash {
                suite,
                case,
                message,
            } => write!(f, "[crash] {suite} {case} {message}"),
            Self::CallCountMismatch {
                mock,
                observed,
                expected,
            } => write!(
                f,
                "[mock] {mock} was called {observed} time(s), but expected {expected} time(s)"
            ),
            Self::ArgumentMismatch {
                mock,
                observed: Some(observed),
                expected,
            } => write!(
                f,
                "[mock] {mock} was called with {observed}, but expected {expected}"
            ),
            Self::ArgumentMismatch {
                mock,
                observed: None,
                expected,
            } => write!(f, "[mock] {mock} was never called, but expected {expected}"),
        }
    }
}

/// Counters of a finished suite run.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Summary {
    /// Number of passed cases.
    pub passed: usize,

    /// Number of failed cases.
    pub failed: usize,

    /// Number of cases that panicked.
    pub crashed: usize,

    /// Number of unmet mock expectations.
    pub mock_mismatches: usize,
}

impl Summary {
    /// Returns `true` if every case passed and every mock expectation was met.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0 && self.crashed == 0 && self.mock_mismatches == 0
    }

    /// Add the counters of `other` to `self`.
    pub fn merge(&mut self, other: &Summary) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.crashed += other.crashed;
        self.mock_mismatches += other.mock_mismatches;
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} passed, {} failed, {} crashed, {} mock mismatch(es)",
            self.passed, self.failed, self.crashed, self.mock_mismatches
        )
    }
}

/// Sink for the records emitted by a suite run.
pub trait Reporter {
    /// Write a single record.
    ///
    /// # Errors
    /// Returns an error if the record could not be written.
    fn report(&mut self, record: Report) -> Result<()>;

    /// Called once after the last record of a run has been written.
    ///
    /// # Errors
    /// Returns an error if the sink could not be flushed.
    fn finish(&mut self, _summary: &Summary) -> Result<()> {
        Ok(())
    }
}

/// Default [`Reporter`] writing one line per record to the console.
///
/// Failures and crashes go to stderr, everything else to stdout.
#[derive(Default, Debug, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, record: Report) -> Result<()> {
        match record {
            Report::Fail { .. } | Report::Crash { .. } => writeln!(stderr().lock(), "{record}")?,
            _ => writeln!(stdout().lock(), "{record}")?,
        }

        Ok(())
    }
}

/// [`Reporter`] writing one line per record to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterReporter<W> {
    writer: W,
}

impl<W: Write> WriterReporter<W> {
    /// Create a new reporter writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for WriterReporter<W> {
    fn report(&mut self, record: Report) -> Result<()> {
        writeln!(self.writer, "{record}")?;

        Ok(())
    }

    fn finish(&mut self, _summary: &Summary) -> Result<()> {
        self.writer.flush()?;

        Ok(())
    }
}

/// [`Reporter`] that keeps all records in memory.
///
/// Clones share the same records, so a clone can be handed to a suite while
/// the original is used to inspect the outcome afterwards.
#[derive(Default, Debug, Clone)]
pub struct Recorder {
    records: Arc<Mutex<Vec<Report>>>,
}

impl Recorder {
    /// Create a new empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records written so far.
    #[must_use]
    pub fn records(&self) -> Vec<Report> {
        self.records.lock().clone()
    }

    /// Records written so far, rendered as lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records.lock().iter().map(ToString::to_string).collect()
    }
}

impl Reporter for Recorder {
    fn report(&mut self, record: Report) -> Result<()> {
        self.records.lock().push(record);

        Ok(())
    }
}
