//! `simplytest` is a minimal unit test framework.
//!
//! A [`Suite`] wraps a function under test, collects named cases and runs
//! them in order. A [`Mock`] replaces a dependency of the function under
//! test with a callable that returns a preset value and tracks how often and
//! with which arguments it was called.
//!
//! ```
//! use simplytest::{example::{sum, sum_based}, Mock, Recorder, Suite};
//!
//! let mocked_sum = Mock::new(sum, 2, 10);
//! let instance = mocked_sum.instance();
//!
//! let recorder = Recorder::new();
//! let mut suite = Suite::new(|nums: Vec<i32>| sum_based(sum, &nums))
//!     .with_name("sum_based")
//!     .with_reporter(recorder.clone());
//! suite
//!     .use_mock(&mocked_sum)?
//!     .predicate("uses the mocked sum", move || sum_based(instance, &[4, 1, 2, 1, 2]) == 10)?;
//!
//! assert!(suite.run()?.is_success());
//! # Ok::<(), simplytest::Error>(())
//! ```

mod case;
pub mod error;
pub mod example;
pub mod misc;
pub mod mock;
pub mod report;
pub mod suite;
pub mod times;

pub use error::{Error, Result};
pub use mock::{Expectation, Mock};
pub use report::{ConsoleReporter, Recorder, Report, Reporter, Summary, WriterReporter};
pub use suite::Suite;
pub use times::{Times, TimesRange};
