use chrono::{DateTime, Local, NaiveDate, Utc};

/// Time source for ship timestamps and the Saturday-delivery weekday gate.
///
/// Injected rather than read ambiently so the Thursday rule is
/// deterministic under test.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
    /// Current local calendar date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
