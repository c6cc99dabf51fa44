//! Observation of generated payment dates.

use fixbond_core::types::Date;

/// Receives each payment date as the schedule generator produces it.
///
/// Notifications arrive once per date, in generation order (maturity
/// first). Observers see the schedule; they cannot change it.
pub trait ScheduleObserver {
    /// Called for the `index`-th generated date, counting from zero.
    fn on_payment_date(&mut self, index: usize, date: Date);
}

impl<F> ScheduleObserver for F
where
    F: FnMut(usize, Date),
{
    fn on_payment_date(&mut self, index: usize, date: Date) {
        self(index, date);
    }
}

/// Observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScheduleObserver for NoopObserver {
    fn on_payment_date(&mut self, _index: usize, _date: Date) {}
}

/// Observer that writes each payment date to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ScheduleObserver for LogObserver {
    fn on_payment_date(&mut self, index: usize, date: Date) {
        log::info!(target: "fixbond::schedule", "Payment date {}: {}", index + 1, date);
    }
}
