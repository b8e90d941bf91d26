//! Single-shot delayed callbacks behind an injectable clock.

use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use tokio::runtime::{Handle, TryCurrentError};

pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler: Send + Sync {
    /// Runs `task` once, `delay` from now. Scheduled tasks cannot be cancelled.
    fn schedule(&self, delay: Duration, task: ScheduledTask);
}

/// Wall-clock scheduler backed by a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

/// Virtual clock that only moves when told to. Tasks due at the same instant
/// run in the order they were scheduled.
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<ManualQueue>,
}

#[derive(Default)]
struct ManualQueue {
    now: Duration,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

struct PendingTask {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due on
    /// the way. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        let mut ran = 0;

        // tasks run without the queue lock held so they may schedule more work
        while let Some(task) = self.pop_due(target) {
            task();
            ran += 1;
        }

        let mut queue = self.lock();
        if queue.now < target {
            queue.now = target;
        }
        ran
    }

    /// Runs tasks until none are pending, moving the clock to each due time.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next_due = self.lock().pending.iter().map(|pending| pending.due).min();
            let Some(due) = next_due else {
                return ran;
            };
            ran += self.advance(due.saturating_sub(self.now()));
        }
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut queue = self.lock();
        let index = queue
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)?;
        let pending = queue.pending.swap_remove(index);
        if queue.now < pending.due {
            queue.now = pending.due;
        }
        Some(pending.task)
    }

    fn lock(&self) -> MutexGuard<'_, ManualQueue> {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: ScheduledTask) {
        let mut queue = self.lock();
        let due = queue.now.saturating_add(delay);
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.pending.push(PendingTask { due, seq, task });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) -> ScheduledTask) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let make = move |label: &'static str| -> ScheduledTask {
            let sink = Arc::clone(&sink);
            Box::new(move || sink.lock().expect("log").push(label))
        };
        (log, make)
    }

    #[test]
    fn manual_tasks_fire_only_once_due() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(Duration::from_millis(800), task("done"));

        assert_eq!(scheduler.advance(Duration::from_millis(799)), 0);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(*log.lock().expect("log"), ["done"]);
        assert_eq!(scheduler.now(), Duration::from_millis(800));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn manual_tasks_run_in_due_then_schedule_order() {
        let scheduler = ManualScheduler::new();
        let (log, task) = recorder();
        scheduler.schedule(Duration::from_millis(30), task("late"));
        scheduler.schedule(Duration::from_millis(10), task("first"));
        scheduler.schedule(Duration::from_millis(10), task("second"));

        assert_eq!(scheduler.run_until_idle(), 3);
        assert_eq!(*log.lock().expect("log"), ["first", "second", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(30));
    }

    #[test]
    fn tasks_may_schedule_follow_ups() {
        let scheduler = Arc::new(ManualScheduler::new());
        let (log, task) = recorder();
        let inner = Arc::clone(&scheduler);
        let follow_up = task("follow-up");
        scheduler.schedule(
            Duration::from_millis(5),
            Box::new(move || inner.schedule(Duration::from_millis(5), follow_up)),
        );

        assert_eq!(scheduler.advance(Duration::from_millis(5)), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.advance(Duration::from_millis(5)), 1);
        assert_eq!(*log.lock().expect("log"), ["follow-up"]);
    }

    #[tokio::test(start_paused = true)]
    async fn tokio_scheduler_waits_for_delay() {
        let scheduler = TokioScheduler::try_current().expect("runtime");
        let (tx, rx) = tokio::sync::oneshot::channel();
        let started = tokio::time::Instant::now();

        scheduler.schedule(
            Duration::from_millis(800),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        rx.await.expect("task ran");

        assert!(started.elapsed() >= Duration::from_millis(800));
    }
}
