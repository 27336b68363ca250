use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// The spawned task behind a schedule.
pub(crate) trait ScheduleTask {
    fn abort(&self);
    fn is_finished(&self) -> bool;
}

impl ScheduleTask for JoinHandle<()> {
    fn abort(&self) {
        Self::abort(self);
    }

    fn is_finished(&self) -> bool {
        Self::is_finished(self)
    }
}

/// The stop signal a schedule task listens for between ticks.
pub(crate) trait StopTrigger {
    fn trigger(self);
}

impl StopTrigger for oneshot::Sender<()> {
    fn trigger(self) {
        // The task may already have exited; nothing to tell it then.
        let _ = self.send(());
    }
}

/// Control state shared by every way of ending a schedule.
///
/// The stop signal fires at most once. The task stays owned after an abort so
/// completion can still be observed; it is only given up by `detach` or
/// `take_task`.
#[derive(Debug)]
pub(crate) struct Controls<T, S> {
    task: Option<T>,
    stop: Option<S>,
}

impl<T: ScheduleTask, S: StopTrigger> Controls<T, S> {
    pub(crate) const fn new(task: T, stop: S) -> Self {
        Self {
            task: Some(task),
            stop: Some(stop),
        }
    }

    /// Ask the task to stop after the current tick.
    pub(crate) fn request_stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop.trigger();
        }
    }

    /// Request a stop and cancel the task at its next await point.
    pub(crate) fn abort(&mut self) {
        self.request_stop();
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    /// Let the task run unsupervised: the stop sender is dropped unsent.
    pub(crate) fn detach(&mut self) {
        self.stop.take();
        self.task.take();
    }

    pub(crate) fn take_task(&mut self) -> Option<T> {
        self.task.take()
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|t| t.is_finished())
    }
}

/// Owner of a running schedule.
///
/// Dropping the handle stops the schedule. Call [`ScheduleHandle::detach`] to
/// let it run for the rest of the process instead.
#[must_use = "dropping a ScheduleHandle cancels the schedule; call `detach()` to keep it running"]
#[derive(Debug)]
pub struct ScheduleHandle {
    controls: Controls<JoinHandle<()>, oneshot::Sender<()>>,
}

impl ScheduleHandle {
    pub(crate) const fn new(task: JoinHandle<()>, stop: oneshot::Sender<()>) -> Self {
        Self {
            controls: Controls::new(task, stop),
        }
    }

    /// Request a graceful stop and wait for the schedule task to exit.
    ///
    /// A callback that is already running completes first; no further
    /// invocations start afterwards. Also usable after [`ScheduleHandle::abort`]
    /// to wait for the aborted task.
    pub async fn cancel(mut self) {
        self.controls.request_stop();
        if let Some(task) = self.controls.take_task() {
            let _ = task.await;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!("schedule cancelled");
    }

    /// Stop the schedule without waiting for the task to exit.
    ///
    /// No callback starts after this returns, but [`ScheduleHandle::is_finished`]
    /// only turns `true` once the runtime has torn the task down.
    pub fn abort(&mut self) {
        self.controls.abort();
    }

    /// `true` once the schedule task has exited (stopped, aborted, or its
    /// callback panicked).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.controls.is_finished()
    }

    /// Give up control of the schedule; it keeps running until the runtime
    /// shuts down.
    pub fn detach(mut self) {
        self.controls.detach();
    }
}

impl Drop for ScheduleHandle {
    fn drop(&mut self) {
        self.controls.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::{Controls, ScheduleTask, StopTrigger};
    use loom::sync::Arc;
    use loom::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Clone)]
    struct ModelTask {
        finished: Arc<AtomicBool>,
        aborts: Arc<AtomicUsize>,
    }

    impl ModelTask {
        fn new() -> Self {
            Self {
                finished: Arc::new(AtomicBool::new(false)),
                aborts: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl ScheduleTask for ModelTask {
        fn abort(&self) {
            self.aborts.fetch_add(1, Ordering::SeqCst);
            self.finished.store(true, Ordering::SeqCst);
        }
        fn is_finished(&self) -> bool {
            self.finished.load(Ordering::SeqCst)
        }
    }

    struct ModelStop(Arc<AtomicUsize>);

    impl StopTrigger for ModelStop {
        fn trigger(self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn controls() -> (Controls<ModelTask, ModelStop>, ModelTask, Arc<AtomicUsize>) {
        let task = ModelTask::new();
        let stops = Arc::new(AtomicUsize::new(0));
        let c = Controls::new(task.clone(), ModelStop(stops.clone()));
        (c, task, stops)
    }

    #[test]
    fn abort_while_task_exits_on_its_own() {
        loom::model(|| {
            let (mut c, task, stops) = controls();

            let t2 = task.clone();
            let th = loom::thread::spawn(move || t2.finished.store(true, Ordering::SeqCst));

            c.abort();
            th.join().unwrap();

            assert_eq!(stops.load(Ordering::SeqCst), 1);
            assert!(c.is_finished());
        });
    }

    #[test]
    fn cancel_after_abort_signals_stop_once_and_keeps_the_task() {
        loom::model(|| {
            let (mut c, task, stops) = controls();

            c.abort();
            // `cancel` path
            c.request_stop();
            let taken = c.take_task();

            assert_eq!(stops.load(Ordering::SeqCst), 1);
            assert_eq!(task.aborts.load(Ordering::SeqCst), 1);
            assert!(taken.is_some_and(|t| t.is_finished()));
        });
    }

    #[test]
    fn drop_after_detach_leaves_the_task_running() {
        loom::model(|| {
            let (mut c, task, stops) = controls();

            c.detach();
            // `Drop` path
            c.abort();

            assert_eq!(stops.load(Ordering::SeqCst), 0);
            assert_eq!(task.aborts.load(Ordering::SeqCst), 0);
            assert!(!task.is_finished());
        });
    }

    #[test]
    fn finishing_task_is_observed_before_any_release() {
        loom::model(|| {
            let (c, task, stops) = controls();

            let t2 = task.clone();
            let th = loom::thread::spawn(move || t2.finished.store(true, Ordering::SeqCst));
            let seen_early = c.is_finished();
            th.join().unwrap();

            // Completion is monotonic: once seen it stays seen.
            assert!(c.is_finished());
            assert!(!seen_early || task.is_finished());
            assert_eq!(stops.load(Ordering::SeqCst), 0);
        });
    }
}
