// Timers and background work bound to the view that started them
//
// Everything scheduled here is cancelled when the reactive owner that created
// it is cleaned up, so a page that unmounts leaves nothing running.
use futures::future::{abortable, AbortHandle};
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

enum Timer {
    Once(Timeout),
    Repeating(Interval),
}

/// Slot for one timeout or interval.
///
/// Create it while a component is being set up; scheduling again replaces
/// whatever was pending.
#[derive(Clone)]
pub struct ScheduledCallback {
    timer: Rc<RefCell<Option<Timer>>>,
}

impl ScheduledCallback {
    pub fn new() -> Self {
        let handle = Self {
            timer: Rc::new(RefCell::new(None)),
        };
        let on_teardown = handle.clone();
        on_cleanup(move || on_teardown.cancel());
        handle
    }

    pub fn schedule_once(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.replace(Timer::Once(Timeout::new(delay_ms, callback)));
    }

    pub fn schedule_repeating(&self, period_ms: u32, callback: impl FnMut() + 'static) {
        self.replace(Timer::Repeating(Interval::new(period_ms, callback)));
    }

    /// Stops the timer. Calling it again is harmless.
    pub fn cancel(&self) {
        let pending = self.timer.borrow_mut().take();
        match pending {
            Some(Timer::Once(timeout)) => {
                let _ = timeout.cancel();
            }
            Some(Timer::Repeating(interval)) => {
                let _ = interval.cancel();
            }
            None => {}
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.timer.borrow().is_some()
    }

    fn replace(&self, timer: Timer) {
        self.cancel();
        *self.timer.borrow_mut() = Some(timer);
    }
}

impl Default for ScheduledCallback {
    fn default() -> Self {
        Self::new()
    }
}

/// Remembers the component that owns background work started later from
/// event handlers, which run outside any reactive owner.
#[derive(Clone, Copy)]
pub struct TaskScope {
    owner: Option<Owner>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self {
            owner: Owner::current(),
        }
    }

    pub fn spawn<F>(&self, fut: F) -> AbortHandle
    where
        F: Future<Output = ()> + 'static,
    {
        match self.owner {
            Some(owner) => with_owner(owner, move || spawn_cancellable(fut)),
            None => spawn_cancellable(fut),
        }
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns `fut` on the browser event loop and aborts it when the current
/// owner is cleaned up. Drop guards inside `fut` still run on abort.
pub fn spawn_cancellable<F>(fut: F) -> AbortHandle
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = abortable(fut);
    let on_teardown = handle.clone();
    on_cleanup(move || on_teardown.abort());

    spawn_local(async move {
        if task.await.is_err() {
            log::debug!("background task aborted");
        }
    });
    handle
}
