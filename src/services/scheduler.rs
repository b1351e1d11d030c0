// ============================================================================
// SCHEDULER - Tareas programadas cancelables
// ============================================================================
// Los timers pertenecen al ciclo de vida del componente: el `TaskHandle`
// cancela la tarea al hacer drop, igual que `Timeout`/`Interval` de gloo.
// ============================================================================

use chrono::{DateTime, Utc};
use gloo_timers::callback::{Interval, Timeout};

/// Handle de una tarea programada. Cancela al hacer drop.
#[must_use = "soltar el handle cancela la tarea"]
pub struct TaskHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TaskHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

pub trait Scheduler {
    /// Hora actual según este scheduler
    fn now(&self) -> DateTime<Utc>;

    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;

    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle;
}

/// Timers reales del navegador (setTimeout / setInterval)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        let timeout = Timeout::new(delay_ms, task);
        TaskHandle::new(move || drop(timeout))
    }

    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        let interval = Interval::new(period_ms, task);
        TaskHandle::new(move || drop(interval))
    }
}
