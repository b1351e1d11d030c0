// ============================================================================
// MANUAL SCHEDULER - Reloj virtual determinista
// ============================================================================
// Nada ocurre hasta que se llama a `advance`. Las tareas vencidas se
// ejecutan en orden (vencimiento, orden de creación) y pueden programar
// nuevas tareas durante su ejecución.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::services::scheduler::{Scheduler, TaskHandle};

enum TaskAction {
    Once(Box<dyn FnOnce()>),
    Repeating(Box<dyn FnMut()>),
}

struct ScheduledTask {
    id: u64,
    due_ms: u64,
    period_ms: Option<u64>,
    action: TaskAction,
}

struct ManualInner {
    origin: DateTime<Utc>,
    elapsed_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
    running: Option<u64>,
    running_cancelled: bool,
}

#[derive(Clone)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScheduler {
    pub fn new(origin: DateTime<Utc>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ManualInner {
                origin,
                elapsed_ms: 0,
                next_id: 0,
                tasks: Vec::new(),
                running: None,
                running_cancelled: false,
            })),
        }
    }

    /// Origen fijo: 2024-01-01T09:00:00Z
    pub fn starting_at_fixed_origin() -> Self {
        Self::new(Utc.timestamp_opt(1_704_099_600, 0).single().unwrap_or_default())
    }

    pub fn origin(&self) -> DateTime<Utc> {
        self.inner.borrow().origin
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.inner.borrow().elapsed_ms
    }

    /// `origin + offset_ms`
    pub fn at(&self, offset_ms: u64) -> DateTime<Utc> {
        self.origin() + Duration::milliseconds(offset_ms as i64)
    }

    pub fn pending_tasks(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Avanza el reloj ejecutando cada tarea que vence en el intervalo
    pub fn advance(&self, ms: u64) {
        let target = self.elapsed_ms() + ms;
        while let Some(task) = self.pop_due(target) {
            self.run(task);
        }
        self.inner.borrow_mut().elapsed_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<ScheduledTask> {
        let mut inner = self.inner.borrow_mut();
        let position = inner
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= target)
            .min_by_key(|(_, task)| (task.due_ms, task.id))
            .map(|(position, _)| position)?;
        let task = inner.tasks.remove(position);
        inner.elapsed_ms = task.due_ms;
        inner.running = Some(task.id);
        inner.running_cancelled = false;
        Some(task)
    }

    fn run(&self, task: ScheduledTask) {
        let ScheduledTask { id, due_ms, period_ms, action } = task;
        // Sin borrow activo: la tarea puede usar el scheduler
        let action = match action {
            TaskAction::Once(f) => {
                f();
                None
            }
            TaskAction::Repeating(mut f) => {
                f();
                Some(TaskAction::Repeating(f))
            }
        };

        let discarded = {
            let mut inner = self.inner.borrow_mut();
            let cancelled = inner.running_cancelled;
            inner.running = None;
            inner.running_cancelled = false;
            match (action, period_ms, cancelled) {
                (Some(action), Some(period), false) => {
                    inner.tasks.push(ScheduledTask { id, due_ms: due_ms + period, period_ms, action });
                    None
                }
                (action, _, _) => action,
            }
        };
        // El closure se suelta fuera del borrow
        drop(discarded);
    }

    fn push(&self, delay_ms: u32, period_ms: Option<u64>, action: TaskAction) -> TaskHandle {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let due_ms = inner.elapsed_ms + u64::from(delay_ms);
            inner.tasks.push(ScheduledTask { id, due_ms, period_ms, action });
            id
        };
        let weak: Weak<RefCell<ManualInner>> = Rc::downgrade(&self.inner);
        TaskHandle::new(move || {
            let Some(inner) = weak.upgrade() else { return };
            let removed: Vec<ScheduledTask> = {
                let mut inner = inner.borrow_mut();
                if inner.running == Some(id) {
                    inner.running_cancelled = true;
                    Vec::new()
                } else {
                    let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut inner.tasks)
                        .into_iter()
                        .partition(|task| task.id == id);
                    inner.tasks = kept;
                    removed
                }
            };
            drop(removed);
        })
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> DateTime<Utc> {
        self.at(self.elapsed_ms())
    }

    fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
        self.push(delay_ms, None, TaskAction::Once(task))
    }

    fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
        let period = u64::from(period_ms.max(1));
        self.push(period_ms.max(1), Some(period), TaskAction::Repeating(task))
    }
}
