// ============================================================================
// REFRESH STATE - Orquestación de recargas del dashboard
// ============================================================================
// Idle --applyFilters/refresh--> Loading --latencia--> Idle | Failed
// Tick periódico: solo actualiza `last_updated`, nunca toca el estado.
//
// Cada disparo recibe un número de secuencia creciente; una finalización
// solo se aplica si su número es el último emitido.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};

use crate::config::RefreshConfig;
use crate::models::dashboard::{DashboardSnapshot, FilterSet, RefreshState, RefreshStatus};
use crate::services::{DashboardSource, Scheduler, TaskHandle};
use crate::state::reactivity::{ReactiveState, SubscriptionId};

/// Todo lo que pinta la página del dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub filters: FilterSet,
    pub refresh: RefreshState,
    pub snapshot: DashboardSnapshot,
}

struct RefreshCore {
    scheduler: Rc<dyn Scheduler>,
    source: Rc<dyn DashboardSource>,
    config: RefreshConfig,
    state: ReactiveState<DashboardState>,
    latest_request: Cell<u64>,
    mounted: Cell<bool>,
    pending: RefCell<Option<TaskHandle>>,
    tick: RefCell<Option<TaskHandle>>,
}

impl RefreshCore {
    fn complete(&self, request: u64) {
        if !self.mounted.get() {
            return;
        }
        if request != self.latest_request.get() {
            log::debug!(
                "⏭️ Resultado #{} descartado (última petición #{})",
                request,
                self.latest_request.get()
            );
            return;
        }

        let filters = self.state.with(|s| s.filters.clone());
        match self.source.load(&filters) {
            Ok(snapshot) => {
                let now = self.scheduler.now();
                self.state.update(|s| {
                    s.snapshot = snapshot;
                    s.refresh.last_updated = s.refresh.last_updated.max(now);
                    s.refresh.status = RefreshStatus::Idle;
                });
                log::info!("✅ Dashboard actualizado (petición #{})", request);
            }
            Err(e) => {
                // Datos y timestamp anteriores se conservan
                log::error!("❌ Error actualizando dashboard: {}", e);
                self.state.update(|s| {
                    s.refresh.status = RefreshStatus::Failed { error: e.to_string() };
                });
            }
        }
    }

    fn tick(&self) {
        if !self.mounted.get() {
            return;
        }
        let now = self.scheduler.now();
        self.state.update(|s| s.refresh.last_updated = s.refresh.last_updated.max(now));
        log::debug!("⏰ Tick del dashboard");
    }
}

/// Controlador de recargas. Su vida es la del componente montado:
/// al hacer drop se cancelan el tick y la recarga pendiente.
pub struct DashboardRefreshController {
    core: Rc<RefreshCore>,
}

impl DashboardRefreshController {
    pub fn mount(
        scheduler: Rc<dyn Scheduler>,
        source: Rc<dyn DashboardSource>,
        config: RefreshConfig,
    ) -> Self {
        let filters = FilterSet::new();
        let snapshot = source.load(&filters).unwrap_or_else(|e| {
            log::error!("❌ Error cargando datos iniciales: {}", e);
            DashboardSnapshot::default()
        });
        let state = DashboardState {
            filters,
            refresh: RefreshState::idle(scheduler.now()),
            snapshot,
        };

        let controller = Self {
            core: Rc::new(RefreshCore {
                scheduler,
                source,
                config,
                state: ReactiveState::new(state),
                latest_request: Cell::new(0),
                mounted: Cell::new(true),
                pending: RefCell::new(None),
                tick: RefCell::new(None),
            }),
        };
        controller.start_tick();
        log::info!("📊 Dashboard montado (tick cada {} ms)", config.tick_interval_ms);
        controller
    }

    /// Un único intervalo por controlador
    fn start_tick(&self) {
        if self.core.tick.borrow().is_some() {
            return;
        }
        let weak: Weak<RefreshCore> = Rc::downgrade(&self.core);
        let handle = self.core.scheduler.schedule_repeating(
            self.core.config.tick_interval_ms,
            Box::new(move || {
                if let Some(core) = weak.upgrade() {
                    core.tick();
                }
            }),
        );
        *self.core.tick.borrow_mut() = Some(handle);
    }

    /// Reemplaza los filtros completos y recarga (latencia de filtros)
    pub fn apply_filters(&self, filters: FilterSet) {
        log::info!("🔎 Aplicando {} filtro(s)", filters.len());
        self.begin(self.core.config.filter_latency_ms, Some(filters));
    }

    /// Recarga manual sin tocar los filtros
    pub fn refresh(&self) {
        log::info!("🔄 Recarga manual del dashboard");
        self.begin(self.core.config.refresh_latency_ms, None);
    }

    /// Cierra el banner de error
    pub fn dismiss_error(&self) {
        if self.core.state.with(|s| s.refresh.error().is_some()) {
            self.core.state.update(|s| s.refresh.status = RefreshStatus::Idle);
        }
    }

    fn begin(&self, latency_ms: u32, filters: Option<FilterSet>) {
        if !self.core.mounted.get() {
            log::warn!("⚠️ Recarga ignorada: dashboard desmontado");
            return;
        }
        let request = self.core.latest_request.get() + 1;
        self.core.latest_request.set(request);

        self.core.state.update(|s| {
            if let Some(filters) = filters {
                s.filters = filters;
            }
            s.refresh.status = RefreshStatus::Loading;
        });

        let weak: Weak<RefreshCore> = Rc::downgrade(&self.core);
        let handle = self.core.scheduler.schedule_once(
            latency_ms,
            Box::new(move || match weak.upgrade() {
                Some(core) => core.complete(request),
                None => log::debug!("Recarga #{} terminó tras el desmontaje", request),
            }),
        );
        // La petición anterior queda cancelada
        let previous = self.core.pending.replace(Some(handle));
        drop(previous);
    }

    /// Cancela el tick y la recarga pendiente. Idempotente.
    pub fn unmount(&self) {
        if !self.core.mounted.replace(false) {
            return;
        }
        self.core.latest_request.set(self.core.latest_request.get() + 1);
        let tick = self.core.tick.borrow_mut().take();
        let pending = self.core.pending.borrow_mut().take();
        drop(tick);
        drop(pending);
        log::info!("📊 Dashboard desmontado");
    }

    pub fn is_mounted(&self) -> bool {
        self.core.mounted.get()
    }

    pub fn state(&self) -> DashboardState {
        self.core.state.get()
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.core.state.with(|s| s.refresh.clone())
    }

    pub fn filters(&self) -> FilterSet {
        self.core.state.with(|s| s.filters.clone())
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        self.core.state.with(|s| s.snapshot.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.core.state.with(|s| s.refresh.is_loading())
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.core.state.with(|s| s.refresh.last_updated)
    }

    /// Número de la última petición emitida
    pub fn latest_request(&self) -> u64 {
        self.core.latest_request.get()
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DashboardState) + 'static,
    {
        self.core.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.core.state.unsubscribe(id)
    }
}

impl Drop for DashboardRefreshController {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::FILTER_REGION;
    use crate::services::{ManualScheduler, MockDashboardSource};

    const T_FILTER: u64 = 1000;
    const T_REFRESH: u64 = 1500;
    const T_TICK: u64 = 30000;

    fn mount(scheduler: &ManualScheduler) -> DashboardRefreshController {
        DashboardRefreshController::mount(
            Rc::new(scheduler.clone()),
            Rc::new(MockDashboardSource),
            RefreshConfig::default(),
        )
    }

    fn apac() -> FilterSet {
        FilterSet::new().with(FILTER_REGION, "APAC")
    }

    /// No cancela nada: deja que las finalizaciones obsoletas lleguen
    struct LeakyScheduler(ManualScheduler);

    impl Scheduler for LeakyScheduler {
        fn now(&self) -> DateTime<Utc> {
            self.0.now()
        }

        fn schedule_once(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle {
            std::mem::forget(self.0.schedule_once(delay_ms, task));
            TaskHandle::new(|| {})
        }

        fn schedule_repeating(&self, period_ms: u32, task: Box<dyn FnMut()>) -> TaskHandle {
            std::mem::forget(self.0.schedule_repeating(period_ms, task));
            TaskHandle::new(|| {})
        }
    }

    fn mount_leaky(scheduler: &ManualScheduler) -> DashboardRefreshController {
        DashboardRefreshController::mount(
            Rc::new(LeakyScheduler(scheduler.clone())),
            Rc::new(MockDashboardSource),
            RefreshConfig::default(),
        )
    }

    #[test]
    fn mount_starts_idle_with_current_time_and_one_timer() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        assert!(!controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(0));
        assert!(controller.filters().is_empty());
        assert_eq!(controller.snapshot().metrics.len(), 4);
        assert_eq!(scheduler.pending_tasks(), 1);
    }

    #[test]
    fn apply_filters_scenario() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        let t0 = controller.last_updated();

        scheduler.advance(5);
        controller.apply_filters(apac());
        assert!(controller.is_loading());
        assert_eq!(controller.filters(), apac());
        assert_eq!(controller.last_updated(), t0);

        scheduler.advance(T_FILTER - 1);
        assert!(controller.is_loading());

        scheduler.advance(1);
        assert!(!controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(1005));
        assert!(controller.last_updated() > t0);
        assert!(controller.snapshot().routes.iter().all(|r| r.region == "APAC"));
    }

    #[test]
    fn filters_are_replaced_not_merged() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        controller.apply_filters(apac().with("category", "electronics"));
        scheduler.advance(T_FILTER);
        controller.apply_filters(FilterSet::new().with("timeRange", "7d"));
        assert_eq!(controller.filters(), FilterSet::new().with("timeRange", "7d"));
    }

    #[test]
    fn refresh_uses_its_own_latency_and_keeps_filters() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        controller.apply_filters(apac());
        scheduler.advance(T_FILTER);

        controller.refresh();
        assert!(controller.is_loading());
        scheduler.advance(T_REFRESH - 1);
        assert!(controller.is_loading());
        scheduler.advance(1);
        assert!(!controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(T_FILTER + T_REFRESH));
        assert_eq!(controller.filters(), apac());
    }

    #[test]
    fn second_trigger_leaves_exactly_one_terminal_idle() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        let completions = Rc::new(Cell::new(0));
        let was_loading = Rc::new(Cell::new(false));
        {
            let completions = completions.clone();
            let was_loading = was_loading.clone();
            controller.subscribe(move |state| {
                let loading = state.refresh.is_loading();
                if was_loading.get() && !loading {
                    completions.set(completions.get() + 1);
                }
                was_loading.set(loading);
            });
        }

        controller.refresh();
        scheduler.advance(100);
        controller.apply_filters(apac());
        scheduler.advance(T_FILTER);
        assert!(!controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(1100));

        scheduler.advance(5000);
        assert!(!controller.is_loading());
        assert_eq!(completions.get(), 1);
        assert_eq!(controller.last_updated(), scheduler.at(1100));
    }

    #[test]
    fn stale_completion_is_discarded_even_if_it_fires() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount_leaky(&scheduler);

        // refresh (1500) y luego filtros (1000): el refresh llega después
        controller.refresh();
        scheduler.advance(100);
        controller.apply_filters(apac());
        scheduler.advance(T_FILTER);
        assert!(!controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(1100));

        scheduler.advance(400);
        assert_eq!(controller.last_updated(), scheduler.at(1100));
        assert_eq!(controller.latest_request(), 2);
    }

    #[test]
    fn stale_completion_does_not_end_newer_loading() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount_leaky(&scheduler);

        controller.apply_filters(apac());
        scheduler.advance(100);
        controller.refresh();
        scheduler.advance(900);
        assert!(controller.is_loading(), "la petición #1 no debe cerrar la #2");
        scheduler.advance(600);
        assert!(!controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(1600));
    }

    #[test]
    fn ticks_bump_timestamp_without_loading() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        let updates = Rc::new(Cell::new(0));
        let saw_loading = Rc::new(Cell::new(false));
        {
            let updates = updates.clone();
            let saw_loading = saw_loading.clone();
            controller.subscribe(move |state| {
                updates.set(updates.get() + 1);
                saw_loading.set(saw_loading.get() || state.refresh.is_loading());
            });
        }

        scheduler.advance(3 * T_TICK);
        assert!(updates.get() >= 3);
        assert!(!saw_loading.get());
        assert_eq!(controller.last_updated(), scheduler.at(3 * T_TICK));
        assert_eq!(scheduler.pending_tasks(), 1);
    }

    #[test]
    fn tick_during_loading_keeps_loading() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        scheduler.advance(T_TICK - 500);
        controller.apply_filters(apac());
        scheduler.advance(500);
        assert!(controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(T_TICK));
        scheduler.advance(500);
        assert!(!controller.is_loading());
        assert_eq!(controller.last_updated(), scheduler.at(T_TICK + 500));
    }

    #[test]
    fn unmount_cancels_every_timer() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        controller.apply_filters(apac());
        assert_eq!(scheduler.pending_tasks(), 2);

        controller.unmount();
        assert!(!controller.is_mounted());
        assert_eq!(scheduler.pending_tasks(), 0);
        let frozen = controller.last_updated();
        scheduler.advance(10 * T_TICK);
        assert_eq!(controller.last_updated(), frozen);

        controller.unmount();
        controller.refresh();
        assert!(scheduler.pending_tasks() == 0);
    }

    #[test]
    fn drop_while_loading_is_harmless() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        controller.apply_filters(apac());
        drop(controller);
        assert_eq!(scheduler.pending_tasks(), 0);
        scheduler.advance(10 * T_TICK);
    }

    #[test]
    fn pending_callback_after_drop_is_a_no_op() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount_leaky(&scheduler);
        controller.refresh();
        drop(controller);
        // Las tareas siguen en el reloj: deben terminar sin fallo
        scheduler.advance(T_REFRESH);
        scheduler.advance(2 * T_TICK);
    }

    #[test]
    fn failed_refresh_keeps_previous_data_and_timestamp() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        controller.apply_filters(apac());
        scheduler.advance(T_FILTER);
        let good_snapshot = controller.snapshot();
        let good_time = controller.last_updated();

        controller.apply_filters(FilterSet::new().with(FILTER_REGION, "MARS"));
        scheduler.advance(T_FILTER);

        let refresh = controller.refresh_state();
        assert!(!refresh.is_loading());
        assert!(refresh.error().is_some());
        assert_eq!(controller.snapshot(), good_snapshot);
        assert_eq!(controller.last_updated(), good_time);
    }

    #[test]
    fn failure_recovers_through_a_new_trigger_or_dismissal() {
        let scheduler = ManualScheduler::starting_at_fixed_origin();
        let controller = mount(&scheduler);
        controller.apply_filters(FilterSet::new().with(FILTER_REGION, "MARS"));
        scheduler.advance(T_FILTER);
        assert!(controller.refresh_state().error().is_some());

        controller.dismiss_error();
        assert_eq!(controller.refresh_state().status, RefreshStatus::Idle);

        controller.refresh();
        scheduler.advance(T_REFRESH);
        assert!(controller.refresh_state().error().is_some());

        controller.apply_filters(apac());
        assert!(controller.is_loading());
        assert_eq!(controller.refresh_state().error(), None);
        scheduler.advance(T_FILTER);
        assert_eq!(controller.refresh_state().status, RefreshStatus::Idle);
    }
}
