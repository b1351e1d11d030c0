use std::cell::RefCell;
use std::rc::Rc;

use yew_router::history::{BrowserHistory, History};

/// Router externo: path actual + navegación imperativa
pub trait Router {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Historial del navegador compartido con el `<BrowserRouter>` de yew-router
#[derive(Clone)]
pub struct BrowserRouter {
    history: BrowserHistory,
}

impl BrowserRouter {
    pub fn new() -> Self {
        Self { history: BrowserHistory::new() }
    }
}

impl Default for BrowserRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Router for BrowserRouter {
    fn current_path(&self) -> String {
        self.history.location().path().to_string()
    }

    fn navigate(&self, path: &str) {
        log::debug!("🧭 Navegando a {}", path);
        self.history.push(path.to_string());
    }
}

/// Router en memoria que registra cada navegación
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    path: Rc<RefCell<String>>,
    visits: Rc<RefCell<Vec<String>>>,
}

impl MemoryRouter {
    pub fn new(initial_path: &str) -> Self {
        Self {
            path: Rc::new(RefCell::new(initial_path.to_string())),
            visits: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn visit_count(&self, path: &str) -> usize {
        self.visits.borrow().iter().filter(|p| p.as_str() == path).count()
    }
}

impl Router for MemoryRouter {
    fn current_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn navigate(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
        self.visits.borrow_mut().push(path.to_string());
    }
}
