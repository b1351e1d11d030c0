pub mod credential_store;
pub mod router;
pub mod scheduler;
pub mod manual_scheduler;
pub mod dashboard_source;

pub use credential_store::{CredentialStore, LocalStorageStore, MemoryCredentialStore};
pub use router::{BrowserRouter, MemoryRouter, Router};
pub use scheduler::{BrowserScheduler, Scheduler, TaskHandle};
pub use manual_scheduler::ManualScheduler;
pub use dashboard_source::{DashboardSource, MockDashboardSource};
