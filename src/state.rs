use tokio::sync::Mutex;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::{AuthGate, CredentialStore, DashboardState, FormController};
use crate::store::{EmployeeStore, SessionStore};

/// Everything the handlers share, registered once as `web::Data`.
pub struct AppState {
    pub config: Config,
    pub gate: AuthGate,
    pub sessions: SessionStore,
    pub employees: EmployeeStore,
    pub dashboard: Mutex<DashboardState>,
    pub form: FormController,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let credentials = CredentialStore::with_defaults()?;
        let gate = AuthGate::new(
            credentials,
            config.login_delay,
            config.jwt_secret.clone(),
            config.session_ttl_hours,
        );
        let employees = EmployeeStore::seeded(config.placeholder_image.clone());

        Ok(Self {
            config,
            gate,
            sessions: SessionStore::new(),
            employees,
            dashboard: Mutex::new(DashboardState::default()),
            form: FormController::new(),
        })
    }

    pub async fn teardown_views(&self) {
        if self.form.cancel().await {
            log::debug!("Discarded open employee form");
        }
        self.dashboard.lock().await.reset();
    }
}
