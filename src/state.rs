use std::sync::Arc;
use crate::domain::ports::{AuthRepository, TimeIntervalRepository, UserRepository};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub interval_repo: Arc<dyn TimeIntervalRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub auth_service: Arc<AuthService>,
}
