use crate::repository::TaskRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TaskRepository>,
}
