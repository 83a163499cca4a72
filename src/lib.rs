use std::sync::Arc;

use activity::ActivityLog;
use geolocation::LocationLookup;
use session::SessionKeys;
use views::Views;

pub mod activity;
pub mod config;
pub mod error;
pub mod geolocation;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod session;
pub mod views;

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionKeys,
    pub activity: Arc<ActivityLog>,
    pub geolocation: Arc<dyn LocationLookup>,
    pub views: Arc<Views>,
}
