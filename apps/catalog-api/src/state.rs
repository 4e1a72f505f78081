//! Application state management

use domain_products::MySqlProductRepository;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repository: MySqlProductRepository,
}
