mod handlers;
pub mod services;
pub mod source;

use crate::state::AppState;
use axum::Router;

pub use source::{HttpSeedSource, SeedSource, StaticSeedSource};

pub fn router() -> Router<AppState> {
    handlers::routes()
}
