pub mod app;
pub mod cache;
pub mod calendar;
pub mod client;
pub mod config;
pub mod errors;
pub mod github;
pub mod handlers;
pub mod models;
pub mod refresh;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
