pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod favorites;
pub mod patch;
pub mod people;
pub mod planets;
pub mod response;
pub mod state;
pub mod users;

pub use app::build_app;
pub use error::{AppError, AppResult};
pub use state::AppState;
