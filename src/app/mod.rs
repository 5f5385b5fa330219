mod dispatch;
mod event_handler;
mod loader;
mod state;

pub use dispatch::start_translation;
pub use event_handler::handle_backend_event;
pub use loader::start_model_load;
pub use state::{AppState, BackendEvent, StatusTone};
