pub mod app;
pub mod app_context;

pub use app::launch_app;
pub use app_context::AppContext;
