pub mod config;
pub mod credentials;
pub mod factory;
pub mod notifier;
pub mod services;

pub use factory::build_services;
pub use services::Services;
