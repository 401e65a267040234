mod relay_service;
mod tracing;

pub use relay_service::RelayService;
