pub mod adapters;
pub mod domain;
pub mod services;

pub use adapters::mapper::PaymentAdapter;
pub use services::catalog::ServiceCatalog;
