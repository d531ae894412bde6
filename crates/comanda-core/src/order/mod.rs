//! Order recording: repository trait and confirmation service.

pub mod repository;
pub mod service;

pub use repository::OrderRepository;
pub use service::OrderService;
