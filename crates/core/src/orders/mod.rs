//! Orders module - the aggregate whose total is quoted and negotiated.

mod orders_errors;
mod orders_model;
mod orders_service;
mod orders_traits;


pub use orders_errors::OrderError;
pub use orders_model::{NewOrder, Order, OrderKind, OrderUpdate};
pub use orders_service::OrderService;
pub use orders_traits::{OrderRepositoryTrait, OrderServiceTrait};
