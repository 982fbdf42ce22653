pub mod model;
pub mod repository;

pub use model::{OrderDB, OrderItemDB};
pub use repository::OrderRepository;
