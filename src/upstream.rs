pub mod client;
pub use client::UpstreamClient;
pub mod order_repo;
pub use order_repo::{OrderRepository, OrderSource};
pub mod customer_repo;
pub use customer_repo::{CustomerRepository, CustomerSource};
pub mod stock_repo;
pub use stock_repo::{StockRepository, StockSource};
