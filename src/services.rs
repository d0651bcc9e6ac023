pub mod aggregation;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod stock_service;
pub use stock_service::StockService;
pub mod customer_service;
pub use customer_service::CustomerService;

#[cfg(test)]
pub(crate) mod test_fixtures;
