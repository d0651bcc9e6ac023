pub mod dashboard;
pub mod stock;
pub mod customers;
