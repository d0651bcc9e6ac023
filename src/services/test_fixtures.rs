// Fontes em memória para testar serviços e handlers sem a API do restaurante.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;

use crate::{
    common::{
        coerce::{coerce_amount, parse_order_datetime},
        error::AppError,
    },
    models::{
        customers::Customer,
        orders::{Order, OrderStatus},
        stock::StockItem,
    },
    upstream::{CustomerSource, OrderSource, StockSource},
};

#[derive(Default)]
pub struct FixtureApi {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
    pub stock: Vec<StockItem>,
    pub restock: Vec<StockItem>,
    pub fail_orders: bool,
}

fn unavailable(endpoint: &str) -> AppError {
    AppError::UpstreamStatus {
        endpoint: endpoint.to_string(),
        status: 503,
    }
}

#[async_trait]
impl OrderSource for FixtureApi {
    async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        if self.fail_orders {
            return Err(unavailable("/order"));
        }
        Ok(self.orders.clone())
    }
}

#[async_trait]
impl CustomerSource for FixtureApi {
    async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.clone())
    }
}

#[async_trait]
impl StockSource for FixtureApi {
    async fn list_stock(&self) -> Result<Vec<StockItem>, AppError> {
        Ok(self.stock.clone())
    }

    async fn list_restock(&self) -> Result<Vec<StockItem>, AppError> {
        Ok(self.restock.clone())
    }
}

pub fn order(id: i64, date: &str, total: &str, status: &str) -> Order {
    Order {
        id,
        customer_id: Some(1),
        staff_id: Some(1),
        order_date: parse_order_datetime(date),
        total_amount: coerce_amount(&json!(total)),
        status: OrderStatus::from_tag(status),
    }
}

pub fn customer(id: i64, rank: &str) -> Customer {
    Customer {
        id,
        last_name: format!("Cliente {}", id),
        first_name: String::new(),
        contact: None,
        loyalty_points: 0,
        rank: Some(rank.to_string()),
    }
}

pub fn stock_item(id: i64, quantity: i64, threshold: i64) -> StockItem {
    StockItem {
        id,
        name: format!("Produto {}", id),
        quantity: Decimal::from(quantity),
        threshold: Decimal::from(threshold),
    }
}
