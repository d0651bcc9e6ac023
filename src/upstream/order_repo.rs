// src/upstream/order_repo.rs

use async_trait::async_trait;

use crate::{common::error::AppError, models::orders::Order, upstream::UpstreamClient};

// Fonte de pedidos. Em produção é a API do restaurante; nos testes, fixtures em memória.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<Order>, AppError>;
}

#[derive(Clone)]
pub struct OrderRepository {
    client: UpstreamClient,
}

impl OrderRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderSource for OrderRepository {
    // GET /order
    async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        self.client.get_json("/order").await
    }
}
