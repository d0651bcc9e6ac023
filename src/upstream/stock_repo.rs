// src/upstream/stock_repo.rs

use async_trait::async_trait;

use crate::{common::error::AppError, models::stock::StockItem, upstream::UpstreamClient};

#[async_trait]
pub trait StockSource: Send + Sync {
    /// Todos os produtos em estoque
    async fn list_stock(&self) -> Result<Vec<StockItem>, AppError>;

    /// Produtos que a API do restaurante marca para reposição
    async fn list_restock(&self) -> Result<Vec<StockItem>, AppError>;
}

#[derive(Clone)]
pub struct StockRepository {
    client: UpstreamClient,
}

impl StockRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StockSource for StockRepository {
    async fn list_stock(&self) -> Result<Vec<StockItem>, AppError> {
        self.client.get_json("/stock").await
    }

    async fn list_restock(&self) -> Result<Vec<StockItem>, AppError> {
        self.client.get_json("/stock/restock").await
    }
}
