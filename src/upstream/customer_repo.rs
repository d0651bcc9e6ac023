// src/upstream/customer_repo.rs

use async_trait::async_trait;

use crate::{common::error::AppError, models::customers::Customer, upstream::UpstreamClient};

#[async_trait]
pub trait CustomerSource: Send + Sync {
    async fn list_customers(&self) -> Result<Vec<Customer>, AppError>;
}

#[derive(Clone)]
pub struct CustomerRepository {
    client: UpstreamClient,
}

impl CustomerRepository {
    pub fn new(client: UpstreamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CustomerSource for CustomerRepository {
    // GET /customer
    async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.client.get_json("/customer").await
    }
}
