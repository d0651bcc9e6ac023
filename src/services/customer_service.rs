// src/services/customer_service.rs

use std::sync::Arc;

use crate::{common::error::AppError, models::customers::CustomerView, upstream::CustomerSource};

#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerSource>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerSource>) -> Self {
        Self { customers }
    }

    pub async fn ranked(&self) -> Result<Vec<CustomerView>, AppError> {
        let customers = self.customers.list_customers().await?;
        Ok(customers.into_iter().map(CustomerView::from).collect())
    }
}
