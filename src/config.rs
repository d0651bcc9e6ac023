// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;

use crate::{
    services::{CustomerService, DashboardService, StockService},
    upstream::{
        CustomerRepository, CustomerSource, OrderRepository, OrderSource, StockRepository,
        StockSource, UpstreamClient,
    },
};

const DEFAULT_UPSTREAM_API_URL: &str = "http://localhost:3000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub upstream_api_url: String,
    pub bind_addr: String,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Separado do ambiente real para poder testar sem mexer em variáveis do processo
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_api_url = lookup("UPSTREAM_API_URL")
            .unwrap_or_else(|| DEFAULT_UPSTREAM_API_URL.to_string());
        if !upstream_api_url.starts_with("http://") && !upstream_api_url.starts_with("https://") {
            anyhow::bail!("UPSTREAM_API_URL deve começar com http:// ou https:// (recebido '{}')", upstream_api_url);
        }

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("UPSTREAM_TIMEOUT_SECS inválido: '{}'", raw))?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        Ok(Self {
            upstream_api_url,
            bind_addr,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dashboard_service: DashboardService,
    pub stock_service: StockService,
    pub customer_service: CustomerService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = UpstreamClient::new(&config.upstream_api_url, config.upstream_timeout)
            .context("Falha ao montar o cliente HTTP da API do restaurante")?;

        tracing::info!("✅ API do restaurante configurada em {}", config.upstream_api_url);

        // --- Monta o gráfico de dependências ---
        Ok(Self::from_sources(
            config,
            Arc::new(OrderRepository::new(client.clone())),
            Arc::new(CustomerRepository::new(client.clone())),
            Arc::new(StockRepository::new(client)),
        ))
    }

    pub fn from_sources(
        config: Config,
        orders: Arc<dyn OrderSource>,
        customers: Arc<dyn CustomerSource>,
        stock: Arc<dyn StockSource>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            dashboard_service: DashboardService::new(orders, customers.clone(), stock.clone()),
            stock_service: StockService::new(stock),
            customer_service: CustomerService::new(customers),
        }
    }
}
