// src/upstream/client.rs

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::common::error::AppError;

// Cliente HTTP compartilhado por todos os repositórios da API do restaurante.
// reqwest::Client já é um pool, clonar é barato.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // GET + checagem de status + JSON
    pub async fn get_json<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::warn!("API do restaurante respondeu {} em {}", status, path);
            return Err(AppError::UpstreamStatus {
                endpoint: path.to_string(),
                status,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;
    use tokio::net::TcpListener;

    /// Sobe um servidor axum numa porta efêmera fazendo o papel da API do restaurante.
    pub async fn spawn_stub(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}
