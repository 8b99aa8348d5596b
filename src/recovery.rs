use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::json;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::errors::AppError;
use crate::identifier::fingerprint;
use crate::metrics::{RECOVERY_LATENCY, UPSTREAM_FAILURES_TOTAL};

#[async_trait]
pub trait RecoveryMailer: Send + Sync {
    async fn send_recovery(&self, email: &str, redirect_to: &str) -> Result<(), AppError>;
}

// Hosted auth backend's "recover" endpoint
pub struct BaasRecoveryClient {
    client: Client,
    base_url: String,
    anon_key: String,
    timeout: Duration,
}

impl BaasRecoveryClient {
    pub fn new(client: Client, base_url: String, anon_key: String, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            anon_key,
            timeout,
        }
    }

    pub fn recover_url(&self, redirect_to: &str) -> Result<Url, AppError> {
        Url::parse_with_params(
            &format!("{}/auth/v1/recover", self.base_url),
            &[("redirect_to", redirect_to)],
        )
        .map_err(|e| AppError::Internal(format!("Invalid auth backend URL: {}", e)))
    }
}

#[async_trait]
impl RecoveryMailer for BaasRecoveryClient {
    async fn send_recovery(&self, email: &str, redirect_to: &str) -> Result<(), AppError> {
        let url = self.recover_url(redirect_to)?;
        let start = Instant::now();

        let result = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .timeout(self.timeout)
            .json(&json!({ "email": email }))
            .send()
            .await;

        RECOVERY_LATENCY.observe(start.elapsed().as_secs_f64());

        let response = result.map_err(|e| {
            UPSTREAM_FAILURES_TOTAL.inc();
            error!("Failed to reach auth backend: {}", e);
            AppError::Upstream("Auth backend unreachable".to_string())
        })?;

        if !response.status().is_success() {
            UPSTREAM_FAILURES_TOTAL.inc();
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, "Auth backend rejected recovery request: {}", body);
            return Err(AppError::Upstream(format!(
                "Auth backend returned {}",
                status.as_u16()
            )));
        }

        info!(account = %fingerprint(email), "Recovery email requested");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> BaasRecoveryClient {
        BaasRecoveryClient::new(
            Client::new(),
            base.to_string(),
            "anon".to_string(),
            Duration::from_secs(1),
        )
    }

    #[test]
    fn recover_url_encodes_redirect() {
        let url = client("https://hub.example.co")
            .recover_url("https://app.example.co/auth/reset-password?x=1")
            .unwrap();

        assert_eq!(url.path(), "/auth/v1/recover");
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "redirect_to");
        assert_eq!(value, "https://app.example.co/auth/reset-password?x=1");
    }

    #[test]
    fn bad_base_url_is_internal_error() {
        let err = client("not a url").recover_url("x").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn unreachable_backend_is_upstream_error() {
        // port 9 (discard) on localhost; nothing listens there in tests
        let err = client("http://127.0.0.1:9")
            .send_recovery("a@x.com", "http://localhost/reset")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
