use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::CONNECTION;
use reqwest::{Client, Url};
use serde_json::json;
use std::time::Duration;

use crate::config::DeliveryConfig;
use crate::delivery::{DeliveryOptions, MessageSender, Recipient};
use crate::error::MealPlanError;

/// Sends messages through an HTTP messaging gateway.
///
/// Every message is one `POST {base_url}/messages` with a JSON body of
/// `recipient`, `kind` and `message`.
pub struct WebhookSender {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

enum Attempt {
    Sent,
    Retry(String),
    Fail(String),
}

impl WebhookSender {
    /// Create a sender from configuration; `None` when no gateway is configured
    pub fn from_config(
        config: &DeliveryConfig,
        timeout: Duration,
    ) -> Result<Option<Self>, MealPlanError> {
        let Some(base_url) = config.gateway_url.clone() else {
            return Ok(None);
        };
        Url::parse(&base_url).map_err(|e| {
            MealPlanError::DeliveryError(format!("invalid gateway URL {base_url:?}: {e}"))
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                MealPlanError::DeliveryError(format!("could not build gateway client: {e}"))
            })?;
        Ok(Some(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
        }))
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_token: Option<String>) -> Self {
        WebhookSender {
            client: Client::new(),
            base_url,
            api_token,
        }
    }

    async fn attempt(&self, recipient: &Recipient, body: &str, close: bool) -> Attempt {
        let mut request = self
            .client
            .post(format!("{}/messages", self.base_url.trim_end_matches('/')))
            .json(&json!({
                "recipient": recipient.id(),
                "kind": recipient.kind(),
                "message": body,
            }));
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }
        if close {
            request = request.header(CONNECTION, "close");
        }

        match request.send().await {
            Ok(response) if response.status().is_success() => Attempt::Sent,
            Ok(response) => {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                let reason = format!("gateway answered {status}: {text}");
                if status.is_server_error() {
                    Attempt::Retry(reason)
                } else {
                    Attempt::Fail(reason)
                }
            }
            Err(e) => Attempt::Retry(e.to_string()),
        }
    }
}

#[async_trait]
impl MessageSender for WebhookSender {
    fn sender_name(&self) -> &str {
        "webhook"
    }

    async fn send(
        &self,
        recipient: &Recipient,
        body: &str,
        options: &DeliveryOptions,
    ) -> Result<(), MealPlanError> {
        if !options.delay.is_zero() {
            debug!("Waiting {:?} before sending to {}", options.delay, recipient);
            tokio::time::sleep(options.delay).await;
        }

        let reason = match self.attempt(recipient, body, options.close_after_send).await {
            Attempt::Sent => return Ok(()),
            Attempt::Fail(reason) => return Err(MealPlanError::DeliveryError(reason)),
            Attempt::Retry(reason) => reason,
        };

        warn!(
            "Sending to {} failed ({}), retrying in {:?}",
            recipient, reason, options.retry_wait
        );
        tokio::time::sleep(options.retry_wait).await;

        match self.attempt(recipient, body, options.close_after_send).await {
            Attempt::Sent => Ok(()),
            Attempt::Fail(reason) | Attempt::Retry(reason) => {
                Err(MealPlanError::DeliveryError(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn no_wait() -> DeliveryOptions {
        DeliveryOptions::default()
    }

    #[tokio::test]
    async fn test_send_group_message() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .match_header("authorization", "Bearer secret")
            .match_body(Matcher::Json(json!({
                "recipient": "AbC123",
                "kind": "group",
                "message": "🍝 *Pasta* `4,20€`\n- Penne",
            })))
            .with_status(201)
            .create_async()
            .await;

        let sender = WebhookSender::with_base_url(server.url(), Some("secret".to_string()));
        sender
            .send(
                &Recipient::group("AbC123"),
                "🍝 *Pasta* `4,20€`\n- Penne",
                &no_wait(),
            )
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_close_after_send_header() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .match_header("connection", "close")
            .with_status(200)
            .create_async()
            .await;

        let sender = WebhookSender::with_base_url(format!("{}/", server.url()), None);
        let options = DeliveryOptions {
            close_after_send: true,
            ..no_wait()
        };
        sender
            .send(&Recipient::contact("+4917"), "Fehler", &options)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_is_retried_once() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .with_status(502)
            .expect(2)
            .create_async()
            .await;

        let sender = WebhookSender::with_base_url(server.url(), None);
        let result = sender
            .send(&Recipient::group("AbC123"), "Plan", &no_wait())
            .await;
        assert!(matches!(result, Err(MealPlanError::DeliveryError(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/messages")
            .with_status(401)
            .with_body("bad token")
            .expect(1)
            .create_async()
            .await;

        let sender = WebhookSender::with_base_url(server.url(), None);
        let result = sender
            .send(&Recipient::group("AbC123"), "Plan", &no_wait())
            .await;
        match result {
            Err(MealPlanError::DeliveryError(reason)) => assert!(reason.contains("bad token")),
            other => panic!("expected delivery error, got {other:?}"),
        }
        mock.assert_async().await;
    }

    #[test]
    fn test_from_config_without_gateway() {
        let sender =
            WebhookSender::from_config(&DeliveryConfig::default(), Duration::from_secs(5)).unwrap();
        assert!(sender.is_none());
    }

    #[test]
    fn test_from_config_rejects_invalid_gateway_url() {
        let config = DeliveryConfig {
            gateway_url: Some("not a url".to_string()),
            ..DeliveryConfig::default()
        };
        let result = WebhookSender::from_config(&config, Duration::from_secs(5));
        assert!(matches!(result, Err(MealPlanError::DeliveryError(_))));
    }
}
