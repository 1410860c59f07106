//! Server-side delivery of contact messages through the EmailJS REST API.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::contact::{ContactError, ContactMessage, Mailer};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";
pub const ENDPOINT_VAR: &str = "EMAILJS_ENDPOINT";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Needed when the EmailJS account only allows non-browser calls with a token.
    pub private_key: Option<String>,
    pub endpoint: String,
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| non_empty(name).ok_or(ConfigError::Missing(name));
        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            private_key: non_empty(PRIVATE_KEY_VAR),
            endpoint: non_empty(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

fn build_request<'a>(config: &'a MailConfig, message: &'a ContactMessage) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.private_key.as_deref(),
        template_params: TemplateParams {
            from_name: &message.name,
            reply_to: &message.email,
            message: &message.message,
        },
    }
}

/// Shared through the Leptos context so the server function can reach it.
///
/// A missing config does not stop the server; every send fails with
/// [`ContactError::Config`] instead.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: Result<MailConfig, ConfigError>,
}

impl EmailJsMailer {
    pub fn new(config: Result<MailConfig, ConfigError>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        let config = MailConfig::from_env();
        match &config {
            Ok(c) => tracing::info!(service = %c.service_id, endpoint = %c.endpoint, "mail delivery configured"),
            Err(e) => tracing::warn!(error = %e, "mail delivery disabled"),
        }
        Self::new(config)
    }

    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        let config = self
            .config
            .as_ref()
            .map_err(|e| ContactError::Config(e.to_string()))?;
        let body = build_request(config, message);

        tracing::debug!(endpoint = %config.endpoint, "sending contact message");
        let response = self
            .client
            .post(&config.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContactError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        tracing::info!("contact message delivered");
        Ok(())
    }
}

impl Mailer for EmailJsMailer {
    fn send(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ContactError>> + Send {
        let mailer = self.clone();
        let message = message.clone();
        async move { mailer.deliver(&message).await }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| vars.get(name).cloned()
    }

    fn full_config() -> MailConfig {
        MailConfig::from_lookup(lookup(&[
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_xyz"),
            (PUBLIC_KEY_VAR, "pk_123"),
        ]))
        .unwrap()
    }

    #[test]
    fn test_config_defaults_endpoint() {
        let config = full_config();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.private_key, None);
    }

    #[test]
    fn test_config_reports_first_missing() {
        let err = MailConfig::from_lookup(lookup(&[(SERVICE_ID_VAR, "service_abc")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(TEMPLATE_ID_VAR));

        let err = MailConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err.to_string(), "missing environment variable EMAILJS_SERVICE_ID");
    }

    #[test]
    fn test_config_blank_counts_as_missing() {
        let err = MailConfig::from_lookup(lookup(&[
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_xyz"),
            (PUBLIC_KEY_VAR, "  "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(PUBLIC_KEY_VAR));
    }

    #[test]
    fn test_config_optional_values() {
        let config = MailConfig::from_lookup(lookup(&[
            (SERVICE_ID_VAR, "service_abc"),
            (TEMPLATE_ID_VAR, "template_xyz"),
            (PUBLIC_KEY_VAR, "pk_123"),
            (PRIVATE_KEY_VAR, "secret"),
            (ENDPOINT_VAR, "http://127.0.0.1:9999/send"),
        ]))
        .unwrap();
        assert_eq!(config.private_key.as_deref(), Some("secret"));
        assert_eq!(config.endpoint, "http://127.0.0.1:9999/send");
    }

    #[test]
    fn test_config_values_are_trimmed() {
        let config = MailConfig::from_lookup(lookup(&[
            (SERVICE_ID_VAR, " service_abc "),
            (TEMPLATE_ID_VAR, "template_xyz\n"),
            (PUBLIC_KEY_VAR, "pk_123"),
            (PRIVATE_KEY_VAR, "  secret"),
        ]))
        .unwrap();
        assert_eq!(config.service_id, "service_abc");
        assert_eq!(config.template_id, "template_xyz");
        assert_eq!(config.private_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_request_payload() {
        let config = full_config();
        let message = ContactMessage {
            name: "Max".to_string(),
            email: "max@example.com".to_string(),
            message: "Hi!".to_string(),
        };
        let value = serde_json::to_value(build_request(&config, &message)).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "pk_123",
                "template_params": {
                    "from_name": "Max",
                    "reply_to": "max@example.com",
                    "message": "Hi!"
                }
            })
        );
    }

    #[test]
    fn test_request_payload_with_token() {
        let mut config = full_config();
        config.private_key = Some("secret".to_string());
        let message = ContactMessage::default();
        let value = serde_json::to_value(build_request(&config, &message)).unwrap();
        assert_eq!(value["accessToken"], "secret");
    }

    /// Serves one canned HTTP response on a local port and returns the endpoint URL.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        format!("http://{addr}/send")
    }

    /// Reads headers and a `content-length` body so the client sees a clean exchange.
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn mailer_for(endpoint: String) -> EmailJsMailer {
        let mut config = full_config();
        config.endpoint = endpoint;
        EmailJsMailer::new(Ok(config))
    }

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Max".to_string(),
            email: "max@example.com".to_string(),
            message: "Hi!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_delivery_accepted() {
        let endpoint = serve_once("200 OK", "OK").await;
        let mailer = mailer_for(endpoint);
        assert_eq!(mailer.send(&sample_message()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_delivery_rejected_keeps_status_and_body() {
        let endpoint = serve_once("400 Bad Request", "The user ID is invalid").await;
        let mailer = mailer_for(endpoint);
        let err = mailer.send(&sample_message()).await.unwrap_err();
        assert_eq!(
            err,
            ContactError::Rejected {
                status: 400,
                body: "The user ID is invalid".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_delivery_unreachable_is_transport_error() {
        // bind then drop to get a port nobody listens on
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();
        let mailer = mailer_for(format!("http://{addr}/send"));
        let err = mailer.send(&sample_message()).await.unwrap_err();
        assert!(matches!(err, ContactError::Transport(_)), "{err:?}");
    }

    #[tokio::test]
    async fn test_unconfigured_mailer_fails() {
        let mailer = EmailJsMailer::new(Err(ConfigError::Missing(SERVICE_ID_VAR)));
        let err = mailer.send(&ContactMessage::default()).await.unwrap_err();
        assert_eq!(
            err,
            ContactError::Config("missing environment variable EMAILJS_SERVICE_ID".to_string())
        );
    }
}
