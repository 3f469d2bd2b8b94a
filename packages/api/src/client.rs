use admin::models::{
    Account, ApiResponse, ForgotRequest, LoginRequest, LoginResponse, Order, RecordId,
    RegisterRequest,
};
use admin::{AccountService, Entity, EntityService, Payload, TransportError};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::token::TokenStore;

/// Path prefix of every backend endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// HTTP client for the storefront backend.
///
/// Cloning is cheap; clones share the connection pool and the bearer token.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    token: TokenStore,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: TokenStore::new(),
        }
    }

    pub fn from_config(config: &admin::config::ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// Absolute URL of an endpoint path such as `/vouchers`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse<T>, TransportError> {
        let url = self.url(path);
        tracing::debug!("{method} {url}");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = self.token.get() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("{method} {url} failed: {e}");
            TransportError::new(e.to_string())
        })?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()).with_status(status))?;

        decode(status, &text)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> Result<ApiResponse<T>, TransportError> {
        let body = serde_json::to_value(body).map_err(|e| TransportError::new(e.to_string()))?;
        self.send(method, path, Some(body)).await
    }

    /// Exchanges credentials for a bearer token, which is stored for later requests.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<ApiResponse<LoginResponse>, TransportError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: ApiResponse<LoginResponse> =
            self.send_json(Method::POST, "/auth/login", &request).await?;
        if let Some(login) = &response.data {
            self.token.set(&login.access_token);
            tracing::info!("logged in as {username}");
        }
        Ok(response)
    }

    /// Ends the session on the backend. The local token is dropped even if that fails.
    pub async fn logout(&self) -> Result<ApiResponse<Value>, TransportError> {
        let result = self.send(Method::POST, "/auth/logout", None).await;
        self.token.clear();
        result
    }

    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<Value>, TransportError> {
        self.send_json(Method::POST, "/auth/register", request).await
    }

    /// Asks the backend to mail a password reset.
    pub async fn forgot_password(&self, email: &str) -> Result<ApiResponse<Value>, TransportError> {
        let request = ForgotRequest {
            email: email.to_string(),
        };
        self.send_json(Method::POST, "/auth/forgot", &request).await
    }

    pub async fn list_orders(&self) -> Result<ApiResponse<Vec<Order>>, TransportError> {
        self.send(Method::GET, "/orders", None).await
    }
}

/// Parses a response body into an envelope, whatever the HTTP status.
///
/// The backend reports errors inside the envelope, so a 400 with a JSON body is a
/// regular answer. A body that is not an envelope becomes a [`TransportError`]
/// carrying the HTTP status.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiResponse<T>, TransportError> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(mut envelope) => {
            envelope.status_code.get_or_insert(status);
            if !envelope.is_ok_status() {
                tracing::warn!(
                    "request answered {status}: {}",
                    envelope.message.as_deref().unwrap_or("no message")
                );
            }
            Ok(envelope)
        }
        Err(e) => {
            let message = if body.trim().is_empty() {
                format!("HTTP {status}")
            } else {
                tracing::warn!("undecodable response ({status}): {e}");
                e.to_string()
            };
            Err(TransportError::new(message).with_status(status))
        }
    }
}

impl<E: Entity> EntityService<E> for RestClient {
    async fn list(&self) -> Result<ApiResponse<Vec<E>>, TransportError> {
        self.send(Method::GET, &format!("/{}", E::RESOURCE), None).await
    }

    async fn create(&self, payload: Payload) -> Result<ApiResponse<E>, TransportError> {
        self.send(Method::POST, &format!("/{}", E::RESOURCE), Some(Value::Object(payload)))
            .await
    }

    async fn update(&self, payload: Payload) -> Result<ApiResponse<E>, TransportError> {
        self.send(Method::PUT, &format!("/{}", E::RESOURCE), Some(Value::Object(payload)))
            .await
    }

    async fn delete(&self, id: RecordId) -> Result<ApiResponse<Value>, TransportError> {
        self.send(Method::DELETE, &format!("/{}/{id}", E::RESOURCE), None)
            .await
    }
}

impl AccountService for RestClient {
    async fn fetch_account(&self) -> Result<ApiResponse<Account>, TransportError> {
        self.send(Method::GET, "/auth/account", None).await
    }
}
