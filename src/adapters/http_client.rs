use {
    crate::domain::{
        error::ConnectorError,
        id::ElectronicPaymentId,
        provider::{
            ApiFuture, BudgetRequest, ProviderApi, ProviderOrder, ProviderPayment,
            ProviderRequest, ServiceEntry,
        },
    },
    rust_decimal::Decimal,
    std::{env, time::Duration},
};

/// HTTP client for the Provider's electronic-payment endpoints.
pub struct HttpProviderClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProviderClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ConnectorError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConnectorError::Config(format!("http client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Reads `EPAY_BASE_URL` (required) and `EPAY_TIMEOUT_SECS` (default 30).
    pub fn from_env() -> Result<Self, ConnectorError> {
        dotenvy::dotenv().ok();

        let base_url = env::var("EPAY_BASE_URL")
            .map_err(|_| ConnectorError::Config("EPAY_BASE_URL must be set".into()))?;
        let timeout = env::var("EPAY_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(30);

        Self::new(base_url, Duration::from_secs(timeout))
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ConnectorError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "provider GET");
        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ConnectorError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "provider POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        decode(response).await
    }
}

fn transport_error(err: reqwest::Error) -> ConnectorError {
    ConnectorError::Provider(format!("transport: {err}"))
}

async fn decode<T>(response: reqwest::Response) -> Result<T, ConnectorError>
where
    T: serde::de::DeserializeOwned,
{
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ConnectorError::Provider(format!(
            "provider returned {status}: {body}"
        )));
    }

    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(ConnectorError::from)
}

impl ProviderApi for HttpProviderClient {
    fn create_payment_request(&self, request: ProviderRequest) -> ApiFuture<'_, ProviderOrder> {
        Box::pin(async move { self.post_json("/pagos", &request).await })
    }

    fn get_variable_cost(&self, budget: BudgetRequest) -> ApiFuture<'_, Decimal> {
        Box::pin(async move { self.post_json("/presupuestos", &budget).await })
    }

    fn validate_payment(&self, payment_id: ElectronicPaymentId) -> ApiFuture<'_, ProviderPayment> {
        Box::pin(async move {
            self.get_json(&format!("/pagos/{payment_id}/validacion")).await
        })
    }

    fn get_payment_format(&self, payment_id: ElectronicPaymentId) -> ApiFuture<'_, String> {
        Box::pin(async move {
            self.get_json(&format!("/pagos/{payment_id}/formato")).await
        })
    }

    fn get_services_list(&self) -> ApiFuture<'_, Vec<ServiceEntry>> {
        Box::pin(async move { self.get_json("/servicios").await })
    }
}
