use {
    super::error::ConnectorError,
    super::id::ElectronicPaymentId,
    rust_decimal::Decimal,
    serde::{Deserialize, Serialize},
    std::{future::Future, pin::Pin},
};

/// Payment request in the Provider's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRequest {
    pub contribuyente: String,
    pub rfc: String,
    pub direccion: String,
    pub servicios: Vec<ServiceLine>,
    pub tramite: String,
}

/// One `(service id, quantity)` pair of a payment request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    pub id_servicio: i64,
    pub cantidad: i32,
}

/// Order generated by the Provider. Both date fields arrive as
/// locale-formatted strings, not timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderOrder {
    pub id_pago_electronico: i64,
    pub fecha_generacion: String,
    pub fecha_vencimiento: String,
    pub total: Decimal,
    pub id_estatus: i32,
    pub url_formato_pago: String,
}

/// One row of the Provider's service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEntry {
    pub id_servicio: i64,
    pub descripcion: String,
    pub importe: Decimal,
}

/// Variable-cost quote request. Quantity is always 1; the Provider applies
/// its own rate tables to `valor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    pub cantidad: i32,
    pub id_pago_electronico: i64,
    pub id_servicio: i64,
    pub valor: Decimal,
}

/// Settled-payment record as the Provider reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderPayment {
    pub id_cobro: i64,
    pub fecha_cobro: String,
    pub url_recibo: String,
    pub total: Decimal,
    pub estatus: String,
}

pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ConnectorError>> + Send + 'a>>;

/// The Provider's remote-call surface. Transport, session setup, and
/// whatever retry policy exists all live behind this boundary; the
/// connector only awaits.
pub trait ProviderApi: Send + Sync {
    fn create_payment_request(&self, request: ProviderRequest) -> ApiFuture<'_, ProviderOrder>;

    fn get_variable_cost(&self, budget: BudgetRequest) -> ApiFuture<'_, Decimal>;

    fn validate_payment(&self, payment_id: ElectronicPaymentId) -> ApiFuture<'_, ProviderPayment>;

    fn get_payment_format(&self, payment_id: ElectronicPaymentId) -> ApiFuture<'_, String>;

    fn get_services_list(&self) -> ApiFuture<'_, Vec<ServiceEntry>>;
}
