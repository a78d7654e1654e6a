use {
    crate::domain::{
        error::ConnectorError,
        id::{ElectronicPaymentId, ServiceId},
        order::{Concept, ConceptCost, Payment, PaymentOrder, PaymentOrderRequest},
        provider::{BudgetRequest, ProviderApi, ProviderOrder, ProviderPayment, ProviderRequest, ServiceLine},
    },
    crate::services::catalog::ServiceCatalog,
    chrono::{NaiveDate, NaiveDateTime, NaiveTime},
    rust_decimal::{Decimal, prelude::ToPrimitive},
    std::{collections::BTreeMap, sync::Arc},
};

/// Translates between the caller's payment-order vocabulary and the
/// Provider's wire vocabulary. Stateless apart from its injected
/// collaborators; every operation builds its entities fresh.
pub struct PaymentAdapter {
    api: Arc<dyn ProviderApi>,
    catalog: Arc<ServiceCatalog>,
}

impl PaymentAdapter {
    pub fn new(api: Arc<dyn ProviderApi>, catalog: Arc<ServiceCatalog>) -> Self {
        Self { api, catalog }
    }

    /// Opens a payment order with the Provider and returns it in caller
    /// vocabulary.
    ///
    /// Two remote calls, strictly ordered: the order creation, then a
    /// follow-up fetch of the payment-format URL for the new order id. The
    /// follow-up value is authoritative and overwrites the URL embedded in
    /// the creation response. If the follow-up fails the order already
    /// exists on the Provider side; the error surfaces as-is.
    pub async fn create_payment_order(
        &self,
        request: &PaymentOrderRequest,
    ) -> Result<PaymentOrder, ConnectorError> {
        let wire = map_request(request)?;
        let order = self.api.create_payment_request(wire).await?;

        let order_id = ElectronicPaymentId::from(order.id_pago_electronico);
        let mut payment_order = map_order(&order);

        let format_url = self.api.get_payment_format(order_id).await?;
        payment_order.payment_format_url = format_url;

        Ok(payment_order)
    }

    /// Resolves the cost of a fixed-price concept from the service catalog.
    /// An id missing from the catalog is a hard failure, never a zero cost.
    pub async fn fixed_concept_cost(
        &self,
        service_uid: &str,
        quantity: Decimal,
    ) -> Result<ConceptCost, ConnectorError> {
        let service_id = ServiceId::parse(service_uid)?;
        let service = self.catalog.get_service(self.api.as_ref(), service_id).await?;

        let unit_cost = service.importe;
        let total = unit_cost.checked_mul(quantity).ok_or_else(|| {
            ConnectorError::Validation(format!(
                "cost overflow for service {}: {unit_cost} * {quantity}",
                service.id_servicio
            ))
        })?;

        Ok(ConceptCost {
            concept_uid: service.id_servicio.to_string(),
            quantity,
            unit_cost,
            total,
        })
    }

    /// Asks the Provider to quote a usage-based concept. The taxable base
    /// goes out untouched; all rate math happens on the Provider side.
    pub async fn variable_concept_cost(
        &self,
        electronic_payment_uid: &str,
        service_uid: &str,
        taxable_base: Decimal,
    ) -> Result<Decimal, ConnectorError> {
        let payment_id = ElectronicPaymentId::parse(electronic_payment_uid)?;
        let service_id = ServiceId::parse(service_uid)?;

        let budget = BudgetRequest {
            cantidad: 1,
            id_pago_electronico: payment_id.value(),
            id_servicio: service_id.value(),
            valor: taxable_base,
        };

        self.api.get_variable_cost(budget).await
    }

    /// Fetches the confirmation state of a payment. Always a fresh remote
    /// call, never cached.
    pub async fn get_payment(
        &self,
        electronic_payment_uid: &str,
    ) -> Result<Payment, ConnectorError> {
        let payment_id = ElectronicPaymentId::parse(electronic_payment_uid)?;
        let payment = self.api.validate_payment(payment_id).await?;

        Ok(map_payment(&payment))
    }
}

// ── Mapping helpers ─────────────────────────────────────────────────────────

/// Caller request → Provider wire shape. Requester fields copy verbatim;
/// concept uids must hold numeric service ids and quantities truncate to
/// the Provider's integer quantity.
pub fn map_request(request: &PaymentOrderRequest) -> Result<ProviderRequest, ConnectorError> {
    Ok(ProviderRequest {
        contribuyente: request.requested_by.clone(),
        rfc: request.tax_id.clone(),
        direccion: request.address.clone(),
        servicios: map_concepts(&request.concepts)?,
        tramite: request.base_transaction_id.clone(),
    })
}

fn map_concepts(concepts: &[Concept]) -> Result<Vec<ServiceLine>, ConnectorError> {
    concepts
        .iter()
        .map(|concept| {
            let service_id = ServiceId::parse(&concept.uid)?;
            let cantidad = concept.quantity.trunc().to_i32().ok_or_else(|| {
                ConnectorError::Validation(format!(
                    "quantity {} does not fit the provider's integer quantity",
                    concept.quantity
                ))
            })?;
            Ok(ServiceLine {
                id_servicio: service_id.value(),
                cantidad,
            })
        })
        .collect()
}

/// Provider order → caller vocabulary. Unparseable dates are tolerated and
/// left unset; everything else maps directly.
pub fn map_order(order: &ProviderOrder) -> PaymentOrder {
    PaymentOrder {
        uid: order.id_pago_electronico.to_string(),
        issue_time: parse_date_field("fechaGeneracion", &order.fecha_generacion),
        due_date: parse_date_field("fechaVencimiento", &order.fecha_vencimiento),
        total: order.total,
        status: order.id_estatus.to_string(),
        payment_format_url: order.url_formato_pago.clone(),
        attributes: BTreeMap::new(),
    }
}

/// Provider payment → caller vocabulary, field for field.
pub fn map_payment(payment: &ProviderPayment) -> Payment {
    Payment {
        uid: payment.id_cobro.to_string(),
        payment_date: parse_date_field("fechaCobro", &payment.fecha_cobro),
        receipt_url: payment.url_recibo.clone(),
        total: payment.total,
        status: payment.estatus.clone(),
    }
}

fn parse_date_field(field: &'static str, raw: &str) -> Option<NaiveDateTime> {
    let parsed = parse_provider_date(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::warn!(field, value = raw, "unparseable provider date, leaving unset");
    }
    parsed
}

/// Lenient parse for the Provider's date strings: the locale format it has
/// been observed to emit plus ISO-8601, date-only variants at midnight.
pub fn parse_provider_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in ["%d/%m/%Y %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }

    for format in ["%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(raw, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }

    None
}
