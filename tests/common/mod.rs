#![allow(dead_code)]

use epay_link::domain::id::ElectronicPaymentId;
use epay_link::domain::provider::{
    ApiFuture, BudgetRequest, ProviderApi, ProviderOrder, ProviderPayment, ProviderRequest,
    ServiceEntry,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted Provider double. Serves canned responses, records every call in
/// order, and can delay the services-list call to widen race windows.
pub struct StubProvider {
    pub order: Mutex<ProviderOrder>,
    pub format_url: Mutex<String>,
    pub services: Mutex<Vec<ServiceEntry>>,
    pub payment: Mutex<ProviderPayment>,
    pub variable_cost: Mutex<Decimal>,

    pub create_error: Mutex<Option<String>>,
    pub format_error: Mutex<Option<String>>,
    pub list_delay: Mutex<Option<Duration>>,

    pub calls: Mutex<Vec<&'static str>>,
    pub last_request: Mutex<Option<ProviderRequest>>,
    pub last_budget: Mutex<Option<BudgetRequest>>,
    pub last_format_id: Mutex<Option<i64>>,
    pub last_validated_id: Mutex<Option<i64>>,
}

impl Default for StubProvider {
    fn default() -> Self {
        Self {
            order: Mutex::new(make_order(9001, "https://x/f/9001-embedded")),
            format_url: Mutex::new("https://x/f/9001".to_string()),
            services: Mutex::new(vec![
                make_service(12, "Certificado de libertad de gravamen", dec!(100.00)),
                make_service(77, "Inscripción por hoja", dec!(2.50)),
            ]),
            payment: Mutex::new(make_provider_payment(555)),
            variable_cost: Mutex::new(dec!(42.75)),
            create_error: Mutex::new(None),
            format_error: Mutex::new(None),
            list_delay: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            last_request: Mutex::new(None),
            last_budget: Mutex::new(None),
            last_format_id: Mutex::new(None),
            last_validated_id: Mutex::new(None),
        }
    }
}

impl StubProvider {
    fn record(&self, op: &'static str) {
        self.calls.lock().unwrap().push(op);
    }

    pub fn sequence(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }
}

impl ProviderApi for StubProvider {
    fn create_payment_request(&self, request: ProviderRequest) -> ApiFuture<'_, ProviderOrder> {
        Box::pin(async move {
            self.record("create_payment_request");
            *self.last_request.lock().unwrap() = Some(request);
            if let Some(message) = self.create_error.lock().unwrap().clone() {
                return Err(epay_link::domain::error::ConnectorError::Provider(message));
            }
            Ok(self.order.lock().unwrap().clone())
        })
    }

    fn get_variable_cost(&self, budget: BudgetRequest) -> ApiFuture<'_, Decimal> {
        Box::pin(async move {
            self.record("get_variable_cost");
            *self.last_budget.lock().unwrap() = Some(budget);
            Ok(*self.variable_cost.lock().unwrap())
        })
    }

    fn validate_payment(&self, payment_id: ElectronicPaymentId) -> ApiFuture<'_, ProviderPayment> {
        Box::pin(async move {
            self.record("validate_payment");
            *self.last_validated_id.lock().unwrap() = Some(payment_id.value());
            Ok(self.payment.lock().unwrap().clone())
        })
    }

    fn get_payment_format(&self, payment_id: ElectronicPaymentId) -> ApiFuture<'_, String> {
        Box::pin(async move {
            self.record("get_payment_format");
            *self.last_format_id.lock().unwrap() = Some(payment_id.value());
            if let Some(message) = self.format_error.lock().unwrap().clone() {
                return Err(epay_link::domain::error::ConnectorError::Provider(message));
            }
            Ok(self.format_url.lock().unwrap().clone())
        })
    }

    fn get_services_list(&self) -> ApiFuture<'_, Vec<ServiceEntry>> {
        Box::pin(async move {
            self.record("get_services_list");
            let delay = *self.list_delay.lock().unwrap();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.services.lock().unwrap().clone())
        })
    }
}

// ── Builders ───────────────────────────────────────────────────────────────

pub fn make_order(id: i64, format_url: &str) -> ProviderOrder {
    ProviderOrder {
        id_pago_electronico: id,
        fecha_generacion: "15/03/2026 10:30:00".to_string(),
        fecha_vencimiento: "30/03/2026 23:59:59".to_string(),
        total: dec!(300.00),
        id_estatus: 1,
        url_formato_pago: format_url.to_string(),
    }
}

pub fn make_service(id: i64, descripcion: &str, importe: Decimal) -> ServiceEntry {
    ServiceEntry {
        id_servicio: id,
        descripcion: descripcion.to_string(),
        importe,
    }
}

pub fn make_provider_payment(id: i64) -> ProviderPayment {
    ProviderPayment {
        id_cobro: id,
        fecha_cobro: "01/04/2026 12:00:00".to_string(),
        url_recibo: format!("https://x/r/{id}"),
        total: dec!(300.00),
        estatus: "pagado".to_string(),
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
}
