use {
    chrono::NaiveDateTime,
    rust_decimal::Decimal,
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Attribute key under which the payment-format document URL is exposed to
/// callers that still read the order through its attribute view.
pub const PAYMENT_FORMAT_URL_ATTR: &str = "PaymentFormatUrl";

/// What the upstream caller submits to open a payment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrderRequest {
    pub requested_by: String,
    pub tax_id: String,
    pub address: String,
    pub base_transaction_id: String,
    pub concepts: Vec<Concept>,
}

/// One billable line in a payment order request. The uid is opaque to the
/// caller but must hold the Provider's numeric service id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub uid: String,
    pub quantity: Decimal,
}

/// A priced concept, as returned by fixed-cost resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptCost {
    pub concept_uid: String,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    pub total: Decimal,
}

/// An opened payment order in caller vocabulary.
///
/// Dates the Provider failed to format legibly stay `None`; the order is
/// still usable without them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub uid: String,
    pub issue_time: Option<NaiveDateTime>,
    pub due_date: Option<NaiveDateTime>,
    pub total: Decimal,
    pub status: String,
    pub payment_format_url: String,
    /// Open extension map for attributes the fixed fields don't cover.
    pub attributes: BTreeMap<String, String>,
}

impl PaymentOrder {
    /// Attribute view over the order: the typed format URL first, then the
    /// open extension map.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        if key == PAYMENT_FORMAT_URL_ATTR {
            return Some(&self.payment_format_url);
        }
        self.attributes.get(key).map(String::as_str)
    }
}

/// A payment confirmation in caller vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub uid: String,
    pub payment_date: Option<NaiveDateTime>,
    pub receipt_url: String,
    pub total: Decimal,
    pub status: String,
}
