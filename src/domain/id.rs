use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::error::ConnectorError;

/// Electronic-payment (order) identifier on the Provider side.
///
/// Callers pass these around as opaque strings; the connector requires them
/// to hold a numeric id before anything goes over the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElectronicPaymentId(i64);

impl ElectronicPaymentId {
    pub fn parse(raw: &str) -> Result<Self, ConnectorError> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ConnectorError::InvalidId(raw.to_string()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ElectronicPaymentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Service (billable concept) identifier in the Provider's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(i64);

impl ServiceId {
    pub fn parse(raw: &str) -> Result<Self, ConnectorError> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ConnectorError::InvalidId(raw.to_string()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for ServiceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
