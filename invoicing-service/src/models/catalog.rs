//! Add-on service catalog for invoicing-service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

use super::line_item::check_rate;

/// A purchasable add-on service. Pure data; presentation lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalogEntry {
    id: String,
    name: String,
    price: Decimal,
}

impl ServiceCatalogEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, AppError> {
        let id = id.into();
        if let Err(e) = check_rate(price) {
            tracing::warn!(service_id = %id, error = %e, "Rejected catalog entry");
            return Err(e);
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// Fixed, read-only list of add-on services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCatalog {
    entries: Vec<ServiceCatalogEntry>,
}

impl ServiceCatalog {
    /// Build a catalog from already-validated entries. Later duplicates of an
    /// id are dropped.
    pub fn new(entries: Vec<ServiceCatalogEntry>) -> Self {
        let mut unique: Vec<ServiceCatalogEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if unique.iter().any(|e| e.id == entry.id) {
                tracing::warn!(service_id = %entry.id, "Duplicate catalog entry ignored");
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    pub fn entries(&self) -> &[ServiceCatalogEntry] {
        &self.entries
    }

    pub fn find(&self, id: &str) -> Option<&ServiceCatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        // (id, name, price in cents)
        const SERVICES: [(&str, &str, i64); 5] = [
            ("breakfast", "Breakfast", 2499),
            ("wifi", "Premium WiFi", 999),
            ("parking", "Parking", 1999),
            ("dining", "Room Service", 3999),
            ("entertainment", "Movie Package", 1499),
        ];

        Self {
            entries: SERVICES
                .iter()
                .map(|(id, name, cents)| ServiceCatalogEntry {
                    id: id.to_string(),
                    name: name.to_string(),
                    price: Decimal::new(*cents, 2),
                })
                .collect(),
        }
    }
}
