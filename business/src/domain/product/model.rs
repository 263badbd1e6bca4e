use chrono::{DateTime, Utc};

use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        description: Option<String>,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            created_at,
            updated_at,
        }
    }
}

/// A product paired with whatever the information service returned for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithExtraData {
    pub product: Product,
    pub extra_data: Option<serde_json::Value>,
}

/// Every updatable field of a product. Used for inserts and full replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ProductPayload {
    pub fn new(
        name: String,
        description: Option<String>,
        price: f64,
    ) -> Result<Self, ProductError> {
        validate_name(&name)?;
        validate_price(price)?;

        Ok(Self {
            name,
            description,
            price,
        })
    }
}

/// A partial update. `None` keeps the stored value.
///
/// `description` is doubly optional so that a caller can clear it:
/// `Some(None)` writes NULL, `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }

    /// Applies the payload rules to the fields that are present.
    pub fn validate(&self) -> Result<(), ProductError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }

    /// Merges the present fields into `product`. Leaves `updated_at` to the caller.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::NameEmpty);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), ProductError> {
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}
