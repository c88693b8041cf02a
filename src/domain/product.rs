//! Product records and the editable draft.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{InputError, InvalidProductId};

/// Backend key of a persisted product. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Returns `None` for zero, which the backend never assigns.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = InvalidProductId;

    /// Parses a route segment such as `"42"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidProductId(s.to_string()))
    }
}

/// The four editable fields of a product.
///
/// Serialized with the backend's field names. A draft is always complete:
/// there is no "unset" state, only empty text and zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Returns a copy of this draft with one field replaced by `input`.
    ///
    /// Text fields take the input verbatim. Numeric fields are coerced:
    /// surrounding whitespace is ignored, empty input means zero and the
    /// quantity is truncated toward zero. No constraint is checked here.
    pub fn with_field(&self, field: ProductField, input: &str) -> Result<Self, InputError> {
        let mut next = self.clone();
        match field {
            ProductField::Name => next.name = input.to_string(),
            ProductField::Description => next.description = input.to_string(),
            ProductField::Price => next.price = coerce_number(field, input)?,
            ProductField::Quantity => next.quantity = coerce_quantity(input)?,
        }
        Ok(next)
    }

    /// Text shown in the input bound to `field`.
    pub fn field_text(&self, field: ProductField) -> String {
        match field {
            ProductField::Name => self.name.clone(),
            ProductField::Description => self.description.clone(),
            ProductField::Price => self.price.to_string(),
            ProductField::Quantity => self.quantity.to_string(),
        }
    }
}

fn coerce_number(field: ProductField, input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber {
            field,
            input: input.to_string(),
        }),
    }
}

fn coerce_quantity(input: &str) -> Result<i64, InputError> {
    let value = coerce_number(ProductField::Quantity, input)?.trunc();
    // i64::MAX as f64 is 2^63, one past the largest i64
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(InputError::NotANumber {
            field: ProductField::Quantity,
            input: input.to_string(),
        });
    }
    Ok(value as i64)
}

/// A product as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub draft: ProductDraft,
}

impl Product {
    pub fn new(id: ProductId, draft: ProductDraft) -> Self {
        Self { id, draft }
    }
}

/// Names of the form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductField {
    Name,
    Description,
    Price,
    Quantity,
}

impl ProductField {
    pub const ALL: [ProductField; 4] = [
        ProductField::Name,
        ProductField::Description,
        ProductField::Price,
        ProductField::Quantity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProductField::Name => "name",
            ProductField::Description => "description",
            ProductField::Price => "price",
            ProductField::Quantity => "quantity",
        }
    }

    /// Human-readable input label.
    pub fn label(self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Description => "Description",
            ProductField::Price => "Price",
            ProductField::Quantity => "Quantity",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ProductField::Price | ProductField::Quantity)
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ProductField::Description)
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductField {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| InputError::UnknownField(s.to_string()))
    }
}
