use core::str::FromStr;

use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, DomainResult, Entity, SweetId};

/// Closed set of sweet categories.
///
/// Serialized (and displayed) as the human-readable label, e.g. `"Nut-Based"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum SweetCategory {
    #[serde(rename = "Nut-Based")]
    NutBased,
    #[serde(rename = "Milk-Based")]
    MilkBased,
    #[serde(rename = "Vegetable-Based")]
    VegetableBased,
    #[serde(rename = "Chocolate")]
    Chocolate,
    #[serde(rename = "Candy")]
    Candy,
    #[serde(rename = "Pastry")]
    Pastry,
    #[default]
    #[serde(rename = "Uncategorized")]
    Uncategorized,
}

impl SweetCategory {
    /// Every category, in menu order.
    pub const ALL: [SweetCategory; 7] = [
        SweetCategory::NutBased,
        SweetCategory::MilkBased,
        SweetCategory::VegetableBased,
        SweetCategory::Chocolate,
        SweetCategory::Candy,
        SweetCategory::Pastry,
        SweetCategory::Uncategorized,
    ];

    /// Display label (also the persisted form).
    pub fn as_str(self) -> &'static str {
        match self {
            SweetCategory::NutBased => "Nut-Based",
            SweetCategory::MilkBased => "Milk-Based",
            SweetCategory::VegetableBased => "Vegetable-Based",
            SweetCategory::Chocolate => "Chocolate",
            SweetCategory::Candy => "Candy",
            SweetCategory::Pastry => "Pastry",
            SweetCategory::Uncategorized => "Uncategorized",
        }
    }

    fn constant_name(self) -> &'static str {
        match self {
            SweetCategory::NutBased => "NUT_BASED",
            SweetCategory::MilkBased => "MILK_BASED",
            SweetCategory::VegetableBased => "VEGETABLE_BASED",
            SweetCategory::Chocolate => "CHOCOLATE",
            SweetCategory::Candy => "CANDY",
            SweetCategory::Pastry => "PASTRY",
            SweetCategory::Uncategorized => "UNCATEGORIZED",
        }
    }
}

impl core::fmt::Display for SweetCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SweetCategory {
    type Err = DomainError;

    /// Accepts the label (`"Milk-Based"`) or the constant name (`"MILK_BASED"`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SweetCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s) || c.constant_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s:?}")))
    }
}

/// Entity: a single inventory line.
///
/// Fields are private; every instance has passed validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SweetRecord", into = "SweetRecord")]
pub struct Sweet {
    id: SweetId,
    name: String,
    category: SweetCategory,
    price: f64,
    quantity: u32,
}

impl Sweet {
    /// Build a validated sweet. Fails on an empty name, a negative or
    /// non-finite price, or a negative quantity.
    pub fn new(
        id: SweetId,
        name: impl Into<String>,
        category: SweetCategory,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        validate_price(price)?;
        let quantity = validate_quantity(quantity)?;

        Ok(Self {
            id,
            name,
            category,
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> SweetCategory {
        self.category
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Stock value of this line (`price * quantity`).
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn to_record(&self) -> SweetRecord {
        SweetRecord {
            id: self.id.get(),
            name: self.name.clone(),
            category: self.category.as_str().to_string(),
            price: self.price,
            quantity: i64::from(self.quantity),
        }
    }

    pub fn from_record(record: SweetRecord) -> DomainResult<Self> {
        let id = SweetId::new(record.id)?;
        let category = record.category.parse()?;
        Self::new(id, record.name, category, record.price, record.quantity)
    }

    pub(crate) fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    pub(crate) fn with_price(&self, price: f64) -> DomainResult<Self> {
        validate_price(price)?;
        Ok(Self {
            price,
            ..self.clone()
        })
    }
}

impl Entity for Sweet {
    type Id = SweetId;

    fn id(&self) -> SweetId {
        self.id
    }
}

/// Loosely-typed wire/storage form of a sweet.
///
/// This is what the store file holds; converting to [`Sweet`] validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweetRecord {
    pub id: u64,
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    pub price: f64,
    pub quantity: i64,
}

fn default_category() -> String {
    SweetCategory::Uncategorized.as_str().to_string()
}

impl From<Sweet> for SweetRecord {
    fn from(value: Sweet) -> Self {
        value.to_record()
    }
}

impl TryFrom<SweetRecord> for Sweet {
    type Error = DomainError;

    fn try_from(value: SweetRecord) -> Result<Self, Self::Error> {
        Sweet::from_record(value)
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::validation("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(DomainError::validation("price cannot be negative"));
    }
    Ok(())
}

fn validate_quantity(quantity: i64) -> DomainResult<u32> {
    if quantity < 0 {
        return Err(DomainError::validation("quantity cannot be negative"));
    }
    u32::try_from(quantity)
        .map_err(|_| DomainError::validation(format!("quantity {quantity} is too large")))
}
