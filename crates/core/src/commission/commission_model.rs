//! Commission domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::portfolio::{ProductType, ProductVariant};

/// Formula family used for a product's commission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionKind {
    /// Input is a rate in percentage points applied to the declared value.
    Percentage,
    /// Input is a fixed amount in CZK.
    #[default]
    Fixed,
}

/// The normalized (kind, input) pair stored on a portfolio item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionBasis {
    pub kind: CommissionKind,
    /// Rate in percentage points, or fixed amount in CZK, depending on kind.
    pub input: Decimal,
}

impl CommissionBasis {
    pub fn percentage(input: Decimal) -> Self {
        Self {
            kind: CommissionKind::Percentage,
            input,
        }
    }

    pub fn fixed(input: Decimal) -> Self {
        Self {
            kind: CommissionKind::Fixed,
            input,
        }
    }
}

/// A fully priced product entry: the stored basis plus the final amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionQuote {
    pub kind: CommissionKind,
    pub input: Decimal,
    pub final_amount: Decimal,
}

/// Errors raised by the commission engine.
///
/// An unrecognized (type, variant) combination is a configuration error and
/// is surfaced rather than silently defaulting to a zero commission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommissionError {
    #[error("Product type {0:?} requires a sub-variant, none was given")]
    MissingVariant(ProductType),

    #[error("Sub-variant {variant:?} is not valid for product type {product_type:?}")]
    InvalidVariant {
        product_type: ProductType,
        variant: ProductVariant,
    },
}
