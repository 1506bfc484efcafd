//! Portfolio domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::commission::CommissionKind;

/// Product categories sold or serviced by the advisor.
///
/// The enumeration is closed: the commission engine maps every category to
/// exactly one rate source and treats anything else as a configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Mortgage,
    LifeInsurance,
    PropertyInsurance,
    AutoInsurance,
    Investment,
    PensionSavings,
    BuildingSavings,
    BonusDeposit,
    BuildingSavingsLoan,
    CheckingAccount,
    SavingsAccount,
    Retention,
}

impl ProductType {
    /// Czech display label, used as the default product name and in AI digests.
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Mortgage => "Hypotéka",
            ProductType::LifeInsurance => "Pojištění",
            ProductType::PropertyInsurance => "Pojištění nemovitosti",
            ProductType::AutoInsurance => "Autopojištění",
            ProductType::Investment => "Investice",
            ProductType::PensionSavings => "Penzijní spoření",
            ProductType::BuildingSavings => "Stavební spoření",
            ProductType::BonusDeposit => "Bonusový vklad",
            ProductType::BuildingSavingsLoan => "Úvěr ze SS",
            ProductType::CheckingAccount => "Běžný účet",
            ProductType::SavingsAccount => "Spořící účet",
            ProductType::Retention => "Retence",
        }
    }

    /// Insurance premiums are flows, not managed assets, and are excluded
    /// from the gross managed volume.
    pub fn is_insurance(&self) -> bool {
        matches!(
            self,
            ProductType::LifeInsurance | ProductType::PropertyInsurance | ProductType::AutoInsurance
        )
    }

    /// Types whose commission is a pre-computed fixed total rather than a
    /// formula over the declared value.
    pub fn has_precomputed_commission(&self) -> bool {
        matches!(
            self,
            ProductType::BuildingSavings
                | ProductType::Retention
                | ProductType::PensionSavings
                | ProductType::SavingsAccount
        )
    }
}

/// Product-type-specific secondary selector that alters which rate applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductVariant {
    /// Building savings: first contract for this client.
    ContractFirst,
    /// Building savings: any subsequent contract.
    ContractSubsequent,
    /// Bonus deposit with a 1-year term.
    DepositOneYear,
    /// Bonus deposit with a 25-month term.
    DepositTwentyFiveMonths,
    /// Building-savings loan: unsecured bridging loan.
    LoanUnsecured,
    /// Building-savings loan: secured loan.
    LoanSecured,
    /// Building-savings loan: regular loan.
    LoanRegular,
    /// Checking account: identity product only.
    BundleIdentityOnly,
    /// Checking account: account only.
    BundleAccountOnly,
    /// Checking account: account plus identity.
    BundleFull,
    /// Checking account: activity bonus.
    BundleActivity,
}

impl ProductVariant {
    /// Czech display label, stamped into the product detail line.
    pub fn label(&self) -> &'static str {
        match self {
            ProductVariant::ContractFirst => "Prvotní smlouva",
            ProductVariant::ContractSubsequent => "Následná smlouva",
            ProductVariant::DepositOneYear => "1 rok",
            ProductVariant::DepositTwentyFiveMonths => "25 měsíců",
            ProductVariant::LoanUnsecured => "Nezajištěný meziúvěr",
            ProductVariant::LoanSecured => "Zajištěný úvěr",
            ProductVariant::LoanRegular => "Řádný úvěr",
            ProductVariant::BundleIdentityOnly => "Pouze Identita",
            ProductVariant::BundleAccountOnly => "Pouze Účet",
            ProductVariant::BundleFull => "Účet + Identita",
            ProductVariant::BundleActivity => "Bonus za aktivitu",
        }
    }
}

/// The (type, sub-variant) pair the commission engine dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSelection {
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ProductVariant>,
}

impl ProductSelection {
    pub fn new(product_type: ProductType) -> Self {
        Self {
            product_type,
            variant: None,
        }
    }

    pub fn with_variant(product_type: ProductType, variant: ProductVariant) -> Self {
        Self {
            product_type,
            variant: Some(variant),
        }
    }
}

/// Domain model representing one financial product held by a client.
///
/// Commission fields are frozen at creation time: later changes to the rate
/// configuration never recompute `commission_final` on stored items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ProductVariant>,
    pub name: String,
    /// Value in CZK. Loans and mortgages carry the owed volume as a negative
    /// number; life insurance carries the monthly premium, property and auto
    /// insurance the annual premium.
    pub value: Decimal,
    /// Set once at creation; drives all monthly aggregation.
    pub created_date: NaiveDateTime,
    /// Informational only.
    pub expiry_date: Option<NaiveDate>,
    pub details: String,
    /// True when the product was arranged elsewhere or previously. Such
    /// items never generate a commission.
    pub is_existing: bool,
    pub commission_kind: CommissionKind,
    pub commission_input: Decimal,
    pub commission_final: Decimal,
}

/// Input model for adding a product to a client's portfolio.
///
/// The commission fields are not part of the input: the service prices the
/// draft against the current rate configuration at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    pub product_type: ProductType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ProductVariant>,
    /// Optional display name; falls back to the product-type label.
    #[serde(default)]
    pub name: String,
    pub value: Decimal,
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub is_existing: bool,
}

impl NewPortfolioItem {
    /// The (type, variant) pair used for commission dispatch.
    pub fn selection(&self) -> ProductSelection {
        ProductSelection {
            product_type: self.product_type,
            variant: self.variant,
        }
    }

    /// Display name, defaulting to the product-type label when blank.
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            self.product_type.label().to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Detail line with the variant stamped in front, matching how products
    /// are described to the advisor.
    pub fn stamped_details(&self) -> String {
        if self.is_existing {
            return format!("(Externí) {}", self.details).trim_end().to_string();
        }
        match self.variant {
            Some(variant) => format!("Typ: {}. {}", variant.label(), self.details)
                .trim_end()
                .to_string(),
            None => self.details.clone(),
        }
    }
}
