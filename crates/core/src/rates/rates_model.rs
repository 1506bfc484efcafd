//! Rate configuration domain model.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// The editable table of commission rates and thresholds.
///
/// Percentage fields are plain numbers meaning "out of 100" (2.3 = 2.3 %),
/// fixed fields are amounts in CZK. The record is replaced as a whole; there
/// is no partial in-place mutation visible to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateConfiguration {
    // General loans & investments
    pub mortgage_rate: Decimal,
    pub investment_rate: Decimal,

    // Insurance (percentage of the annual premium)
    pub life_insurance_rate: Decimal,
    pub property_insurance_rate: Decimal,
    pub auto_insurance_rate: Decimal,

    // Savings & pension (fixed)
    pub pension_fixed: Decimal,
    pub savings_account_fixed: Decimal,

    // Building savings tiers, split by the 500 000 CZK threshold
    pub ss_first_over_500: Decimal,
    pub ss_first_under_500: Decimal,
    pub ss_next_over_500: Decimal,
    pub ss_next_under_500: Decimal,

    // Bonus deposits
    pub deposit_1_year_fixed: Decimal,
    pub deposit_25_month_rate: Decimal,

    // Building-savings loans
    pub bu_unsecured_loan_rate: Decimal,
    pub bu_secured_loan_rate: Decimal,
    pub bu_regular_loan_rate: Decimal,

    // Checking accounts & identity
    pub identity_commission: Decimal,
    pub account_commission: Decimal,
    pub activity_bonus: Decimal,

    // Retention
    pub retention_commission: Decimal,
    pub retention_threshold: Decimal,
}

impl Default for RateConfiguration {
    fn default() -> Self {
        Self {
            mortgage_rate: dec!(2.3),
            investment_rate: dec!(0.68),

            life_insurance_rate: dec!(105.0),
            property_insurance_rate: dec!(36.0),
            auto_insurance_rate: dec!(12.5),

            pension_fixed: dec!(2210),
            savings_account_fixed: dec!(338),

            ss_first_over_500: dec!(1852),
            ss_first_under_500: dec!(1553),
            ss_next_over_500: dec!(1235),
            ss_next_under_500: dec!(1035),

            deposit_1_year_fixed: dec!(450),
            deposit_25_month_rate: dec!(0.5),

            bu_unsecured_loan_rate: dec!(2.9),
            bu_secured_loan_rate: dec!(1.4),
            bu_regular_loan_rate: dec!(1.9),

            identity_commission: dec!(450),
            account_commission: dec!(497),
            activity_bonus: dec!(685),

            retention_commission: dec!(900),
            retention_threshold: dec!(100000),
        }
    }
}

impl RateConfiguration {
    /// Validates that every rate and threshold is non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields: [(&str, Decimal); 21] = [
            ("mortgageRate", self.mortgage_rate),
            ("investmentRate", self.investment_rate),
            ("lifeInsuranceRate", self.life_insurance_rate),
            ("propertyInsuranceRate", self.property_insurance_rate),
            ("autoInsuranceRate", self.auto_insurance_rate),
            ("pensionFixed", self.pension_fixed),
            ("savingsAccountFixed", self.savings_account_fixed),
            ("ssFirstOver500", self.ss_first_over_500),
            ("ssFirstUnder500", self.ss_first_under_500),
            ("ssNextOver500", self.ss_next_over_500),
            ("ssNextUnder500", self.ss_next_under_500),
            ("deposit1YearFixed", self.deposit_1_year_fixed),
            ("deposit25MonthRate", self.deposit_25_month_rate),
            ("buUnsecuredLoanRate", self.bu_unsecured_loan_rate),
            ("buSecuredLoanRate", self.bu_secured_loan_rate),
            ("buRegularLoanRate", self.bu_regular_loan_rate),
            ("identityCommission", self.identity_commission),
            ("accountCommission", self.account_commission),
            ("activityBonus", self.activity_bonus),
            ("retentionCommission", self.retention_commission),
            ("retentionThreshold", self.retention_threshold),
        ];

        for (name, value) in fields {
            if value < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(format!(
                    "Rate '{}' must be non-negative, got {}",
                    name, value
                ))));
            }
        }
        Ok(())
    }
}
