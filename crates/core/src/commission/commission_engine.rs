//! The commission engine.
//!
//! Pure functions mapping a (product type, sub-variant, declared value,
//! is-existing flag) tuple and the current rate configuration to the stored
//! commission basis and the final commission amount. The rate configuration
//! is always passed in explicitly; the engine holds no state of its own.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::commission_model::{CommissionBasis, CommissionError, CommissionKind, CommissionQuote};
use crate::constants::BUILDING_SAVINGS_TIER_THRESHOLD;
use crate::portfolio::{ProductSelection, ProductType, ProductVariant};
use crate::rates::RateConfiguration;

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// The default commission basis for a product selection.
///
/// This is the 17-row rule table: every recognized (type, variant) pair maps
/// to exactly one (kind, input) pair, with no fallback. Building savings
/// yields a fixed zero placeholder and retention the full retention
/// commission; both are refined by [`adjusted_basis`] once a declared value
/// is known.
pub fn default_basis(
    selection: &ProductSelection,
    rates: &RateConfiguration,
) -> Result<CommissionBasis, CommissionError> {
    use ProductType::*;
    use ProductVariant::*;

    let basis = match (selection.product_type, selection.variant) {
        (Mortgage, None) => CommissionBasis::percentage(rates.mortgage_rate),
        (Investment, None) => CommissionBasis::percentage(rates.investment_rate),
        (LifeInsurance, None) => CommissionBasis::percentage(rates.life_insurance_rate),
        (PropertyInsurance, None) => CommissionBasis::percentage(rates.property_insurance_rate),
        (AutoInsurance, None) => CommissionBasis::percentage(rates.auto_insurance_rate),

        (PensionSavings, None) => CommissionBasis::fixed(rates.pension_fixed),
        (SavingsAccount, None) => CommissionBasis::fixed(rates.savings_account_fixed),

        // Tier selection needs the declared value; see adjusted_basis.
        (BuildingSavings, Some(ContractFirst | ContractSubsequent)) => {
            CommissionBasis::fixed(Decimal::ZERO)
        }

        (BonusDeposit, Some(DepositOneYear)) => CommissionBasis::fixed(rates.deposit_1_year_fixed),
        (BonusDeposit, Some(DepositTwentyFiveMonths)) => {
            CommissionBasis::percentage(rates.deposit_25_month_rate)
        }

        (BuildingSavingsLoan, Some(LoanUnsecured)) => {
            CommissionBasis::percentage(rates.bu_unsecured_loan_rate)
        }
        (BuildingSavingsLoan, Some(LoanSecured)) => {
            CommissionBasis::percentage(rates.bu_secured_loan_rate)
        }
        (BuildingSavingsLoan, Some(LoanRegular)) => {
            CommissionBasis::percentage(rates.bu_regular_loan_rate)
        }

        (CheckingAccount, Some(BundleIdentityOnly)) => {
            CommissionBasis::fixed(rates.identity_commission)
        }
        (CheckingAccount, Some(BundleAccountOnly)) => {
            CommissionBasis::fixed(rates.account_commission)
        }
        (CheckingAccount, Some(BundleFull)) => {
            CommissionBasis::fixed(rates.identity_commission + rates.account_commission)
        }
        (CheckingAccount, Some(BundleActivity)) => CommissionBasis::fixed(rates.activity_bonus),

        (Retention, None) => CommissionBasis::fixed(rates.retention_commission),

        (
            product_type @ (BuildingSavings | BonusDeposit | BuildingSavingsLoan | CheckingAccount),
            None,
        ) => return Err(CommissionError::MissingVariant(product_type)),

        (product_type, Some(variant)) => {
            return Err(CommissionError::InvalidVariant {
                product_type,
                variant,
            })
        }
    };

    Ok(basis)
}

/// The commission basis after value-dependent recomputation.
///
/// Applied whenever the declared value or sub-variant changes, before final
/// submission:
/// - building savings selects the over/under tier by `value > 500 000`
///   (strict) and the first/subsequent tier by the contract variant;
/// - retention pays the full commission iff `value >= retention_threshold`
///   (inclusive), otherwise zero;
/// - an existing/external product forces a fixed zero basis for every type.
pub fn adjusted_basis(
    selection: &ProductSelection,
    value: Decimal,
    is_existing: bool,
    rates: &RateConfiguration,
) -> Result<CommissionBasis, CommissionError> {
    if is_existing {
        // Validate the selection anyway so a bad combination still fails loudly.
        default_basis(selection, rates)?;
        return Ok(CommissionBasis::fixed(Decimal::ZERO));
    }

    match (selection.product_type, selection.variant) {
        (ProductType::BuildingSavings, Some(variant)) => {
            let over_tier = value > Decimal::from(BUILDING_SAVINGS_TIER_THRESHOLD);
            let amount = match (variant, over_tier) {
                (ProductVariant::ContractFirst, true) => rates.ss_first_over_500,
                (ProductVariant::ContractFirst, false) => rates.ss_first_under_500,
                (ProductVariant::ContractSubsequent, true) => rates.ss_next_over_500,
                (ProductVariant::ContractSubsequent, false) => rates.ss_next_under_500,
                (variant, _) => {
                    return Err(CommissionError::InvalidVariant {
                        product_type: ProductType::BuildingSavings,
                        variant,
                    })
                }
            };
            Ok(CommissionBasis::fixed(amount))
        }
        (ProductType::Retention, None) => {
            let amount = if value >= rates.retention_threshold {
                rates.retention_commission
            } else {
                Decimal::ZERO
            };
            Ok(CommissionBasis::fixed(amount))
        }
        _ => default_basis(selection, rates),
    }
}

/// The final commission amount for a priced product entry.
///
/// The ordering of the branches matters: life insurance is nominally a
/// percentage commission but annualizes the monthly premium first, so it has
/// to be checked before the generic percentage branch. The declared value is
/// taken by absolute value throughout; its sign is a portfolio-composition
/// convention, never a commission sign.
pub fn final_commission(
    product_type: ProductType,
    basis: CommissionBasis,
    value: Decimal,
    is_existing: bool,
) -> Decimal {
    if is_existing {
        return Decimal::ZERO;
    }

    // Pre-computed fixed totals are stored in the input as-is.
    if product_type.has_precomputed_commission() {
        return basis.input;
    }

    let value = value.abs();

    match product_type {
        ProductType::LifeInsurance => {
            let annual_premium = value * MONTHS_PER_YEAR;
            annual_premium * basis.input / PERCENT
        }
        ProductType::PropertyInsurance | ProductType::AutoInsurance => {
            // Value is already the annual premium.
            value * basis.input / PERCENT
        }
        _ => match basis.kind {
            CommissionKind::Percentage => value * basis.input / PERCENT,
            CommissionKind::Fixed => basis.input,
        },
    }
}

/// Prices a pending product entry against the given rate configuration.
///
/// The resulting quote is what gets frozen onto the portfolio item at
/// creation time.
pub fn price(
    selection: &ProductSelection,
    value: Decimal,
    is_existing: bool,
    rates: &RateConfiguration,
) -> Result<CommissionQuote, CommissionError> {
    let basis = adjusted_basis(selection, value, is_existing, rates)?;
    let final_amount = final_commission(selection.product_type, basis, value, is_existing);
    Ok(CommissionQuote {
        kind: basis.kind,
        input: basis.input,
        final_amount,
    })
}
