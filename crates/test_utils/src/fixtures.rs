//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the claims
//! back office. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::Money;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard coverage amount (50,000.00)
    pub fn coverage() -> Money {
        Money::new(dec!(50000.00))
    }

    /// Standard deductible (500.00)
    pub fn deductible() -> Money {
        Money::new(dec!(500.00))
    }

    /// Standard annual premium (1,200.00)
    pub fn premium() -> Money {
        Money::new(dec!(1200.00))
    }

    /// A claim exactly at half of the standard coverage (25,000.00)
    ///
    /// Sits on the high-claim-ratio boundary: the rule fires only for
    /// amounts strictly above this.
    pub fn half_coverage_claim() -> Money {
        Money::new(dec!(25000.00))
    }

    /// A claim comfortably above the high-claim-ratio threshold
    pub fn large_claim() -> Money {
        Money::new(dec!(30000.00))
    }

    /// A routine small claim
    pub fn small_claim() -> Money {
        Money::new(dec!(1000.00))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Standard policy end date (Jan 1, 2025)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Mid-term incident date (Jun 1, 2024)
    pub fn incident() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }
}

/// Fixture for free-text fields
pub struct StringFixtures;

impl StringFixtures {
    /// A description that clears the 10-character minimum
    pub fn description() -> String {
        "Rear-end collision at Main St and 5th Ave".to_string()
    }

    /// A description below the 10-character minimum
    pub fn short_description() -> String {
        "dented".to_string()
    }
}
