//! Risk scoring
//!
//! A pure, deterministic scorer over a claim's attributes at submission
//! time. The scorer is a list of weighted rules so that additional signals
//! (claim frequency, location mismatch, amount-to-history ratio) can be
//! added without changing the signature. Today the set holds a single
//! rule: a high claimed amount relative to the policy's coverage.

use rust_decimal_macros::dec;
use serde::Serialize;

use core_kernel::Money;

use crate::claim::RiskLevel;

/// The claim attributes the scorer looks at
#[derive(Debug, Clone, Copy)]
pub struct RiskInput {
    /// The claimed amount
    pub claimed_amount: Money,
    /// The policy's coverage amount
    pub coverage_amount: Money,
}

/// Result of scoring a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
}

/// A single weighted scoring rule
struct RiskRule {
    name: &'static str,
    weight: u32,
    applies: fn(&RiskInput) -> bool,
}

/// Deterministic risk scorer
///
/// No side effects, no I/O: the same input always produces the same
/// assessment.
pub struct RiskScorer {
    rules: Vec<RiskRule>,
}

impl RiskScorer {
    /// The standard rule set
    pub fn standard() -> Self {
        Self {
            rules: vec![RiskRule {
                name: "high_claim_ratio",
                weight: 30,
                // Strictly greater than half the coverage; a claim at
                // exactly the threshold does not trigger the rule.
                applies: |input| {
                    input.claimed_amount > input.coverage_amount.multiply(dec!(0.5))
                },
            }],
        }
    }

    /// Scores a claim
    pub fn score(&self, input: &RiskInput) -> RiskAssessment {
        let score = self
            .rules
            .iter()
            .filter(|rule| (rule.applies)(input))
            .map(|rule| {
                tracing::debug!(rule = rule.name, weight = rule.weight, "risk rule triggered");
                rule.weight
            })
            .sum();

        RiskAssessment {
            score,
            level: level_for(score),
        }
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Maps a score to its level by fixed thresholds
pub fn level_for(score: u32) -> RiskLevel {
    if score >= 70 {
        RiskLevel::Critical
    } else if score >= 50 {
        RiskLevel::High
    } else if score >= 30 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
