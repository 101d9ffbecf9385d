//! # Promo Module
//!
//! Promo code rule table and application state machine.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Promo State Machine                                │
//! │                                                                         │
//! │                    ┌──────────────┐                                     │
//! │          ┌────────►│  Unapplied   │◄──────── reset() (after order)      │
//! │          │         └──────┬───────┘                                     │
//! │          │                │ apply(code, subtotal)                       │
//! │          │                ▼                                             │
//! │          │       ┌────────────────┐                                     │
//! │          │       │  code known?   │                                     │
//! │          │       └───┬────────┬───┘                                     │
//! │          │      yes  │        │  no                                     │
//! │          │           ▼        ▼                                         │
//! │          │   ┌───────────┐  ┌───────────┐                               │
//! │          └───┤  Applied  │  │ Rejected  │  (discount forced to zero)    │
//! │              │ {discount}│  │  {code}   │                               │
//! │              └───────────┘  └───────────┘                               │
//! │                                                                         │
//! │  Any apply() REPLACES the previous state entirely: a rejected code      │
//! │  wipes an earlier applied discount. Last attempt wins.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! - Codes are matched case-insensitively and whitespace-trimmed
//! - The discount is computed against the subtotal at application time and
//!   is NOT recomputed when the cart changes afterwards
//! - An unknown code is an *outcome*, not an error: the caller shows the
//!   rejection message and carries on

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Discount Rules
// =============================================================================

/// How a promo code computes its discount.
///
/// Currently one rule kind; the enum leaves room for flat-amount or
/// free-delivery rules without touching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountRule {
    /// Discount is a percentage of the subtotal at application time.
    PercentOfSubtotal(Decimal),
}

impl DiscountRule {
    /// Computes the discount this rule grants for the given subtotal.
    pub fn discount_for(&self, subtotal: Money) -> Money {
        match self {
            DiscountRule::PercentOfSubtotal(pct) => subtotal.percentage(*pct),
        }
    }
}

/// A promo code paired with its discount rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoRule {
    /// Canonical (uppercase) form of the code.
    pub code: String,

    /// Rule applied when the code matches.
    pub rule: DiscountRule,
}

impl PromoRule {
    /// Creates a rule, normalizing the code to its canonical uppercase form.
    pub fn new(code: &str, rule: DiscountRule) -> Self {
        PromoRule {
            code: code.trim().to_uppercase(),
            rule,
        }
    }
}

// =============================================================================
// Promo State
// =============================================================================

/// The promo slot on the current cart session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PromoState {
    /// No code has been attempted since the last reset.
    Unapplied,

    /// A known code was applied; `discount` was fixed at application time.
    Applied { code: String, discount: Money },

    /// The last attempted code was unknown. Discount is zero.
    Rejected { code: String },
}

impl PromoState {
    /// The discount this state contributes to the quote.
    pub fn discount(&self) -> Money {
        match self {
            PromoState::Applied { discount, .. } => *discount,
            PromoState::Unapplied | PromoState::Rejected { .. } => Money::zero(),
        }
    }
}

impl Default for PromoState {
    fn default() -> Self {
        PromoState::Unapplied
    }
}

// =============================================================================
// Promo Outcome
// =============================================================================

/// The result of a single `apply` attempt, with the user-facing message the
/// checkout screen shows in its alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PromoOutcome {
    /// The code matched a rule; `discount` is now active on the session.
    Applied { discount: Money, message: String },

    /// The code matched no rule; any previous discount has been cleared.
    Rejected { message: String },
}

// =============================================================================
// Promo Engine
// =============================================================================

/// The promo engine: a rule table plus the session's current promo state.
#[derive(Debug, Clone)]
pub struct PromoEngine {
    rules: Vec<PromoRule>,
    state: PromoState,
}

impl PromoEngine {
    /// Creates an engine with a custom rule table.
    pub fn with_rules(rules: Vec<PromoRule>) -> Self {
        PromoEngine {
            rules,
            state: PromoState::Unapplied,
        }
    }

    /// Attempts to apply a promo code against the current subtotal.
    ///
    /// The code is trimmed and matched case-insensitively. Whatever the
    /// outcome, the previous state is replaced.
    pub fn apply(&mut self, code: &str, subtotal: Money) -> PromoOutcome {
        let canonical = code.trim().to_uppercase();

        match self.rules.iter().find(|r| r.code == canonical) {
            Some(rule) => {
                let discount = rule.rule.discount_for(subtotal);
                self.state = PromoState::Applied {
                    code: canonical,
                    discount,
                };
                let message = match rule.rule {
                    DiscountRule::PercentOfSubtotal(pct) => {
                        format!("You received a {pct}% discount!")
                    }
                };
                PromoOutcome::Applied { discount, message }
            }
            None => {
                self.state = PromoState::Rejected { code: canonical };
                PromoOutcome::Rejected {
                    message: "Sorry, this promo code is not valid.".to_string(),
                }
            }
        }
    }

    /// The discount currently active on the session.
    pub fn discount(&self) -> Money {
        self.state.discount()
    }

    /// The current promo state.
    pub fn state(&self) -> &PromoState {
        &self.state
    }

    /// Clears the promo state back to `Unapplied`. Called after an order
    /// is submitted so the discount never leaks into the next cart.
    pub fn reset(&mut self) {
        self.state = PromoState::Unapplied;
    }
}

impl Default for PromoEngine {
    /// The stock rule table: `VIJAY` grants 25% off the subtotal.
    fn default() -> Self {
        PromoEngine::with_rules(vec![PromoRule::new(
            "VIJAY",
            DiscountRule::PercentOfSubtotal(Decimal::from(25)),
        )])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn subtotal_2598() -> Money {
        Money::from_major_minor(25, 98)
    }

    #[test]
    fn test_apply_known_code() {
        let mut engine = PromoEngine::default();

        let outcome = engine.apply("VIJAY", subtotal_2598());

        let expected = Money::new(Decimal::new(6495, 3)); // 6.495
        assert_eq!(
            outcome,
            PromoOutcome::Applied {
                discount: expected,
                message: "You received a 25% discount!".to_string(),
            }
        );
        assert_eq!(engine.discount(), expected);
    }

    #[test]
    fn test_code_match_is_case_insensitive_and_trimmed() {
        for input in ["vijay", "Vijay", "VIJAY", "  vijay  "] {
            let mut engine = PromoEngine::default();
            let outcome = engine.apply(input, subtotal_2598());
            assert!(
                matches!(outcome, PromoOutcome::Applied { .. }),
                "input {input:?} should apply"
            );
        }
    }

    #[test]
    fn test_unknown_code_rejected_with_message() {
        let mut engine = PromoEngine::default();

        let outcome = engine.apply("SAVE10", subtotal_2598());

        assert_eq!(
            outcome,
            PromoOutcome::Rejected {
                message: "Sorry, this promo code is not valid.".to_string(),
            }
        );
        assert_eq!(engine.discount(), Money::zero());
    }

    /// A rejected attempt wipes a previously applied discount.
    #[test]
    fn test_rejection_clears_earlier_discount() {
        let mut engine = PromoEngine::default();

        engine.apply("VIJAY", subtotal_2598());
        assert!(engine.discount().is_positive());

        engine.apply("BOGUS", subtotal_2598());
        assert_eq!(engine.discount(), Money::zero());
        assert!(matches!(engine.state(), PromoState::Rejected { .. }));
    }

    /// Re-applying recomputes against the subtotal passed in, so a changed
    /// cart yields a different discount.
    #[test]
    fn test_reapply_uses_current_subtotal() {
        let mut engine = PromoEngine::default();

        engine.apply("VIJAY", Money::from_major_minor(10, 0));
        assert_eq!(engine.discount(), Money::from_major_minor(2, 50));

        engine.apply("VIJAY", Money::from_major_minor(40, 0));
        assert_eq!(engine.discount(), Money::from_major_minor(10, 0));
    }

    /// The discount is frozen at application time, not tracked live.
    #[test]
    fn test_discount_is_frozen_until_reapplied() {
        let mut engine = PromoEngine::default();
        engine.apply("VIJAY", Money::from_major_minor(10, 0));

        // Cart changes afterwards; the engine holds the old figure until
        // the caller re-applies.
        assert_eq!(engine.discount(), Money::from_major_minor(2, 50));
    }

    #[test]
    fn test_reset_returns_to_unapplied() {
        let mut engine = PromoEngine::default();
        engine.apply("VIJAY", subtotal_2598());

        engine.reset();

        assert_eq!(engine.state(), &PromoState::Unapplied);
        assert_eq!(engine.discount(), Money::zero());
    }

    #[test]
    fn test_custom_rule_table() {
        let mut engine = PromoEngine::with_rules(vec![
            PromoRule::new("half", DiscountRule::PercentOfSubtotal(Decimal::from(50))),
            PromoRule::new("VIJAY", DiscountRule::PercentOfSubtotal(Decimal::from(25))),
        ]);

        let outcome = engine.apply("HALF", Money::from_major_minor(20, 0));
        assert!(matches!(
            outcome,
            PromoOutcome::Applied { discount, .. } if discount == Money::from_major_minor(10, 0)
        ));
    }

    #[test]
    fn test_applied_discount_on_zero_subtotal_is_zero() {
        let mut engine = PromoEngine::default();
        let outcome = engine.apply("VIJAY", Money::zero());
        assert!(matches!(
            outcome,
            PromoOutcome::Applied { discount, .. } if discount.is_zero()
        ));
    }
}
