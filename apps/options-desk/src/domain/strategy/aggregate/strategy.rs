//! Strategy Aggregate Root
//!
//! A strategy owns its legs by value. Each leg carries the strategy's id as
//! a back-reference, set once when the aggregate is built.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{DomainError, Money, StrategyId, Ticker, Timestamp, UserId};
use crate::domain::strategy::errors::StrategyError;
use crate::domain::strategy::value_objects::{Leg, LegDraft, StrategyStatus, StrategyType};

/// Everything needed to open a strategy.
#[derive(Debug, Clone)]
pub struct OpenStrategyParams {
    /// Owning user.
    pub user_id: UserId,
    /// Resolved strategy type.
    pub strategy_type: StrategyType,
    /// Underlying ticker.
    pub ticker: Ticker,
    /// Legs in display order.
    pub legs: Vec<LegDraft>,
    /// Debit (positive) or credit (negative); `None` if unknown.
    pub net_cost: Option<Money>,
}

/// Strategy Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    id: StrategyId,
    user_id: UserId,
    strategy_type: StrategyType,
    ticker: Ticker,
    net_cost: Option<Money>,
    status: StrategyStatus,
    legs: Vec<Leg>,
    opened_at: Timestamp,
    closed_at: Option<Timestamp>,
}

impl Strategy {
    /// Open a new strategy with a generated id.
    ///
    /// The returned aggregate is `Open` and every leg already references it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTicker` if the ticker is malformed, or `InvalidLegs`
    /// if no legs are given or any leg draft fails validation.
    pub fn open(params: OpenStrategyParams) -> Result<Self, StrategyError> {
        Self::open_with_id(StrategyId::generate(), params)
    }

    /// Open a new strategy with a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub fn open_with_id(id: StrategyId, params: OpenStrategyParams) -> Result<Self, StrategyError> {
        params
            .ticker
            .validate()
            .map_err(|e| StrategyError::InvalidTicker {
                ticker: params.ticker.to_string(),
                message: e.to_string(),
            })?;

        if params.legs.is_empty() {
            return Err(StrategyError::invalid_legs(
                "a strategy needs at least one leg",
            ));
        }

        for (index, draft) in params.legs.iter().enumerate() {
            draft.validate().map_err(|e| match e {
                StrategyError::InvalidLegs { message } => {
                    StrategyError::invalid_legs(format!("leg {}: {message}", index + 1))
                }
                other => other,
            })?;
        }

        let legs = params
            .legs
            .into_iter()
            .map(|draft| Leg::attach(draft, id.clone()))
            .collect();

        Ok(Self {
            id,
            user_id: params.user_id,
            strategy_type: params.strategy_type,
            ticker: params.ticker,
            net_cost: params.net_cost,
            status: StrategyStatus::Open,
            legs,
            opened_at: Timestamp::now(),
            closed_at: None,
        })
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Mark the strategy closed.
    ///
    /// Returns `false` without changing anything if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.status.is_closed() {
            return false;
        }
        self.status = StrategyStatus::Closed;
        self.closed_at = Some(Timestamp::now());
        true
    }

    /// Return a closed strategy to `Open`.
    ///
    /// Returns `false` without changing anything if it was already open.
    pub fn reopen(&mut self) -> bool {
        if self.status.is_open() {
            return false;
        }
        self.status = StrategyStatus::Open;
        self.closed_at = None;
        true
    }

    /// Take `status` and `closed_at` from `source`; legs and every other
    /// field stay as they are.
    pub(crate) fn adopt_status(&mut self, source: &Self) {
        self.status = source.status;
        self.closed_at = source.closed_at;
    }

    /// Check that every leg references this strategy.
    ///
    /// Always holds for aggregates built by [`open`](Self::open); checked
    /// again for aggregates arriving from storage.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` naming the first mismatched leg.
    pub fn verify_leg_linkage(&self) -> Result<(), DomainError> {
        match self
            .legs
            .iter()
            .position(|leg| leg.strategy_id() != &self.id)
        {
            None => Ok(()),
            Some(index) => Err(DomainError::InvariantViolation {
                aggregate: "Strategy".to_string(),
                invariant: "every leg references its owning strategy".to_string(),
                state: format!(
                    "leg {} references {} but strategy is {}",
                    index + 1,
                    self.legs[index].strategy_id(),
                    self.id
                ),
            }),
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Strategy ID.
    #[must_use]
    pub const fn id(&self) -> &StrategyId {
        &self.id
    }

    /// Owning user.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Canonical strategy type.
    #[must_use]
    pub const fn strategy_type(&self) -> StrategyType {
        self.strategy_type
    }

    /// Underlying ticker.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Net cost as supplied at open.
    #[must_use]
    pub const fn net_cost(&self) -> Option<Money> {
        self.net_cost
    }

    /// Lifecycle status.
    #[must_use]
    pub const fn status(&self) -> StrategyStatus {
        self.status
    }

    /// Legs in insertion order.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// When the strategy was opened.
    #[must_use]
    pub const fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    /// When the strategy was last closed, if it is closed.
    #[must_use]
    pub const fn closed_at(&self) -> Option<Timestamp> {
        self.closed_at
    }

    /// Sum of leg premium flows. Informational only; never replaces `net_cost`.
    #[must_use]
    pub fn implied_net_premium(&self) -> Money {
        self.legs.iter().map(Leg::premium_flow).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::OptionRight;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn draft(right: OptionRight, strike: Decimal, premium: Decimal, quantity: i32) -> LegDraft {
        LegDraft {
            right,
            strike,
            expiration: NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            premium: Money::new(premium),
            quantity,
        }
    }

    fn vertical_params() -> OpenStrategyParams {
        OpenStrategyParams {
            user_id: UserId::new("u1"),
            strategy_type: StrategyType::Vertical,
            ticker: Ticker::new("spy"),
            legs: vec![
                draft(OptionRight::Call, dec!(450), dec!(5.20), 1),
                draft(OptionRight::Call, dec!(455), dec!(2.70), -1),
            ],
            net_cost: Some(Money::new(dec!(2.50))),
        }
    }

    #[test]
    fn open_links_every_leg() {
        let strategy = Strategy::open(vertical_params()).unwrap();

        assert_eq!(strategy.status(), StrategyStatus::Open);
        assert_eq!(strategy.legs().len(), 2);
        assert!(strategy.legs().iter().all(|l| l.strategy_id() == strategy.id()));
        assert!(strategy.verify_leg_linkage().is_ok());
        assert_eq!(strategy.ticker().as_str(), "SPY");
        assert!(strategy.closed_at().is_none());
    }

    #[test]
    fn open_preserves_leg_order() {
        let strategy = Strategy::open(vertical_params()).unwrap();
        let strikes: Vec<_> = strategy.legs().iter().map(Leg::strike).collect();
        assert_eq!(strikes, vec![dec!(450), dec!(455)]);
    }

    #[test]
    fn open_rejects_empty_legs() {
        let mut params = vertical_params();
        params.legs.clear();
        assert!(matches!(
            Strategy::open(params),
            Err(StrategyError::InvalidLegs { .. })
        ));
    }

    #[test]
    fn open_names_the_bad_leg() {
        let mut params = vertical_params();
        params.legs[1].quantity = 0;
        let err = Strategy::open(params).unwrap_err();
        assert!(err.to_string().contains("leg 2"));
    }

    #[test]
    fn open_rejects_bad_ticker() {
        let mut params = vertical_params();
        params.ticker = Ticker::new("");
        assert!(matches!(
            Strategy::open(params),
            Err(StrategyError::InvalidTicker { .. })
        ));
    }

    #[test]
    fn adopt_status_copies_lifecycle_only() {
        let mut stored = Strategy::open(vertical_params()).unwrap();
        let mut closed = stored.clone();
        closed.close();

        let mut json = serde_json::to_value(&closed).unwrap();
        json["legs"][0]["strike"] = serde_json::json!("999");
        let tampered: Strategy = serde_json::from_value(json).unwrap();

        let legs_before = stored.legs().to_vec();
        stored.adopt_status(&tampered);

        assert_eq!(stored.status(), StrategyStatus::Closed);
        assert_eq!(stored.closed_at(), closed.closed_at());
        assert_eq!(stored.legs(), legs_before.as_slice());
    }

    #[test]
    fn net_cost_may_be_unknown() {
        let mut params = vertical_params();
        params.net_cost = None;
        assert_eq!(Strategy::open(params).unwrap().net_cost(), None);
    }

    #[test]
    fn close_is_idempotent() {
        let mut strategy = Strategy::open(vertical_params()).unwrap();
        assert!(strategy.close());
        let closed_at = strategy.closed_at();
        assert!(closed_at.is_some());

        assert!(!strategy.close());
        assert_eq!(strategy.status(), StrategyStatus::Closed);
        assert_eq!(strategy.closed_at(), closed_at);
    }

    #[test]
    fn reopen_round_trips() {
        let mut strategy = Strategy::open(vertical_params()).unwrap();
        assert!(!strategy.reopen());

        strategy.close();
        assert!(strategy.reopen());
        assert_eq!(strategy.status(), StrategyStatus::Open);
        assert!(strategy.closed_at().is_none());
    }

    #[test]
    fn lifecycle_leaves_legs_untouched() {
        let mut strategy = Strategy::open(vertical_params()).unwrap();
        let legs_before = strategy.legs().to_vec();
        strategy.close();
        strategy.reopen();
        assert_eq!(strategy.legs(), legs_before.as_slice());
    }

    #[test]
    fn implied_net_premium_sums_signed_flows() {
        let strategy = Strategy::open(vertical_params()).unwrap();
        assert_eq!(strategy.implied_net_premium(), Money::new(dec!(2.50)));
    }

    #[test]
    fn verify_leg_linkage_catches_foreign_legs() {
        let strategy = Strategy::open(vertical_params()).unwrap();
        let mut json = serde_json::to_value(&strategy).unwrap();
        json["legs"][1]["strategy_id"] = serde_json::Value::String("someone-else".into());
        let tampered: Strategy = serde_json::from_value(json).unwrap();

        let err = tampered.verify_leg_linkage().unwrap_err();
        assert!(err.to_string().contains("leg 2"));
    }
}
