//! Integration tests for strategy composition and lifecycle.
//!
//! Drives the use cases through the container over in-memory storage.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use chrono::NaiveDate;
use options_desk::config::{PricingConfig, StrategiesConfig};
use options_desk::{
    AddHoldingCommand, Container, DeskError, ErrorCode, FixedClock, InMemoryHoldingRepository,
    InMemoryStrategyRepository, LegCountPolicy, LegInput, MarketSnapshot, Money,
    OpenStrategyCommand, OptionRight, StrategyError, StrategyRepository, StrategyStatus,
    StrategyType, UserId,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use test_case::test_case;

type TestContainer = Container<InMemoryStrategyRepository, InMemoryHoldingRepository, FixedClock>;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

fn container(policy: LegCountPolicy) -> TestContainer {
    Container::new(
        Arc::new(InMemoryStrategyRepository::new()),
        Arc::new(InMemoryHoldingRepository::new()),
        Arc::new(FixedClock::new(today())),
        PricingConfig::default(),
        StrategiesConfig {
            leg_count_policy: policy,
        },
    )
}

fn leg(right: OptionRight, strike: Decimal, premium: Option<Decimal>, quantity: i32) -> LegInput {
    LegInput {
        right,
        strike,
        expiration: NaiveDate::from_ymd_opt(2026, 2, 20).unwrap(),
        premium: premium.map(Money::new),
        quantity,
    }
}

fn command(strategy_type: &str, legs: Vec<LegInput>) -> OpenStrategyCommand {
    OpenStrategyCommand {
        user_id: UserId::new("u1"),
        strategy_type: strategy_type.to_string(),
        ticker: "SPY".to_string(),
        legs,
        net_cost: Some(Money::new(dec!(2.50))),
        market: None,
    }
}

fn bull_call_spread() -> Vec<LegInput> {
    vec![
        leg(OptionRight::Call, dec!(450), Some(dec!(4.00)), 1),
        leg(OptionRight::Call, dec!(455), Some(dec!(1.50)), -1),
    ]
}

#[test_case("SPREAD", "VERTICAL" ; "spread is vertical")]
#[test_case("BUTTERFLY", "FLY" ; "butterfly is fly")]
#[test_case("IC", "IRON_CONDOR" ; "ic is iron condor")]
#[test_case("ic", "iron-condor" ; "case and dash insensitive")]
fn test_aliases_resolve_to_same_type(alias: &str, canonical: &str) {
    assert_eq!(
        StrategyType::resolve(alias).unwrap(),
        StrategyType::resolve(canonical).unwrap()
    );
}

#[test]
fn test_resolve_ic_is_iron_condor() {
    assert_eq!(StrategyType::resolve("ic").unwrap(), StrategyType::IronCondor);
}

#[tokio::test]
async fn test_open_spread_links_every_leg() {
    let container = container(LegCountPolicy::Enforce);

    let strategy = container
        .open_strategy_use_case()
        .execute(command("SPREAD", bull_call_spread()))
        .await
        .unwrap();

    assert_eq!(strategy.strategy_type(), StrategyType::Vertical);
    assert_eq!(strategy.status(), StrategyStatus::Open);
    assert_eq!(strategy.legs().len(), 2);
    assert!(strategy.legs().iter().all(|l| l.strategy_id() == strategy.id()));

    let stored = container
        .strategy_repo()
        .find_by_id(strategy.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored, strategy);
}

#[tokio::test]
async fn test_unknown_type_is_rejected_before_storage() {
    let container = container(LegCountPolicy::Enforce);

    let err = container
        .open_strategy_use_case()
        .execute(command("CONDOR", bull_call_spread()))
        .await
        .unwrap_err();

    assert!(matches!(err, StrategyError::UnknownStrategyType { .. }));
    assert_eq!(DeskError::from(err).code(), ErrorCode::UnknownStrategyType);
    assert!(container.strategy_repo().is_empty());
}

#[tokio::test]
async fn test_empty_legs_rejected_under_any_policy() {
    for policy in [LegCountPolicy::Enforce, LegCountPolicy::Advisory] {
        let container = container(policy);
        let err = container
            .open_strategy_use_case()
            .execute(command("CUSTOM", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, StrategyError::InvalidLegs { .. }));
    }
}

#[tokio::test]
async fn test_missing_premium_is_priced_from_market() {
    let container = container(LegCountPolicy::Enforce);
    let mut cmd = command(
        "STRADDLE",
        vec![
            leg(OptionRight::Call, dec!(450), None, 1),
            leg(OptionRight::Put, dec!(450), None, 1),
        ],
    );
    cmd.market = Some(MarketSnapshot {
        spot: dec!(450),
        volatility: Some(0.18),
    });

    let strategy = container
        .open_strategy_use_case()
        .execute(cmd)
        .await
        .unwrap();

    assert!(strategy.legs().iter().all(|l| l.premium().is_positive()));
}

#[tokio::test]
async fn test_close_and_reopen_round_trip() {
    let container = container(LegCountPolicy::Enforce);
    let lifecycle = container.strategy_lifecycle_use_case();
    let strategy = container
        .open_strategy_use_case()
        .execute(command("VERTICAL", bull_call_spread()))
        .await
        .unwrap();

    let closed = lifecycle.close(strategy.id()).await.unwrap();
    assert_eq!(closed.status(), StrategyStatus::Closed);
    assert!(closed.closed_at().is_some());

    // Closing again changes nothing
    let again = lifecycle.close(strategy.id()).await.unwrap();
    assert_eq!(again, closed);

    let reopened = lifecycle.reopen(strategy.id()).await.unwrap();
    assert_eq!(reopened.status(), StrategyStatus::Open);
    assert!(reopened.closed_at().is_none());
}

#[tokio::test]
async fn test_close_unknown_strategy_is_not_found() {
    let container = container(LegCountPolicy::Enforce);
    let err = container
        .strategy_lifecycle_use_case()
        .close(&options_desk::StrategyId::new("missing"))
        .await
        .unwrap_err();

    assert_eq!(DeskError::from(err).code(), ErrorCode::StrategyNotFound);
}

#[tokio::test]
async fn test_summary_counts_book() {
    let container = container(LegCountPolicy::Enforce);
    let open = container.open_strategy_use_case();

    let first = open
        .execute(command("VERTICAL", bull_call_spread()))
        .await
        .unwrap();
    open.execute(command("VERTICAL", bull_call_spread()))
        .await
        .unwrap();
    container
        .strategy_lifecycle_use_case()
        .close(first.id())
        .await
        .unwrap();

    let holdings = container.manage_holdings_use_case();
    holdings
        .add(AddHoldingCommand {
            user_id: UserId::new("u1"),
            ticker: "nvda".to_string(),
            right: OptionRight::Call,
            strike: dec!(150),
            days_to_expiration: 30,
            buy_price: Money::new(dec!(5.00)),
        })
        .await
        .unwrap();
    holdings
        .add_from_notation(UserId::new("u1"), "AAPL 190p 14d", Money::new(dec!(2.10)))
        .await
        .unwrap();

    let summary = container
        .portfolio_query_use_case()
        .summary(&UserId::new("u1"))
        .await
        .unwrap();

    assert_eq!(summary.as_of, today());
    assert_eq!(summary.open_strategies, 1);
    assert_eq!(summary.closed_strategies, 1);
    assert_eq!(summary.open_net_cost, dec!(2.50));
    assert_eq!(summary.holdings, 2);
    assert_eq!(summary.active_holdings, 2);

    let removed = holdings.remove_by_ticker(&UserId::new("u1"), "NVDA").await.unwrap();
    assert_eq!(removed, 1);
}
