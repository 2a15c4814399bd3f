//! Integration tests for notation parsing and Black-Scholes pricing.
//!
//! Literal contracts plus property checks over the pricing surface.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use options_desk::config::PricingConfig;
use options_desk::domain::notation::{NotationError, parse_notation, parse_notation_list};
use options_desk::pricing::{BlackScholes, PricingInputs, price};
use options_desk::{OptionRight, QuoteOptionUseCase, Ticker};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn call(spot: f64, strike: f64, t: f64, vol: f64, rate: f64) -> f64 {
    value(OptionRight::Call, spot, strike, t, vol, rate)
}

fn put(spot: f64, strike: f64, t: f64, vol: f64, rate: f64) -> f64 {
    value(OptionRight::Put, spot, strike, t, vol, rate)
}

fn value(right: OptionRight, spot: f64, strike: f64, t: f64, vol: f64, rate: f64) -> f64 {
    BlackScholes
        .theoretical_value(&PricingInputs {
            spot,
            strike,
            time_to_expiry_years: t,
            volatility: vol,
            risk_free_rate: rate,
            right,
        })
        .unwrap()
}

// ============================================================================
// Literal scenarios
// ============================================================================

#[test]
fn test_parse_call_with_day_suffix() {
    let option = parse_notation("NVDA 150c 30d").unwrap();
    assert_eq!(option.ticker(), &Ticker::new("NVDA"));
    assert_eq!(option.strike(), dec!(150.0));
    assert_eq!(option.right(), OptionRight::Call);
    assert_eq!(option.days_to_expiration(), 30);
}

#[test]
fn test_parse_put_without_day_suffix() {
    let option = parse_notation("AAPL 200p 45").unwrap();
    assert_eq!(option.ticker(), &Ticker::new("AAPL"));
    assert_eq!(option.strike(), dec!(200.0));
    assert_eq!(option.right(), OptionRight::Put);
    assert_eq!(option.days_to_expiration(), 45);
}

#[test]
fn test_parse_errors_are_typed() {
    assert!(matches!(
        parse_notation("NVDA 150c"),
        Err(NotationError::MalformedNotation { tokens: 2, .. })
    ));
    assert!(matches!(
        parse_notation("NVDA abc 30d"),
        Err(NotationError::NumericFormat { .. })
    ));
}

#[test]
fn test_parse_list_skips_blank_segments() {
    let options = parse_notation_list("NVDA 150c 30d; AAPL 200p 45,\n").unwrap();
    assert_eq!(options.len(), 2);
    assert_eq!(options[1].right(), OptionRight::Put);
}

#[test]
fn test_atm_call_is_positive_and_bounded() {
    let p = price(100.0, 100.0, 30.0 / 365.0, 0.20, 0.05, "call").unwrap();
    assert!(p.is_positive());
    assert!(p.amount() < dec!(20));
}

#[test]
fn test_deep_itm_call_converges_to_intrinsic() {
    let p = price(150.0, 100.0, 30.0 / 365.0, 0.20, 0.05, "call").unwrap();
    assert!(p.amount() >= dec!(47.50));
}

#[test]
fn test_unknown_contract_type_is_rejected() {
    assert!(price(100.0, 100.0, 0.1, 0.2, 0.05, "straddle").is_err());
}

#[test]
fn test_quote_uses_configured_defaults() {
    let quotes = QuoteOptionUseCase::new(PricingConfig::default())
        .quote_list("SPY 450c 30d, SPY 450p 30d", dec!(450), None)
        .unwrap();

    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].volatility, 0.20);
    assert_eq!(quotes[0].risk_free_rate, 0.05);
    // Positive rate: ATM call is worth more than the ATM put
    assert!(quotes[0].price > quotes[1].price);
}

#[test]
fn test_quote_zero_days_is_invalid_input() {
    let err = QuoteOptionUseCase::new(PricingConfig::default())
        .quote("SPY 450c 0d", dec!(450), None)
        .unwrap_err();
    assert_eq!(err.code().exit_code(), 2);
}

// ============================================================================
// Properties
// ============================================================================

fn notation_parts() -> impl Strategy<Value = (String, u32, &'static str, u16, bool)> {
    (
        "[A-Z]{1,5}",
        1u32..10_000,
        prop::sample::select(vec!["c", "C", "p", "P", ""]),
        1u16..1_000,
        any::<bool>(),
    )
}

proptest! {
    #[test]
    fn parse_is_total_and_deterministic(
        (ticker, strike, suffix, days, day_suffix) in notation_parts()
    ) {
        let text = format!(
            "{ticker} {strike}{suffix} {days}{}",
            if day_suffix { "d" } else { "" }
        );

        let first = parse_notation(&text).unwrap();
        let second = parse_notation(&text).unwrap();
        prop_assert_eq!(&first, &second);

        prop_assert_eq!(first.ticker().as_str(), ticker.as_str());
        prop_assert_eq!(first.strike(), Decimal::from(strike));
        prop_assert_eq!(first.days_to_expiration(), i32::from(days));
        let expected = if suffix.eq_ignore_ascii_case("p") {
            OptionRight::Put
        } else {
            OptionRight::Call
        };
        prop_assert_eq!(first.right(), expected);
    }

    #[test]
    fn put_call_parity_holds(
        spot in 50.0f64..200.0,
        strike in 50.0f64..200.0,
        t in 0.05f64..2.0,
        vol in 0.10f64..0.80,
        rate in 0.0f64..0.10,
    ) {
        let lhs = call(spot, strike, t, vol, rate) - put(spot, strike, t, vol, rate);
        let rhs = spot - strike * (-rate * t).exp();
        prop_assert!((lhs - rhs).abs() < 0.05, "lhs={lhs} rhs={rhs}");
    }

    #[test]
    fn call_increases_with_volatility(
        spot in 80.0f64..120.0,
        moneyness in 0.90f64..1.10,
        t in 0.10f64..2.0,
        vol in 0.15f64..0.60,
        bump in 0.05f64..0.30,
    ) {
        let strike = spot * moneyness;
        prop_assert!(call(spot, strike, t, vol + bump, 0.05) > call(spot, strike, t, vol, 0.05));
    }

    #[test]
    fn call_increases_with_time(
        spot in 80.0f64..120.0,
        moneyness in 0.90f64..1.10,
        t in 0.10f64..2.0,
        bump in 0.05f64..1.0,
        vol in 0.15f64..0.60,
        rate in 0.01f64..0.10,
    ) {
        let strike = spot * moneyness;
        prop_assert!(call(spot, strike, t + bump, vol, rate) > call(spot, strike, t, vol, rate));
    }
}
