// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::items_after_statements
    )
)]

//! Options Desk - Rust Core Library
//!
//! Notation parsing, Black-Scholes pricing, and strategy composition for
//! equity options.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects)
//!   - `notation`: Shorthand contract notation ("NVDA 150c 30d")
//!   - `strategy`: Strategy aggregate, legs, type resolution, lifecycle
//!   - `holding`: Single-contract holdings
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Clock port
//!   - `use_cases`: OpenStrategy, StrategyLifecycle, PortfolioQuery,
//!     ManageHoldings, QuoteOption
//!   - `dto`: Serializable views for the CLI boundary
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory repositories
//!   - `config`: Dependency injection container
//!
//! Alongside the layers: `pricing` (pure Black-Scholes), `config` (YAML
//! settings), `observability` (logging), and `error` (crate error codes).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Crate-level error codes.
pub mod error;

/// Logging setup.
pub mod observability;

/// Black-Scholes pricing.
pub mod pricing;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::holding::{Holding, HoldingError, HoldingRepository, NewHolding};
pub use domain::notation::{NotationError, ParsedOption, parse_notation, parse_notation_list};
pub use domain::shared::{HoldingId, Money, OptionRight, StrategyId, Ticker, Timestamp, UserId};
pub use domain::strategy::{
    Leg, LegCountPolicy, LegDraft, OpenStrategyParams, PositionSide, Strategy, StrategyError,
    StrategyRepository, StrategyStatus, StrategyType,
};

// Application re-exports
pub use application::dto::{
    HoldingDto, LegDto, PortfolioSummaryDto, QuoteDto, StrategyDto, StrategyTypeDto,
};
pub use application::ports::{ClockPort, FixedClock, SystemClock};
pub use application::use_cases::{
    AddHoldingCommand, LegInput, ManageHoldingsUseCase, MarketSnapshot, OpenStrategyCommand,
    OpenStrategyUseCase, PortfolioQueryUseCase, QuoteOptionUseCase, StrategyLifecycleUseCase,
};

// Infrastructure re-exports
pub use infrastructure::config::{Container, InMemoryContainer};
pub use infrastructure::persistence::{InMemoryHoldingRepository, InMemoryStrategyRepository};

// Cross-cutting re-exports
pub use config::{Config, ConfigError, load_config, load_config_or_default};
pub use error::{DeskError, ErrorCode, ErrorResponse};
pub use pricing::{BlackScholes, PricingError, PricingInputs};
