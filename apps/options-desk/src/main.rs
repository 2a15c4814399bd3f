//! Options Desk Binary
//!
//! One-shot command line front end over the options desk library. Each
//! command prints JSON on stdout; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! options-desk parse "NVDA 150c 30d"
//! options-desk quote "SPY 450c 30d" --spot 455 --vol 0.18
//! options-desk resolve ic
//! options-desk compose --type SPREAD \
//!     --leg "SPY 450c 45d:1:4.00" --leg "SPY 455c 45d:-1:1.50" --net-cost 2.50
//! ```
//!
//! # Exit Status
//!
//! - `0`: success
//! - `1`: internal failure
//! - `2`: invalid input
//! - `3`: not found
//!
//! # Environment Variables
//!
//! - `OPTIONS_DESK_CONFIG`: Config file path (default: options-desk.yaml)
//! - `OPTIONS_DESK_USER`: User id owning composed strategies (default: local)
//! - `RUST_LOG`: Log filter; overrides the configured level

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;

use options_desk::application::dto::{HoldingDto, QuoteDto, StrategyDto, StrategyTypeDto};
use options_desk::application::ports::ClockPort;
use options_desk::application::use_cases::{LegInput, MarketSnapshot, OpenStrategyCommand};
use options_desk::config::{Config, load_config_or_default};
use options_desk::domain::notation::{ParsedOption, parse_notation, parse_notation_list};
use options_desk::domain::shared::{Money, UserId};
use options_desk::domain::strategy::{StrategyError, StrategyType};
use options_desk::error::DeskError;
use options_desk::infrastructure::InMemoryContainer;
use options_desk::observability::init_logging;

/// Options strategy notation, pricing, and composition.
#[derive(Debug, Parser)]
#[command(name = "options-desk", version, about)]
struct Cli {
    /// Path to the YAML config file.
    #[arg(long, global = true, env = "OPTIONS_DESK_CONFIG")]
    config: Option<PathBuf>,

    /// User id owning composed strategies and holdings.
    #[arg(long, global = true, env = "OPTIONS_DESK_USER", default_value = "local")]
    user: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse contract notation ("NVDA 150c 30d"); separate several with `,` or `;`.
    Parse {
        /// Notation text.
        notation: String,
    },

    /// Price contracts with Black-Scholes.
    Quote {
        /// Notation text; separate several with `,` or `;`.
        notation: String,
        /// Underlying spot price.
        #[arg(long)]
        spot: Decimal,
        /// Annualized volatility (defaults to the configured value).
        #[arg(long)]
        vol: Option<f64>,
    },

    /// Resolve a strategy name or alias to its canonical type.
    Resolve {
        /// Name or alias ("SPREAD", "ic", "butterfly", ...).
        name: String,
    },

    /// List every strategy type with its aliases.
    Types,

    /// Compose legs into a strategy and print the opened aggregate.
    Compose {
        /// Strategy name or alias.
        #[arg(long = "type")]
        strategy_type: String,
        /// Underlying ticker (defaults to the first leg's ticker).
        #[arg(long)]
        ticker: Option<String>,
        /// Leg as `NOTATION[:QTY[:PREMIUM]]`; QTY defaults to 1, negative is short.
        #[arg(long = "leg", required = true, value_parser = parse_leg_spec)]
        legs: Vec<LegSpec>,
        /// Debit (positive) or credit (negative) for the whole strategy.
        #[arg(long, allow_hyphen_values = true)]
        net_cost: Option<Decimal>,
        /// Underlying spot, used to price legs given without a premium.
        #[arg(long)]
        spot: Option<Decimal>,
        /// Volatility for pricing legs without a premium.
        #[arg(long)]
        vol: Option<f64>,
    },

    /// Record a single-contract holding and print it.
    Hold {
        /// Notation text ("AAPL 190p 14d").
        notation: String,
        /// Price paid per contract.
        #[arg(long)]
        buy_price: Decimal,
    },
}

/// One `--leg` argument.
#[derive(Debug, Clone)]
struct LegSpec {
    notation: String,
    quantity: i32,
    premium: Option<Decimal>,
}

/// Parse `NOTATION[:QTY[:PREMIUM]]`.
fn parse_leg_spec(raw: &str) -> Result<LegSpec, String> {
    let mut parts = raw.split(':');
    let notation = parts.next().unwrap_or_default().trim().to_string();
    if notation.is_empty() {
        return Err("leg notation is empty".to_string());
    }

    let quantity = match parts.next().map(str::trim) {
        None | Some("") => 1,
        Some(q) => q
            .parse::<i32>()
            .map_err(|e| format!("invalid leg quantity \"{q}\": {e}"))?,
    };

    let premium = match parts.next().map(str::trim) {
        None | Some("") => None,
        Some(p) => Some(
            p.parse::<Decimal>()
                .map_err(|e| format!("invalid leg premium \"{p}\": {e}"))?,
        ),
    };

    if parts.next().is_some() {
        return Err(format!("expected NOTATION[:QTY[:PREMIUM]], got \"{raw}\""));
    }

    Ok(LegSpec {
        notation,
        quantity,
        premium,
    })
}

/// Command results, serialized as-is.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Parsed(Vec<ParsedOption>),
    Quotes(Vec<QuoteDto>),
    StrategyType(StrategyTypeDto),
    StrategyTypes(Vec<StrategyTypeDto>),
    Strategy(StrategyDto),
    Holding(HoldingDto),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    load_dotenv();
    let cli = Cli::parse();

    let config_path = cli.config.as_deref().map(|p| p.to_string_lossy().into_owned());
    let (config, from_file) = load_config_or_default(config_path.as_deref())
        .context("failed to load configuration")?;

    init_logging(&config.observability.logging)
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    tracing::debug!(
        from_file,
        risk_free_rate = config.pricing.risk_free_rate,
        day_count_basis = config.pricing.day_count_basis,
        leg_count_policy = %config.strategies.leg_count_policy,
        "Configuration loaded"
    );

    let user_id = UserId::new(cli.user);

    match run(cli.command, user_id, &config).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            let code = e.code();
            tracing::error!(code = ?code, error = %e, "Command failed");
            println!("{}", serde_json::to_string_pretty(&e.to_response())?);
            Ok(ExitCode::from(code.exit_code()))
        }
    }
}

/// Load .env file from the current directory, if any.
fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("warning: ignoring unreadable .env file: {e}");
    }
}

async fn run(command: Command, user_id: UserId, config: &Config) -> Result<Output, DeskError> {
    let container = InMemoryContainer::in_memory(config.pricing, config.strategies);

    match command {
        Command::Parse { notation } => Ok(Output::Parsed(parse_notation_list(&notation)?)),

        Command::Quote {
            notation,
            spot,
            vol,
        } => {
            let quotes = container
                .quote_option_use_case()
                .quote_list(&notation, spot, vol)?;
            Ok(Output::Quotes(quotes))
        }

        Command::Resolve { name } => {
            let strategy_type = StrategyType::resolve(&name)?;
            Ok(Output::StrategyType(StrategyTypeDto::new(name, strategy_type)))
        }

        Command::Types => Ok(Output::StrategyTypes(
            StrategyType::ALL
                .iter()
                .map(|ty| StrategyTypeDto::new(ty.canonical_name(), *ty))
                .collect(),
        )),

        Command::Compose {
            strategy_type,
            ticker,
            legs,
            net_cost,
            spot,
            vol,
        } => {
            let today = container.clock().today();
            let mut parsed = Vec::with_capacity(legs.len());
            for spec in &legs {
                parsed.push((parse_notation(&spec.notation)?, spec));
            }

            let ticker = match ticker {
                Some(ticker) => ticker,
                None => parsed
                    .first()
                    .map(|(option, _)| option.ticker().to_string())
                    .unwrap_or_default(),
            };

            let legs = parsed
                .iter()
                .map(|(option, spec)| {
                    LegInput::from_parsed(
                        option,
                        today,
                        spec.premium.map(Money::new),
                        spec.quantity,
                    )
                    .map_err(|e| StrategyError::invalid_legs(e.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let strategy = container
                .open_strategy_use_case()
                .execute(OpenStrategyCommand {
                    user_id,
                    strategy_type,
                    ticker,
                    legs,
                    net_cost: net_cost.map(Money::new),
                    market: spot.map(|spot| MarketSnapshot {
                        spot,
                        volatility: vol,
                    }),
                })
                .await?;

            Ok(Output::Strategy(StrategyDto::from(&strategy)))
        }

        Command::Hold {
            notation,
            buy_price,
        } => {
            let holding = container
                .manage_holdings_use_case()
                .add_from_notation(user_id, &notation, Money::new(buy_price))
                .await?;
            Ok(Output::Holding(HoldingDto::from(&holding)))
        }
    }
}
