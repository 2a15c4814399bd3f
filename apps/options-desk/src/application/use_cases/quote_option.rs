//! Quote Option Use Case
//!
//! Parse notation and price it with Black-Scholes under configured defaults.

use rust_decimal::Decimal;

use crate::application::dto::QuoteDto;
use crate::config::PricingConfig;
use crate::domain::notation::{ParsedOption, parse_notation, parse_notation_list};
use crate::error::DeskError;
use crate::pricing::BlackScholes;

/// Use case for theoretical quotes.
#[derive(Debug, Clone, Copy)]
pub struct QuoteOptionUseCase {
    pricing: PricingConfig,
    pricer: BlackScholes,
}

impl QuoteOptionUseCase {
    /// Create a new `QuoteOptionUseCase`.
    #[must_use]
    pub const fn new(pricing: PricingConfig) -> Self {
        Self {
            pricing,
            pricer: BlackScholes,
        }
    }

    /// Quote one contract.
    ///
    /// # Errors
    ///
    /// Returns a notation error for unparseable text or a pricing error for
    /// out-of-domain inputs (e.g. zero days).
    pub fn quote(
        &self,
        notation: &str,
        spot: Decimal,
        volatility: Option<f64>,
    ) -> Result<QuoteDto, DeskError> {
        let option = parse_notation(notation)?;
        self.quote_parsed(option, spot, volatility)
    }

    /// Quote several contracts separated by `,`, `;`, or newlines against
    /// one spot.
    ///
    /// # Errors
    ///
    /// Returns the first parse or pricing error.
    pub fn quote_list(
        &self,
        notation: &str,
        spot: Decimal,
        volatility: Option<f64>,
    ) -> Result<Vec<QuoteDto>, DeskError> {
        parse_notation_list(notation)?
            .into_iter()
            .map(|option| self.quote_parsed(option, spot, volatility))
            .collect()
    }

    fn quote_parsed(
        &self,
        option: ParsedOption,
        spot: Decimal,
        volatility: Option<f64>,
    ) -> Result<QuoteDto, DeskError> {
        let volatility = volatility.unwrap_or(self.pricing.default_volatility);
        let price = self.pricer.price_parsed(
            &option,
            spot,
            volatility,
            self.pricing.risk_free_rate,
            self.pricing.day_count_basis,
        )?;

        tracing::debug!(
            ticker = %option.ticker(),
            strike = %option.strike(),
            right = %option.right(),
            %price,
            "Quoted option"
        );

        Ok(QuoteDto {
            time_to_expiry_years: option.time_to_expiry_years(self.pricing.day_count_basis),
            contract: option,
            spot,
            volatility,
            risk_free_rate: self.pricing.risk_free_rate,
            price: price.amount(),
        })
    }
}
