//! Manage Holdings Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::application::ports::ClockPort;
use crate::domain::holding::{Holding, HoldingError, HoldingRepository, NewHolding};
use crate::domain::notation::{expiration_after, parse_notation};
use crate::domain::shared::{HoldingId, Money, OptionRight, Ticker, UserId};

/// Command to add a holding from explicit fields.
#[derive(Debug, Clone)]
pub struct AddHoldingCommand {
    /// Owning user.
    pub user_id: UserId,
    /// Underlying ticker.
    pub ticker: String,
    /// Call or put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: Decimal,
    /// Days from today until expiration.
    pub days_to_expiration: i32,
    /// Price paid per contract.
    pub buy_price: Money,
}

/// Use case for the holdings book.
pub struct ManageHoldingsUseCase<H, C>
where
    H: HoldingRepository,
    C: ClockPort,
{
    holding_repo: Arc<H>,
    clock: Arc<C>,
}

impl<H, C> ManageHoldingsUseCase<H, C>
where
    H: HoldingRepository,
    C: ClockPort,
{
    /// Create a new `ManageHoldingsUseCase`.
    pub const fn new(holding_repo: Arc<H>, clock: Arc<C>) -> Self {
        Self {
            holding_repo,
            clock,
        }
    }

    /// Add a holding; expiration is today plus `days_to_expiration`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHolding` for bad fields, or a repository error.
    pub async fn add(&self, cmd: AddHoldingCommand) -> Result<Holding, HoldingError> {
        let expiration = expiration_after(self.clock.today(), cmd.days_to_expiration).map_err(
            |e| HoldingError::InvalidHolding {
                message: e.to_string(),
            },
        )?;

        let holding = Holding::new(NewHolding {
            user_id: cmd.user_id,
            ticker: Ticker::new(cmd.ticker),
            right: cmd.right,
            strike: cmd.strike,
            expiration,
            buy_price: cmd.buy_price,
        })?;

        self.store(holding).await
    }

    /// Add a holding described by notation ("NVDA 150c 30d").
    ///
    /// # Errors
    ///
    /// Returns `Notation` if the text does not parse, `InvalidHolding` for
    /// bad fields, or a repository error.
    pub async fn add_from_notation(
        &self,
        user_id: UserId,
        notation: &str,
        buy_price: Money,
    ) -> Result<Holding, HoldingError> {
        let option = parse_notation(notation)?;
        let holding = Holding::from_notation(user_id, &option, self.clock.today(), buy_price)?;
        self.store(holding).await
    }

    /// One holding by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub async fn get(&self, holding_id: &HoldingId) -> Result<Holding, HoldingError> {
        self.holding_repo
            .find_by_id(holding_id)
            .await?
            .ok_or_else(|| HoldingError::NotFound {
                holding_id: holding_id.clone(),
            })
    }

    /// Every holding a user has.
    ///
    /// # Errors
    ///
    /// Returns error if the repository query fails.
    pub async fn list(&self, user_id: &UserId) -> Result<Vec<Holding>, HoldingError> {
        self.holding_repo.find_by_user(user_id).await
    }

    /// Remove one holding.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub async fn remove(&self, holding_id: &HoldingId) -> Result<(), HoldingError> {
        self.holding_repo.delete(holding_id).await?;
        tracing::info!(holding_id = %holding_id, "Holding removed");
        Ok(())
    }

    /// Remove every holding a user has on a ticker; returns how many went.
    ///
    /// # Errors
    ///
    /// Returns error if the repository delete fails.
    pub async fn remove_by_ticker(
        &self,
        user_id: &UserId,
        ticker: &str,
    ) -> Result<usize, HoldingError> {
        let ticker = Ticker::new(ticker);
        let removed = self
            .holding_repo
            .delete_by_user_and_ticker(user_id, &ticker)
            .await?;

        tracing::info!(user_id = %user_id, ticker = %ticker, removed, "Holdings removed by ticker");
        Ok(removed)
    }

    async fn store(&self, holding: Holding) -> Result<Holding, HoldingError> {
        self.holding_repo.insert(&holding).await?;
        tracing::info!(
            holding_id = %holding.id(),
            user_id = %holding.user_id(),
            ticker = %holding.ticker(),
            expiration = %holding.expiration(),
            "Holding added"
        );
        Ok(holding)
    }
}
