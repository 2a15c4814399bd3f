//! Repository mocks shared by use case tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::holding::{Holding, HoldingError, HoldingRepository};
use crate::domain::shared::{HoldingId, StrategyId, Ticker, UserId};
use crate::domain::strategy::{Strategy, StrategyError, StrategyRepository, StrategyStatus};

mock! {
    pub StrategyRepo {}

    #[async_trait]
    impl StrategyRepository for StrategyRepo {
        async fn insert(&self, strategy: &Strategy) -> Result<(), StrategyError>;
        async fn find_by_id(&self, id: &StrategyId) -> Result<Option<Strategy>, StrategyError>;
        async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Strategy>, StrategyError>;
        async fn find_by_user_and_status(
            &self,
            user_id: &UserId,
            status: StrategyStatus,
        ) -> Result<Vec<Strategy>, StrategyError>;
        async fn update_status(&self, strategy: &Strategy) -> Result<(), StrategyError>;
    }
}

mock! {
    pub HoldingRepo {}

    #[async_trait]
    impl HoldingRepository for HoldingRepo {
        async fn insert(&self, holding: &Holding) -> Result<(), HoldingError>;
        async fn find_by_id(&self, id: &HoldingId) -> Result<Option<Holding>, HoldingError>;
        async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Holding>, HoldingError>;
        async fn delete(&self, id: &HoldingId) -> Result<(), HoldingError>;
        async fn delete_by_user_and_ticker(
            &self,
            user_id: &UserId,
            ticker: &Ticker,
        ) -> Result<usize, HoldingError>;
    }
}
