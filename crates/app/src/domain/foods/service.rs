//! Foods service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::foods::{
        errors::FoodsServiceError,
        models::{Food, FoodUuid, NewFood},
        repository::PgFoodsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgFoodsService {
    db: Db,
    repository: PgFoodsRepository,
}

impl PgFoodsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgFoodsRepository::new(),
        }
    }
}

#[async_trait]
impl FoodsService for PgFoodsService {
    async fn list_foods(&self) -> Result<Vec<Food>, FoodsServiceError> {
        let mut tx = self.db.begin().await?;

        let foods = self.repository.list_foods(&mut tx).await?;

        tx.commit().await?;

        Ok(foods)
    }

    async fn get_food(&self, food: FoodUuid) -> Result<Food, FoodsServiceError> {
        let mut tx = self.db.begin().await?;

        let food = self.repository.get_food(&mut tx, food).await?;

        tx.commit().await?;

        Ok(food)
    }

    async fn create_food(&self, food: NewFood) -> Result<Food, FoodsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_food(&mut tx, food).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait FoodsService: Send + Sync {
    /// Retrieves the whole catalog.
    async fn list_foods(&self) -> Result<Vec<Food>, FoodsServiceError>;

    /// Retrieve a single food.
    async fn get_food(&self, food: FoodUuid) -> Result<Food, FoodsServiceError>;

    /// Creates a new catalog entry. Used for seeding; catalog administration
    /// beyond creation lives outside this system.
    async fn create_food(&self, food: NewFood) -> Result<Food, FoodsServiceError>;
}
