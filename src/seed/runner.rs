use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::entity::ambient_temperature;
use crate::error::AppResult;

/// Number of readings inserted by a single run
pub const READING_COUNT: usize = 1000;

/// Lowest temperature a reading can hold (inclusive)
pub const TEMP_MIN: i32 = 1;
/// Highest temperature a reading can hold (inclusive)
pub const TEMP_MAX: i32 = 100;

/// Fills `ambient_temperature` with uniformly random readings.
///
/// The random source is injected so runs can be reproduced from a seed.
pub struct SeedRunner<R> {
    rng: R,
}

impl SeedRunner<StdRng> {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeedRunner<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `READING_COUNT` independent temperatures in `[TEMP_MIN, TEMP_MAX]`.
    pub fn draw_temperatures(&mut self) -> Vec<i32> {
        (0..READING_COUNT)
            .map(|_| self.rng.gen_range(TEMP_MIN..=TEMP_MAX))
            .collect()
    }

    /// Insert one batch of random readings and commit it.
    ///
    /// All rows go out as a single multi-row insert inside one transaction.
    /// On any failure the transaction is dropped uncommitted, which rolls it back.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Database` if the transaction cannot be opened, the
    /// insert is rejected, or the commit fails.
    pub async fn populate_temperature(&mut self, db: &DatabaseConnection) -> AppResult<()> {
        let readings: Vec<ambient_temperature::ActiveModel> = self
            .draw_temperatures()
            .into_iter()
            .map(|temp| ambient_temperature::ActiveModel {
                temp: Set(temp),
                ..Default::default()
            })
            .collect();

        tracing::debug!(count = readings.len(), "Generated ambient temperature readings");

        let txn = db.begin().await?;

        let rows = ambient_temperature::Entity::insert_many(readings)
            .exec_without_returning(&txn)
            .await?;

        txn.commit().await?;

        tracing::info!(rows, "Ambient temperature readings committed");
        Ok(())
    }
}
