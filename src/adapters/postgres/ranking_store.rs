//! PostgreSQL implementation of RankingStore.
//!
//! Items, voters, and vote records live in three tables; `record_vote` runs
//! as a single transaction so the dedup record and both item rows commit or
//! roll back together.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, PairKey, VoterId};
use crate::domain::ranking::Item;
use crate::ports::{RankingStore, RatingUpdate};

/// PostgreSQL implementation of RankingStore.
#[derive(Clone)]
pub struct PostgresRankingStore {
    pool: PgPool,
}

impl PostgresRankingStore {
    /// Creates a new PostgresRankingStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RankingStore for PostgresRankingStore {
    async fn all_items(&self) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, rating, wins, losses
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch items: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_item).collect()
    }

    async fn find_item(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, rating, wins, losses
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch item: {}", e),
            )
        })?;

        match row {
            Some(row) => Ok(Some(row_to_item(row)?)),
            None => Ok(None),
        }
    }

    async fn is_authorized(&self, voter: &VoterId) -> Result<bool, DomainError> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM voters WHERE id = $1")
            .bind(voter.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check voter: {}", e),
                )
            })?;

        Ok(result.0 > 0)
    }

    async fn has_voted(&self, voter: &VoterId, pair: &PairKey) -> Result<bool, DomainError> {
        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM votes WHERE voter_id = $1 AND pair_key = $2")
                .bind(voter.as_str())
                .bind(pair.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to check vote record: {}", e),
                    )
                })?;

        Ok(result.0 > 0)
    }

    async fn voted_pairs(&self, voter: &VoterId) -> Result<HashSet<PairKey>, DomainError> {
        let rows = sqlx::query("SELECT pair_key FROM votes WHERE voter_id = $1")
            .bind(voter.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to fetch voted pairs: {}", e),
                )
            })?;

        rows.into_iter()
            .map(|row| {
                let key: String = row.try_get("pair_key").map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to get pair_key: {}", e),
                    )
                })?;
                Ok(PairKey::from_stored(key))
            })
            .collect()
    }

    async fn record_vote(
        &self,
        voter: &VoterId,
        pair: &PairKey,
        winner: RatingUpdate,
        loser: RatingUpdate,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to begin vote transaction: {}", e),
            )
        })?;

        // Dedup record first: the primary key on (voter_id, pair_key) makes
        // exactly one of any set of racing inserts stick.
        let inserted = sqlx::query(
            r#"
            INSERT INTO votes (voter_id, pair_key, winner_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (voter_id, pair_key) DO NOTHING
            "#,
        )
        .bind(voter.as_str())
        .bind(pair.as_str())
        .bind(winner.item_id.as_str())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to insert vote record: {}", e),
            )
        })?;

        if inserted.rows_affected() == 0 {
            rollback(tx).await;
            return Err(DomainError::new(
                ErrorCode::AlreadyVoted,
                format!("Voter '{}' already judged pair '{}'", voter, pair),
            ));
        }

        let winner_updated =
            sqlx::query("UPDATE items SET rating = $2, wins = wins + 1 WHERE id = $1")
                .bind(winner.item_id.as_str())
                .bind(winner.new_rating)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to update winner: {}", e),
                    )
                })?;

        if winner_updated.rows_affected() == 0 {
            rollback(tx).await;
            return Err(DomainError::new(
                ErrorCode::ItemNotFound,
                format!("Item not found: {}", winner.item_id),
            )
            .with_detail("item_id", winner.item_id.as_str()));
        }

        let loser_updated =
            sqlx::query("UPDATE items SET rating = $2, losses = losses + 1 WHERE id = $1")
                .bind(loser.item_id.as_str())
                .bind(loser.new_rating)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to update loser: {}", e),
                    )
                })?;

        if loser_updated.rows_affected() == 0 {
            rollback(tx).await;
            return Err(DomainError::new(
                ErrorCode::ItemNotFound,
                format!("Item not found: {}", loser.item_id),
            )
            .with_detail("item_id", loser.item_id.as_str()));
        }

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit vote transaction: {}", e),
            )
        })?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Best-effort rollback; dropping the transaction rolls back anyway, so a
/// rollback error only gets logged.
async fn rollback(tx: sqlx::Transaction<'_, sqlx::Postgres>) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!("Vote transaction rollback failed: {}", e);
    }
}

fn row_to_item(row: sqlx::postgres::PgRow) -> Result<Item, DomainError> {
    let id: String = row.try_get("id").map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Failed to get id: {}", e))
    })?;

    let name: String = row.try_get("name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get name: {}", e),
        )
    })?;

    let rating: f64 = row.try_get("rating").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get rating: {}", e),
        )
    })?;

    let wins: i32 = row.try_get("wins").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get wins: {}", e),
        )
    })?;

    let losses: i32 = row.try_get("losses").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get losses: {}", e),
        )
    })?;

    let id = ItemId::new(id)
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid item id: {}", e)))?;

    Ok(Item::reconstitute(
        id,
        name,
        rating,
        wins.max(0) as u32,
        losses.max(0) as u32,
    ))
}
