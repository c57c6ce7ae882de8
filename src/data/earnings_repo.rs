use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::{
    Row,
    sqlite::{
        SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
    },
};
use std::str::FromStr;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DF;

/// A won block ready for persistent storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockWin {
    pub height: i64,
    pub amount_micro: i64,
    pub mode: String,
    pub won_at_ms: i64,
}

/// Abstract interface for earnings storage, mockable in tests.
#[async_trait::async_trait]
pub trait EarningsRepositoryTrait: Send + Sync {
    async fn initialize(&self) -> Result<()>;
    async fn record_win(&self, win: BlockWin) -> Result<()>;
    /// Lifetime `(blocks_won, micro_units_earned)`.
    async fn totals(&self) -> Result<(i64, i64)>;
    async fn recent_wins(&self, limit: i64) -> Result<Vec<BlockWin>>;
}

pub struct EarningsRepository {
    pool: SqlitePool,
}

impl EarningsRepository {
    pub async fn new(db_path: &str) -> Result<Self> {
        let connection_options = SqliteConnectOptions::from_str(&format!("sqlite://{}", db_path))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(10))
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(2) // Low connection count, this is low throughput
            .connect_with(connection_options)
            .await
            .context("Failed to connect to earnings db")?;

        let repo = Self { pool };
        repo.initialize().await?;

        Ok(repo)
    }

    // In-memory sqlite gives each pool connection its own database, so the
    // pool must hold exactly one.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;

        Ok(repo)
    }
}

#[async_trait::async_trait]
impl EarningsRepositoryTrait for EarningsRepository {
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS block_wins (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                height INTEGER NOT NULL,
                amount_micro INTEGER NOT NULL,
                mode TEXT NOT NULL,
                won_at_ms INTEGER NOT NULL
            );",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create block_wins table")?;

        Ok(())
    }

    async fn record_win(&self, win: BlockWin) -> Result<()> {
        #[cfg(debug_assertions)]
        if DF.log_earnings_repo {
            log::info!(
                "EARNINGS DB: Recording block {} ({} micro, {})",
                win.height,
                win.amount_micro,
                win.mode
            );
        }

        sqlx::query(
            r#"
            INSERT INTO block_wins (height, amount_micro, mode, won_at_ms)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(win.height)
        .bind(win.amount_micro)
        .bind(win.mode)
        .bind(win.won_at_ms)
        .execute(&self.pool)
        .await
        .context("Failed to insert block win")?;

        Ok(())
    }

    async fn totals(&self) -> Result<(i64, i64)> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS wins, COALESCE(SUM(amount_micro), 0) AS earned FROM block_wins",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok((row.get("wins"), row.get("earned")))
    }

    async fn recent_wins(&self, limit: i64) -> Result<Vec<BlockWin>> {
        let rows = sqlx::query(
            "SELECT height, amount_micro, mode, won_at_ms FROM block_wins
             ORDER BY won_at_ms DESC, id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| BlockWin {
                height: row.get("height"),
                amount_micro: row.get("amount_micro"),
                mode: row.get("mode"),
                won_at_ms: row.get("won_at_ms"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn win(height: i64, amount_micro: i64, won_at_ms: i64) -> BlockWin {
        BlockWin {
            height,
            amount_micro,
            mode: "Eco".to_string(),
            won_at_ms,
        }
    }

    #[tokio::test]
    async fn empty_repo_reports_zero_totals() {
        let repo = EarningsRepository::new_in_memory().await.unwrap();
        assert_eq!(repo.totals().await.unwrap(), (0, 0));
        assert!(repo.recent_wins(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn records_accumulate_into_totals() {
        let repo = EarningsRepository::new_in_memory().await.unwrap();
        repo.record_win(win(100, 2_000_000, 1_000)).await.unwrap();
        repo.record_win(win(101, 3_000_000, 2_000)).await.unwrap();

        assert_eq!(repo.totals().await.unwrap(), (2, 5_000_000));
    }

    #[tokio::test]
    async fn recent_wins_come_back_newest_first_and_limited() {
        let repo = EarningsRepository::new_in_memory().await.unwrap();
        for i in 0..5 {
            repo.record_win(win(i, 1_000_000, i * 10)).await.unwrap();
        }

        let recent = repo.recent_wins(3).await.unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].height, 4);
        assert_eq!(recent[2].height, 2);
    }
}
