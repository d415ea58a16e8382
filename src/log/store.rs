//! Postgres-backed Value Log
//!
//! The pool is created lazily: the ingestion service starts and serves even
//! while the log store is down, and appends begin succeeding once it comes up.
//! The table name `values` is kept from the wire contract and quoted everywhere
//! (VALUES is a reserved word in Postgres).

use super::types::LoggedValue;
use crate::config::LogStoreConfig;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub struct ValueLog {
    pool: PgPool,
}

impl ValueLog {
    /// Builds the connection pool without touching the network.
    pub fn connect_lazy(config: &LogStoreConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(&config.url())?;

        Ok(Self { pool })
    }

    /// Creates the log table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(r#"CREATE TABLE IF NOT EXISTS "values" (number INT)"#)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Appends one submission. Duplicates are expected and kept.
    pub async fn append(&self, index: u32) -> Result<()> {
        sqlx::query(r#"INSERT INTO "values" (number) VALUES ($1)"#)
            .bind(index as i32)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Every row ever logged, in storage order.
    pub async fn list_all(&self) -> Result<Vec<LoggedValue>> {
        let rows = sqlx::query_as::<_, LoggedValue>(r#"SELECT number FROM "values""#)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
