//! # Survey Store
//!
//! SQLite persistence for survey nodes and their target observations.
//!
//! The schema is bootstrapped idempotently on open, so pointing the store at
//! a fresh path initializes the database. The foreign key from targets to
//! nodes is declared in the schema and not re-validated here.

use std::path::Path;

use anyhow::Context;
use skymap_common::survey::{Node, NodeReport, TargetObservation};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

const CREATE_NODES_SQL: &str = "\
CREATE TABLE IF NOT EXISTS nodes (
    id TEXT PRIMARY KEY,
    lat REAL,
    lon REAL
)";

const CREATE_TARGETS_SQL: &str = "\
CREATE TABLE IF NOT EXISTS targets (
    node_id TEXT,
    mac TEXT,
    rssi INTEGER,
    freq INTEGER,
    timestamp INTEGER,
    FOREIGN KEY(node_id) REFERENCES nodes(id)
)";

pub struct SurveyStore {
    pool: SqlitePool,
}

impl SurveyStore {
    /// Opens (creating if needed) the survey database at `path` and ensures
    /// both tables exist.
    pub async fn open(path: &Path) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open survey db at {}", path.display()))?;

        sqlx::query(CREATE_NODES_SQL).execute(&pool).await?;
        sqlx::query(CREATE_TARGETS_SQL).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Inserts or replaces a node row.
    pub async fn insert_node(&self, node: &Node) -> anyhow::Result<()> {
        sqlx::query("INSERT OR REPLACE INTO nodes (id, lat, lon) VALUES (?, ?, ?)")
            .bind(&node.id)
            .bind(node.lat)
            .bind(node.lon)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Records a target observation attributed to `node_id`.
    pub async fn insert_target(
        &self,
        node_id: &str,
        target: &TargetObservation,
    ) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO targets (node_id, mac, rssi, freq, timestamp) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(node_id)
        .bind(&target.mac)
        .bind(target.rssi)
        .bind(target.freq)
        .bind(target.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Returns every node joined with its observed targets.
    pub async fn nodes_with_targets(&self) -> anyhow::Result<Vec<NodeReport>> {
        let nodes: Vec<(String, f64, f64)> =
            sqlx::query_as("SELECT id, lat, lon FROM nodes ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        let mut reports = Vec::with_capacity(nodes.len());
        for (id, lat, lon) in nodes {
            let rows: Vec<(String, i64, i64, i64)> = sqlx::query_as(
                "SELECT mac, rssi, freq, timestamp FROM targets WHERE node_id = ?",
            )
            .bind(&id)
            .fetch_all(&self.pool)
            .await?;

            let targets = rows
                .into_iter()
                .map(|(mac, rssi, freq, timestamp)| TargetObservation {
                    mac,
                    rssi,
                    freq,
                    timestamp,
                })
                .collect();

            reports.push(NodeReport {
                node: Node { id, lat, lon },
                targets,
            });
        }

        Ok(reports)
    }
}
