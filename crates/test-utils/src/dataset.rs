//! Temporary SQLite datasets for storage and API tests.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::fixtures::{hawaii_measurements, hawaii_stations, MeasurementRow, StationRow};

/// Schema of the Hawaii climate dataset file.
pub const DATASET_SCHEMA: &str = r#"
CREATE TABLE station (
    id INTEGER PRIMARY KEY,
    station TEXT,
    name TEXT,
    latitude FLOAT,
    longitude FLOAT,
    elevation FLOAT
);

CREATE TABLE measurement (
    id INTEGER PRIMARY KEY,
    station TEXT,
    date TEXT,
    prcp FLOAT,
    tobs FLOAT
);
"#;

/// A dataset file living in a temporary directory.
///
/// The directory and file are removed when this value is dropped.
pub struct FixtureDataset {
    _dir: TempDir,
    path: PathBuf,
}

impl FixtureDataset {
    /// The standard fixture from [`crate::fixtures`].
    pub async fn hawaii() -> Self {
        Self::build(&hawaii_stations(), &hawaii_measurements()).await
    }

    /// Stations present, no measurements.
    pub async fn without_measurements() -> Self {
        Self::build(&hawaii_stations(), &[]).await
    }

    /// Write the given rows, in order, to a fresh dataset file.
    pub async fn build(stations: &[StationRow], measurements: &[MeasurementRow]) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("hawaii.sqlite");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create fixture database");

        create_schema(&pool).await;
        insert_rows(&pool, stations, measurements).await;
        pool.close().await;

        Self { _dir: dir, path }
    }

    /// Path of the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn create_schema(pool: &SqlitePool) {
    for statement in DATASET_SCHEMA.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed)
                .execute(pool)
                .await
                .expect("Failed to create fixture schema");
        }
    }
}

async fn insert_rows(pool: &SqlitePool, stations: &[StationRow], measurements: &[MeasurementRow]) {
    for s in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&s.station)
        .bind(&s.name)
        .bind(s.latitude)
        .bind(s.longitude)
        .bind(s.elevation)
        .execute(pool)
        .await
        .expect("Failed to insert fixture station");
    }

    for m in measurements {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)")
            .bind(&m.station)
            .bind(&m.date)
            .bind(m.prcp)
            .bind(m.tobs)
            .execute(pool)
            .await
            .expect("Failed to insert fixture measurement");
    }
}
