//! Read-only queries over the climate dataset.

use std::path::Path;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};

use climate_common::{
    format_iso_date, parse_iso_date, DailyPrecipitation, Station, StationActivity,
    TemperatureObservation, TemperatureStats,
};

use crate::error::{StorageError, StorageResult};

/// Connection pool over the `station` and `measurement` tables.
///
/// Every query checks a connection out of the pool and returns it when the
/// query future completes or is dropped, so no request holds a connection
/// past its own lifetime.
#[derive(Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open an existing dataset file read-only.
    ///
    /// Fails with [`StorageError::DatasetNotFound`] instead of creating an
    /// empty database when `path` does not exist.
    pub async fn open(path: &Path, max_connections: u32) -> StorageResult<Self> {
        if !path.is_file() {
            return Err(StorageError::DatasetNotFound(path.to_path_buf()));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(StorageError::Connection)?;

        info!(path = %path.display(), max_connections, "Opened climate dataset");

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Newest measurement date, or `None` when there are no measurements.
    pub async fn latest_date(&self) -> StorageResult<Option<NaiveDate>> {
        let latest = sqlx::query_scalar::<_, Option<String>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        let latest = latest.as_deref().map(parse_iso_date).transpose()?;
        debug!(latest = ?latest, "Latest measurement date");
        Ok(latest)
    }

    /// Daily precipitation for every station with `date >= since`.
    ///
    /// Rows come back in storage order; missing readings stay `None`.
    pub async fn precipitation_since(&self, since: NaiveDate) -> StorageResult<Vec<DailyPrecipitation>> {
        let rows = sqlx::query_as::<_, PrecipitationRow>(
            "SELECT date, prcp FROM measurement WHERE date >= ?1",
        )
        .bind(format_iso_date(since))
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), since = %since, "Fetched precipitation");

        rows.into_iter()
            .map(|r| {
                Ok::<_, StorageError>(DailyPrecipitation {
                    date: parse_iso_date(&r.date)?,
                    prcp: r.prcp,
                })
            })
            .collect()
    }

    /// All stations, unfiltered, in storage order.
    pub async fn all_stations(&self) -> StorageResult<Vec<Station>> {
        let rows = sqlx::query_as::<_, StationRow>(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), "Fetched stations");

        Ok(rows.into_iter().map(Station::from).collect())
    }

    /// The station with the most measurement rows.
    ///
    /// Ties go to whichever group SQLite emits first; no secondary ordering
    /// is applied.
    pub async fn most_active_station(&self) -> StorageResult<Option<StationActivity>> {
        let row = sqlx::query_as::<_, ActivityRow>(
            "SELECT station, COUNT(station) AS observations FROM measurement \
             WHERE station IS NOT NULL \
             GROUP BY station ORDER BY observations DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        debug!(station = ?row.as_ref().map(|r| &r.station), "Most active station");

        Ok(row.map(|r| StationActivity {
            station: r.station,
            observations: r.observations,
        }))
    }

    /// Temperature observations for one station with `date >= since`.
    pub async fn temperature_observations(
        &self,
        station: &str,
        since: NaiveDate,
    ) -> StorageResult<Vec<TemperatureObservation>> {
        let rows = sqlx::query_as::<_, TobsRow>(
            "SELECT date, tobs FROM measurement WHERE station = ?1 AND date >= ?2",
        )
        .bind(station)
        .bind(format_iso_date(since))
        .fetch_all(&self.pool)
        .await?;

        debug!(rows = rows.len(), station, since = %since, "Fetched temperature observations");

        rows.into_iter()
            .map(|r| {
                Ok::<_, StorageError>(TemperatureObservation {
                    date: parse_iso_date(&r.date)?,
                    tobs: r.tobs,
                })
            })
            .collect()
    }

    /// Min, average and max temperature over `from <= date [<= to]`.
    ///
    /// Both bounds are inclusive. An empty match (including `from > to`)
    /// yields all-`None` stats rather than an error.
    pub async fn temperature_stats(
        &self,
        from: NaiveDate,
        to: Option<NaiveDate>,
    ) -> StorageResult<TemperatureStats> {
        let query = match to {
            Some(to) => sqlx::query_as::<_, StatsRow>(
                "SELECT MIN(tobs) AS min_temp, AVG(tobs) AS avg_temp, MAX(tobs) AS max_temp \
                 FROM measurement WHERE date >= ?1 AND date <= ?2",
            )
            .bind(format_iso_date(from))
            .bind(format_iso_date(to)),
            None => sqlx::query_as::<_, StatsRow>(
                "SELECT MIN(tobs) AS min_temp, AVG(tobs) AS avg_temp, MAX(tobs) AS max_temp \
                 FROM measurement WHERE date >= ?1",
            )
            .bind(format_iso_date(from)),
        };

        let row = query.fetch_one(&self.pool).await?;
        let stats = TemperatureStats::from(row);

        debug!(from = %from, to = ?to, empty = stats.is_empty(), "Computed temperature stats");

        Ok(stats)
    }

    /// Number of rows in `station`.
    pub async fn station_count(&self) -> StorageResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM station")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Number of rows in `measurement`.
    pub async fn measurement_count(&self) -> StorageResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM measurement")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// Internal row types for database queries.

#[derive(FromRow)]
struct StationRow {
    station: String,
    name: String,
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl From<StationRow> for Station {
    fn from(row: StationRow) -> Self {
        Station {
            station: row.station,
            name: row.name,
            latitude: row.latitude,
            longitude: row.longitude,
            elevation: row.elevation,
        }
    }
}

#[derive(FromRow)]
struct PrecipitationRow {
    date: String,
    prcp: Option<f64>,
}

#[derive(FromRow)]
struct TobsRow {
    date: String,
    tobs: f64,
}

#[derive(FromRow)]
struct ActivityRow {
    station: String,
    observations: i64,
}

#[derive(FromRow)]
struct StatsRow {
    min_temp: Option<f64>,
    avg_temp: Option<f64>,
    max_temp: Option<f64>,
}

impl From<StatsRow> for TemperatureStats {
    fn from(row: StatsRow) -> Self {
        TemperatureStats {
            min: row.min_temp,
            avg: row.avg_temp,
            max: row.max_temp,
        }
    }
}
