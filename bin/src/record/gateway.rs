//! SQLite implementation of the entry gateway.
//!
//! Every pooled connection waits on a busy database instead of failing, so
//! concurrent inserts queue up inside SQLite and the unique index on `email`
//! alone decides which of two identical submissions wins.
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self as diesel_r2d2, ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use giveaway::submission::errors::StoreError;
use giveaway::submission::gateway::{EntryGateway, InsertOutcome};
use giveaway::submission::model::Entry;
use r2d2::CustomizeConnection;

use super::models::NewEntry;
use super::schema::entry;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration
}

impl CustomizeConnection<SqliteConnection, diesel_r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel_r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel_r2d2::Error::QueryError)
    }
}

/// Opens a pool of `max_size` connections on the SQLite file at `datasource`.
pub fn connect(datasource: &str, max_size: u32) -> Result<SqlitePool, StoreError> {
    let manager = ConnectionManager::<SqliteConnection>::new(datasource);
    Pool::builder()
        .max_size(max_size)
        .connection_timeout(CONNECTION_TIMEOUT)
        .connection_customizer(Box::new(ConnectionOptions { busy_timeout: BUSY_TIMEOUT }))
        .build(manager)
        .map_err(StoreError::unavailable)
}

#[derive(Clone)]
pub struct DieselGateway {
    pool: SqlitePool
}

impl DieselGateway {
    pub fn new(pool: SqlitePool) -> DieselGateway {
        DieselGateway { pool }
    }

    /// Creates the `entry` table if it is missing. Safe to call on every start.
    pub fn bootstrap(&self) -> Result<(), StoreError> {
        let mut pooled = self.pool.get().map_err(StoreError::unavailable)?;
        let conn: &mut SqliteConnection = &mut pooled;
        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(StoreError::query)?;
        for version in applied {
            info!("Applied migration {} (entry table ensured)", version);
        }
        Ok(())
    }
}

impl EntryGateway for DieselGateway {
    fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.pool.get().map_err(StoreError::unavailable)?;
        entry::table
            .count()
            .get_result(&mut conn)
            .map_err(StoreError::query)
    }

    fn insert(&self, new_entry: &Entry) -> InsertOutcome {
        let mut conn = match self.pool.get() {
            Ok(conn) => conn,
            Err(e) => return InsertOutcome::Failed(StoreError::unavailable(e))
        };

        match diesel::insert_into(entry::table)
            .values(&NewEntry::from(new_entry))
            .execute(&mut conn) {
            Ok(_) => InsertOutcome::Inserted,
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => InsertOutcome::DuplicateKey,
            Err(e) => InsertOutcome::Failed(StoreError::query(e))
        }
    }
}
