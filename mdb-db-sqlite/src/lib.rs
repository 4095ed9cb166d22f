#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use diesel::{connection::SimpleConnection as _, r2d2, sqlite::SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use mdb_core::{repositories as repo, usecases as uc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};

mod models;
mod repo_impl;
mod schema;
mod util;


const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type Connection = SqliteConnection;

type ConnectionManager = r2d2::ConnectionManager<Connection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedConnectionPool = Arc<RwLock<ConnectionPool>>;

/// Read access, many of them may exist concurrently.
pub struct DbReadOnly<'a> {
    _locked_pool: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.read();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read-only access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }
}

/// Exclusive write access.
pub struct DbReadWrite<'a> {
    _locked_pool: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// A connection inside of a running transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedConnectionPool) -> Fallible<Self> {
        let locked_pool = pool.write();
        let conn = locked_pool.get().inspect_err(|err| {
            log::error!("Failed to obtain pooled database connection for read/write access: {err}");
        })?;
        Ok(Self {
            _locked_pool: locked_pool,
            conn: RefCell::new(conn),
        })
    }

    /// Runs `f` in a single transaction that is rolled back
    /// if `f` fails.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        use diesel::Connection as _;
        // Diesel only knows its own error type, the use case
        // error is kept here while the transaction is rolled back.
        let mut usecase_error: Option<uc::Error> = None;
        self.conn
            .borrow_mut()
            .transaction(|conn| {
                f(&DbConnection::new(conn)).map_err(|err| {
                    usecase_error = Some(err.into());
                    diesel::result::Error::RollbackTransaction
                })
            })
            .map_err(|err| match usecase_error {
                Some(usecase_error) => {
                    debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                    usecase_error
                }
                None => uc::Error::Repo(repo_impl::from_diesel_err(err)),
            })
    }

    fn sqlite_conn(&self) -> RefMut<PooledConnection> {
        self.conn.borrow_mut()
    }
}

/// Settings that SQLite only applies per connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(
            r#"
PRAGMA busy_timeout = 5000;       -- wait for locks instead of failing immediately
PRAGMA foreign_keys = 1;          -- check foreign key constraints
PRAGMA defer_foreign_keys = 1;    -- delay enforcement of foreign key constraints until commit
PRAGMA recursive_triggers = 1;    -- for recursive ON CASCADE DELETE actions
"#,
        )
        .map_err(r2d2::Error::QueryError)
    }
}

/// Configure the database file
///
/// Some values like the text encoding or the journal mode are
/// persistent and only need to be set once for all connections.
pub fn initialize_database(connection: &mut SqliteConnection) -> Fallible<()> {
    connection.batch_execute(
        r#"
PRAGMA encoding = 'UTF-8';
PRAGMA journal_mode = WAL;        -- better write-concurrency
PRAGMA synchronous = NORMAL;      -- fsync only in critical moments, safe for journal_mode = WAL
PRAGMA wal_checkpoint(TRUNCATE);  -- truncate the WAL file left over from the last run
"#,
    )?;
    Ok(())
}

/// Pool of SQLite connections
///
/// Only a single connection with write access is handed out at
/// a time while multiple readers may proceed concurrently. This
/// avoids SQLITE_BUSY errors on concurrent writes.
#[derive(Clone)]
pub struct Connections {
    pool: SharedConnectionPool,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Establish a test connection first to fail early on
        // inaccessible files instead of letting r2d2 retry.
        use diesel::Connection as _;
        let _ = diesel::SqliteConnection::establish(url)?;
        log::debug!("Creating connection pool with {pool_size} connection(s) for {url}");
        let manager = ConnectionManager::new(url);
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .connection_customizer(Box::new(ConnectionCustomizer))
            .build(manager)?;
        initialize_database(&mut *pool.get()?)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    /// A fresh and migrated in-memory database.
    ///
    /// All data is lost when the last clone is dropped.
    pub fn in_memory() -> Fallible<Self> {
        // Every connection to ":memory:" opens its own database
        let connections = Self::init(":memory:", 1)?;
        run_embedded_database_migrations(connections.exclusive()?)?;
        Ok(connections)
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        DbReadWrite::try_new(&self.pool)
    }
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let mut sqlite_conn = conn.sqlite_conn();
    let applied = sqlite_conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    for version in applied {
        log::debug!("Applied migration {version}");
    }
    Ok(())
}
