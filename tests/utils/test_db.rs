//! Throwaway PostgreSQL databases for repository tests
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use attribute_service::shared::config::DatabaseConfig;
use attribute_service::shared::infrastructure::Database;
use diesel::{sql_query, Connection, PgConnection, RunQueryDsl};
use futures::future::BoxFuture;

static NEXT_DB: AtomicU32 = AtomicU32::new(0);

/// A fresh, migrated database on the TEST_DATABASE_URL server.
///
/// Dropped with the value unless the test panicked, in which case it is left
/// behind for inspection.
pub struct TestDb {
    server_url: String,
    name: String,
    db: Arc<Database>,
}

impl TestDb {
    pub fn new() -> Self {
        dotenvy::dotenv().ok();
        let server_url =
            std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
        let name = format!(
            "attribute_test_{}_{}",
            std::process::id(),
            NEXT_DB.fetch_add(1, Ordering::SeqCst)
        );

        let mut admin = PgConnection::establish(&server_url).expect("connect to test server");
        sql_query(format!("CREATE DATABASE {name}"))
            .execute(&mut admin)
            .expect("create test database");

        let (base, _) = server_url
            .rsplit_once('/')
            .expect("TEST_DATABASE_URL ends in a database name");
        let db = Database::new(&DatabaseConfig {
            url: format!("{base}/{name}"),
            max_pool_size: 4,
        })
        .expect("pool for test database");
        db.run_migrations().expect("migrate test database");

        Self {
            server_url,
            name,
            db: Arc::new(db),
        }
    }

    /// Hand the migrated database to `test`
    pub async fn run_test(&self, test: impl FnOnce(Arc<Database>) -> BoxFuture<'static, ()>) {
        test(Arc::clone(&self.db)).await;
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if std::thread::panicking() {
            eprintln!("keeping test database {} after failure", self.name);
            return;
        }

        let Ok(mut admin) = PgConnection::establish(&self.server_url) else {
            eprintln!("could not reconnect to drop {}", self.name);
            return;
        };
        // Pooled connections still point at the database
        let _ = sql_query(format!(
            "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = '{}'",
            self.name
        ))
        .execute(&mut admin);
        if let Err(e) = sql_query(format!("DROP DATABASE IF EXISTS {}", self.name)).execute(&mut admin)
        {
            eprintln!("could not drop {}: {e}", self.name);
        }
    }
}
