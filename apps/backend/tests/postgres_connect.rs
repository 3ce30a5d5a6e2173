mod common;

use backend_test_support::live_db::live_db_vars;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use todo_service::config::DatabaseConfig;
use todo_service::infra::db::connect_db;

// sqlx keeps retrying a refused connection until its 30s acquire timeout
#[tokio::test]
#[ignore = "slow: waits out the driver's default acquire timeout"]
async fn unreachable_host_fails_with_context() {
    let mut vars = common::scenario_vars();
    vars.insert("DB_HOST", "127.0.0.1");
    // Port 1 is never a Postgres listener
    vars.insert("DB_PORT", "1");
    let cfg = DatabaseConfig::from_source(&vars).expect("config");

    let err = connect_db(&cfg).await.unwrap_err();

    assert!(
        err.to_string().contains("failed to connect to database"),
        "{err}"
    );
}

#[tokio::test]
async fn connects_to_live_database() {
    let Some(vars) = live_db_vars() else {
        eprintln!("TEST_DB_NAME not set; skipping live Postgres test");
        return;
    };
    let cfg = DatabaseConfig::from_source(&vars).expect("live config");

    let conn = connect_db(&cfg).await.expect("connect to live database");

    let row = conn
        .query_one(Statement::from_string(DatabaseBackend::Postgres, "SELECT 1"))
        .await
        .expect("select 1");
    assert!(row.is_some());
    conn.close().await.expect("close");
}
