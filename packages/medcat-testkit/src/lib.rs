//! Disposable Postgres databases for integration tests.
//!
//! Tests opt in by exporting `MEDCAT_PG_DSN`. Each call to [`with_test_db`] creates a uniquely
//! named database next to the one the DSN points at, hands its DSN to the test body and drops the
//! database afterwards.

mod error;

pub use error::{Error, Result};

use std::{env, future::Future, str::FromStr};

use sqlx::{
	ConnectOptions, Connection, Executor,
	postgres::{PgConnectOptions, PgConnection},
};
use uuid::Uuid;

pub const PG_DSN_ENV: &str = "MEDCAT_PG_DSN";

// Tried in order when looking for a database to run CREATE/DROP DATABASE from.
const MAINTENANCE_DATABASES: [&str; 2] = ["postgres", "template1"];

pub fn env_dsn() -> Option<String> {
	env::var(PG_DSN_ENV).ok().filter(|value| !value.trim().is_empty())
}

/// Runs `body` against a fresh database and drops it afterwards, whatever `body` returned.
///
/// A drop failure is reported only when `body` itself succeeded.
pub async fn with_test_db<F, Fut, T>(base_dsn: &str, body: F) -> Result<T>
where
	F: FnOnce(String) -> Fut,
	Fut: Future<Output = Result<T>>,
{
	let base = PgConnectOptions::from_str(base_dsn)
		.map_err(|err| Error::Message(format!("Invalid {PG_DSN_ENV}: {err}.")))?;
	let (maintenance, mut conn) = open_maintenance(&base).await?;
	let name = format!("medcat_test_{}", Uuid::new_v4().simple());

	conn.execute(format!(r#"CREATE DATABASE "{name}""#).as_str())
		.await
		.map_err(|err| Error::Message(format!("Failed to create {name}: {err}.")))?;
	conn.close().await?;

	let dsn = base.database(&name).to_url_lossy().to_string();
	let outcome = body(dsn).await;
	let dropped = drop_database(&maintenance, &name).await;

	match (outcome, dropped) {
		(Ok(value), Ok(())) => Ok(value),
		(Ok(_), Err(err)) => Err(err),
		(Err(err), dropped) => {
			if let Err(drop_err) = dropped {
				eprintln!("Leaked test database {name}: {drop_err}.");
			}

			Err(err)
		},
	}
}

async fn open_maintenance(base: &PgConnectOptions) -> Result<(PgConnectOptions, PgConnection)> {
	let mut failures = Vec::new();

	for database in MAINTENANCE_DATABASES {
		let options = base.clone().database(database);

		match PgConnection::connect_with(&options).await {
			Ok(conn) => return Ok((options, conn)),
			Err(err) => failures.push(format!("{database}: {err}")),
		}
	}

	Err(Error::Message(format!("No maintenance database reachable ({}).", failures.join("; "))))
}

async fn drop_database(maintenance: &PgConnectOptions, name: &str) -> Result<()> {
	let mut conn = PgConnection::connect_with(maintenance).await?;

	// Pools opened by the test body may still hold sessions.
	sqlx::query(
		"\
SELECT pg_terminate_backend(pid)
FROM pg_stat_activity
WHERE datname = $1 AND pid <> pg_backend_pid()",
	)
	.bind(name)
	.execute(&mut conn)
	.await?;
	conn.execute(format!(r#"DROP DATABASE IF EXISTS "{name}""#).as_str()).await?;
	conn.close().await?;

	Ok(())
}
