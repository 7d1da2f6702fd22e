use medcat_config::Postgres;
use medcat_domain::{Field, MatchMode, Medicine, MedicineQuery, Predicate};
use medcat_storage::{
	db::Db,
	models::NewMedicine,
	queries::{find_medicines, insert_medicine},
};

fn testkit_err(err: medcat_storage::Error) -> medcat_testkit::Error {
	medcat_testkit::Error::Message(err.to_string())
}

fn names(rows: &[Medicine]) -> Vec<&str> {
	rows.iter().map(|m| m.name.as_str()).collect()
}

async fn connect(dsn: String) -> medcat_testkit::Result<Db> {
	let db = Db::connect(&Postgres { dsn, pool_max_conns: 1 }).await.map_err(testkit_err)?;

	db.ensure_schema().await.map_err(testkit_err)?;

	Ok(db)
}

async fn seeded_db(dsn: String) -> medcat_testkit::Result<Db> {
	let db = connect(dsn).await?;

	for (name, kind, price) in [
		("Paracetamol", "Analgesic", 3.5),
		("Aspirin", "Analgesic", 2.0),
		("Apar_100", "Supplement", 9.0),
		("Sparadrap", "Dressing", 1.25),
		("Cold Relief", "Paracetamol combo", 6.75),
		("baby aspirin", "Analgesic", 1.5),
	] {
		insert_medicine(&db, &NewMedicine { name, r#type: kind, price })
			.await
			.map_err(testkit_err)?;
	}

	Ok(db)
}

async fn run(db: &Db, query: &MedicineQuery) -> medcat_testkit::Result<Vec<Medicine>> {
	find_medicines(db, query).await.map_err(testkit_err)
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MEDCAT_PG_DSN to run."]
async fn ensure_schema_is_idempotent() {
	let Some(base_dsn) = medcat_testkit::env_dsn() else {
		eprintln!("Skipping ensure_schema_is_idempotent; set MEDCAT_PG_DSN to run this test.");

		return;
	};
	let count = medcat_testkit::with_test_db(&base_dsn, |dsn| async move {
		let db = connect(dsn).await?;

		db.ensure_schema().await.map_err(testkit_err)?;

		let count: i64 = sqlx::query_scalar(
			"SELECT count(*) FROM information_schema.tables WHERE table_name = 'medicines'",
		)
		.fetch_one(&db.pool)
		.await?;

		db.pool.close().await;

		Ok(count)
	})
	.await
	.expect("Failed to bootstrap schema twice.");

	assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MEDCAT_PG_DSN to run."]
async fn finds_by_prefix_and_containment_case_insensitively() {
	let Some(base_dsn) = medcat_testkit::env_dsn() else {
		eprintln!("Skipping finds_by_prefix_and_containment; set MEDCAT_PG_DSN to run this test.");

		return;
	};
	let (prefix, either) = medcat_testkit::with_test_db(&base_dsn, |dsn| async move {
		let db = seeded_db(dsn).await?;
		let prefix = run(
			&db,
			&MedicineQuery::matching(Predicate::new(Field::Name, MatchMode::StartsWith, "PAR")),
		)
		.await?;
		let either = run(
			&db,
			&MedicineQuery::matching(Predicate::new(Field::Name, MatchMode::Contains, "para"))
				.or(Predicate::new(Field::Type, MatchMode::Contains, "para")),
		)
		.await?;

		db.pool.close().await;

		Ok((prefix, either))
	})
	.await
	.expect("Failed to query test database.");

	assert_eq!(names(&prefix), vec!["Paracetamol"]);
	assert_eq!(names(&either), vec!["Cold Relief", "Paracetamol", "Sparadrap"]);
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set MEDCAT_PG_DSN to run."]
async fn exclusion_limit_and_literal_wildcards() {
	let Some(base_dsn) = medcat_testkit::env_dsn() else {
		eprintln!("Skipping exclusion_limit_and_literal_wildcards; set MEDCAT_PG_DSN to run.");

		return;
	};
	let (all, limited, literal, wildcard) =
		medcat_testkit::with_test_db(&base_dsn, |dsn| async move {
			let db = seeded_db(dsn).await?;
			let all = run(&db, &MedicineQuery::all()).await?;
			let aspirin_ids: Vec<i64> =
				all.iter().filter(|m| m.name == "Aspirin").map(|m| m.id).collect();
			let limited = run(
				&db,
				&MedicineQuery::matching(Predicate::new(Field::Name, MatchMode::Contains, "a"))
					.excluding(aspirin_ids)
					.take(2),
			)
			.await?;
			let literal = run(
				&db,
				&MedicineQuery::matching(Predicate::new(Field::Name, MatchMode::Contains, "r_1")),
			)
			.await?;
			let wildcard = run(
				&db,
				&MedicineQuery::matching(Predicate::new(Field::Name, MatchMode::Contains, "p_r")),
			)
			.await?;

			db.pool.close().await;

			Ok((all, limited, literal, wildcard))
		})
		.await
		.expect("Failed to query test database.");

	// Byte order: upper-case names sort before lower-case ones.
	assert_eq!(names(&all), vec![
		"Apar_100",
		"Aspirin",
		"Cold Relief",
		"Paracetamol",
		"Sparadrap",
		"baby aspirin"
	]);
	assert_eq!(names(&limited), vec!["Apar_100", "Paracetamol"]);
	// "_" must not act as a single-character wildcard.
	assert_eq!(names(&literal), vec!["Apar_100"]);
	assert!(wildcard.is_empty());
}
