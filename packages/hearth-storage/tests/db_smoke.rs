use hearth_config::Postgres;
use hearth_domain::{PropertyType, SearchFilters};
use hearth_storage::{db::Db, properties};
use hearth_testkit::TestDatabase;
use uuid::Uuid;

async fn bootstrap(test_db: &TestDatabase) -> Db {
	let cfg = Postgres { dsn: test_db.dsn().to_string(), pool_max_conns: 2 };
	let db = Db::connect(&cfg).await.expect("Failed to connect to Postgres.");

	db.ensure_schema().await.expect("Failed to ensure schema.");

	db
}

async fn insert_property(
	db: &Db,
	address: &str,
	city: &str,
	kind: PropertyType,
	value: i64,
	created_at: &str,
) -> Uuid {
	sqlx::query_scalar(
		"\
INSERT INTO properties (address, city, state, property_type, listing_type, current_value, garage_spaces, created_at)
VALUES ($1, $2, 'TX', $3, 'sale', $4, 2, $5::timestamptz)
RETURNING id",
	)
	.bind(address)
	.bind(city)
	.bind(kind.as_str())
	.bind(value)
	.bind(created_at)
	.fetch_one(&db.pool)
	.await
	.expect("Failed to insert property.")
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set HEARTH_PG_DSN to run."]
async fn schema_bootstrap_is_idempotent() {
	let Some(base_dsn) = hearth_testkit::env_dsn() else {
		eprintln!("Skipping schema_bootstrap_is_idempotent; set HEARTH_PG_DSN to run this test.");

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;

	db.ensure_schema().await.expect("Second bootstrap failed.");

	let count: i64 = sqlx::query_scalar(
		"SELECT count(*) FROM information_schema.tables WHERE table_name = 'search_history'",
	)
	.fetch_one(&db.pool)
	.await
	.expect("Failed to query schema tables.");

	assert_eq!(count, 1);

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to clean up test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set HEARTH_PG_DSN to run."]
async fn list_filters_and_orders_newest_first() {
	let Some(base_dsn) = hearth_testkit::env_dsn() else {
		eprintln!(
			"Skipping list_filters_and_orders_newest_first; set HEARTH_PG_DSN to run this test."
		);

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;
	let older = insert_property(
		&db,
		"12 Lakeview Dr",
		"Austin",
		PropertyType::SingleFamily,
		685_000,
		"2024-01-10T00:00:00Z",
	)
	.await;
	let newer = insert_property(
		&db,
		"400 Congress Ave",
		"Austin",
		PropertyType::Condo,
		520_000,
		"2024-05-02T00:00:00Z",
	)
	.await;

	insert_property(&db, "9 Pine Rd", "Dallas", PropertyType::SingleFamily, 410_000, "2024-06-01T00:00:00Z")
		.await;

	sqlx::query(
		"INSERT INTO property_photos (property_id, url, is_primary, display_order) VALUES ($1, 'a.jpg', true, 1)",
	)
	.bind(older)
	.execute(&db.pool)
	.await
	.expect("Failed to insert photo.");

	let filters = SearchFilters {
		city: Some("aus".to_string()),
		has_garage: Some(true),
		..SearchFilters::default()
	};
	let listed = properties::list_properties(&db.pool, &filters, 50).await.expect("List failed.");
	let ids: Vec<String> = listed.iter().map(|p| p.id.clone()).collect();

	assert_eq!(ids, vec![newer.to_string(), older.to_string()]);
	assert_eq!(listed[1].primary_photo().map(|photo| photo.url.as_str()), Some("a.jpg"));

	let capped = properties::list_properties(&db.pool, &SearchFilters::default(), 2)
		.await
		.expect("List failed.");

	assert_eq!(capped.len(), 2);

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to clean up test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set HEARTH_PG_DSN to run."]
async fn search_matches_zip_and_records_history() {
	let Some(base_dsn) = hearth_testkit::env_dsn() else {
		eprintln!(
			"Skipping search_matches_zip_and_records_history; set HEARTH_PG_DSN to run this test."
		);

		return;
	};
	let test_db = TestDatabase::new(&base_dsn).await.expect("Failed to create test database.");
	let db = bootstrap(&test_db).await;
	let id = insert_property(
		&db,
		"77 Ocean Dr",
		"Miami",
		PropertyType::Condo,
		1_250_000,
		"2024-02-01T00:00:00Z",
	)
	.await;

	let found = properties::search_properties(&db.pool, "MIAMI", 50).await.expect("Search failed.");

	assert_eq!(found.len(), 1);
	assert_eq!(found[0].id, id.to_string());

	properties::record_search(&db.pool, "MIAMI", "text").await.expect("Record failed.");

	let recorded: i64 = sqlx::query_scalar("SELECT count(*) FROM search_history WHERE query = 'MIAMI'")
		.fetch_one(&db.pool)
		.await
		.expect("Failed to count history.");

	assert_eq!(recorded, 1);
	assert!(
		properties::get_property(&db.pool, Uuid::new_v4()).await.expect("Lookup failed.").is_none()
	);
	assert!(properties::get_property(&db.pool, id).await.expect("Lookup failed.").is_some());

	db.pool.close().await;
	test_db.cleanup().await.expect("Failed to clean up test database.");
}
