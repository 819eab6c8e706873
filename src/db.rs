use diesel::{
	prelude::*,
	r2d2::{self, ConnectionManager},
};
use dotenv::dotenv;
use std::env;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn get_db_pool() -> DbPool {
	dotenv().ok();
	let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
	let manager = ConnectionManager::<PgConnection>::new(database_url);
	r2d2::Pool::builder().build(manager).expect("Failed to create pool.")
}

pub async fn init(pool: &DbPool) -> Result<(), diesel::result::Error> {
	let mut conn = pool.get().expect("can not get the pool address");
	diesel::sql_query(
		"CREATE TABLE IF NOT EXISTS users (
			id SERIAL PRIMARY KEY,
			name VARCHAR(100) NOT NULL,
			email VARCHAR(255) NOT NULL UNIQUE,
			password TEXT NOT NULL,
			profile_pic TEXT,
			currency VARCHAR(3) NOT NULL DEFAULT 'INR',
			created_at TIMESTAMPTZ DEFAULT now()
		);",
	)
	.execute(&mut conn)?;
	diesel::sql_query(
		"CREATE TABLE IF NOT EXISTS transactions (
			id UUID PRIMARY KEY,
			user_id INTEGER NOT NULL REFERENCES users(id),
			amount NUMERIC NOT NULL,
			transaction_type VARCHAR(10) NOT NULL,
			category VARCHAR(100) NOT NULL,
			date TIMESTAMPTZ NOT NULL,
			description TEXT NOT NULL DEFAULT '',
			created_at TIMESTAMPTZ DEFAULT now()
		);",
	)
	.execute(&mut conn)?;
	diesel::sql_query(
		"CREATE TABLE IF NOT EXISTS khata_contacts (
			id UUID PRIMARY KEY,
			user_id INTEGER NOT NULL REFERENCES users(id),
			name VARCHAR(100) NOT NULL,
			phone VARCHAR(20) NOT NULL DEFAULT '',
			notes TEXT NOT NULL DEFAULT '',
			created_at TIMESTAMPTZ DEFAULT now()
		);",
	)
	.execute(&mut conn)?;
	diesel::sql_query(
		"CREATE TABLE IF NOT EXISTS khata_entries (
			id UUID PRIMARY KEY,
			user_id INTEGER NOT NULL,
			contact_id UUID NOT NULL REFERENCES khata_contacts(id),
			amount NUMERIC NOT NULL,
			entry_type VARCHAR(10) NOT NULL,
			description TEXT NOT NULL DEFAULT '',
			date TIMESTAMPTZ NOT NULL,
			created_at TIMESTAMPTZ DEFAULT now()
		);",
	)
	.execute(&mut conn)?;

	Ok(())
}
