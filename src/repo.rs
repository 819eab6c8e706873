use crate::{
	ledger,
	midware::jwt::Claims,
	models::{ContactWithTotals, ErrorResponse, KhataContact, KhataEntry},
	schema::{khata_contacts, khata_entries},
};
use actix_web::{HttpRequest, HttpResponse};
use diesel::prelude::*;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

pub struct KhataRepo;

impl KhataRepo {
	/// Loads the user's contacts (newest first) together with the totals
	/// derived from a snapshot of all their entries.
	pub fn contacts_with_totals(
		conn: &mut PgConnection,
		user_id: i32,
	) -> Result<Vec<ContactWithTotals>, diesel::result::Error> {
		let contacts = khata_contacts::dsl::khata_contacts
			.filter(khata_contacts::dsl::user_id.eq(user_id))
			.order(khata_contacts::dsl::created_at.desc())
			.load::<KhataContact>(conn)?;
		let entries = khata_entries::dsl::khata_entries
			.filter(khata_entries::dsl::user_id.eq(user_id))
			.load::<KhataEntry>(conn)?;
		Ok(ledger::contacts_with_totals(contacts, &entries))
	}

	/// Deletes a contact and every entry that references it. Entries go
	/// first, and both deletes run inside one database transaction so a
	/// crash can not leave orphaned entries behind.
	pub fn delete_contact_cascade(
		conn: &mut PgConnection,
		contact_id: Uuid,
		user_id: i32,
	) -> Result<usize, diesel::result::Error> {
		conn.transaction::<_, diesel::result::Error, _>(|conn| {
			diesel::delete(
				khata_entries::dsl::khata_entries
					.filter(khata_entries::dsl::contact_id.eq(contact_id))
					.filter(khata_entries::dsl::user_id.eq(user_id)),
			)
			.execute(conn)?;
			let deleted = diesel::delete(
				khata_contacts::dsl::khata_contacts
					.filter(khata_contacts::dsl::id.eq(contact_id))
					.filter(khata_contacts::dsl::user_id.eq(user_id)),
			)
			.execute(conn)?;
			if deleted == 0 {
				// Rolls back the entry delete too.
				return Err(diesel::result::Error::NotFound);
			}
			Ok(deleted)
		})
	}

	/// Entries for one contact, most recent date first, creation time as the
	/// tie breaker.
	pub fn entries_for_contact(
		conn: &mut PgConnection,
		contact_id: Uuid,
		user_id: i32,
	) -> Result<Vec<KhataEntry>, diesel::result::Error> {
		khata_entries::dsl::khata_entries
			.filter(khata_entries::dsl::contact_id.eq(contact_id))
			.filter(khata_entries::dsl::user_id.eq(user_id))
			.order((khata_entries::dsl::date.desc(), khata_entries::dsl::created_at.desc()))
			.load::<KhataEntry>(conn)
	}
}

pub async fn authenticate(req: &HttpRequest) -> Result<String, HttpResponse> {
	let auth_header = req
		.headers()
		.get("Authorization")
		.and_then(|h| h.to_str().ok())
		.and_then(|h| h.strip_prefix("Bearer "))
		.ok_or_else(|| {
			HttpResponse::Unauthorized()
				.json(ErrorResponse { error: "Missing or invalid token".to_string() })
		})?;

	let jwt_secret = std::env::var("JWT_SECRET").expect("JWT_SECRET not found in .env");
	let claims = decode::<Claims>(
		auth_header,
		&DecodingKey::from_secret(jwt_secret.as_bytes()),
		&Validation::new(Algorithm::HS256),
	)
	.map_err(|e| {
		log::error!("Token validation error: {:?}", e);
		HttpResponse::Unauthorized().json(ErrorResponse { error: "Invalid token".to_string() })
	})?;

	Ok(claims.claims.sub) // Return the user ID from claims
}
