use crate::{
	analytics,
	db::DbPool,
	filter::DateWindow,
	fuel::{self, FuelEstimate, FuelEstimateRequest},
	midware::jwt::JWT,
	models::{
		AddContactRequest, AddEntryRequest, AddTransactionRequest, ApiResponse,
		ContactWithTotals, Currency, DeleteContactRequest, DeleteEntryRequest,
		DeleteTransactionRequest, EditTransactionRequest, EntryType, GetContactsRequest,
		GetEntriesRequest, KhataContact, KhataEntry, ListTransactionsRequest, LoginRequest,
		LoginResp, NewUser, ProfileUpdateRequest, RegisterRequest, Transaction, TransactionType,
		User,
	},
	repo::{authenticate, KhataRepo},
	schema::{khata_contacts, khata_entries, transactions, users},
};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use bcrypt::{hash, verify, DEFAULT_COST};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
pub struct UserHandler {}

impl UserHandler {
	pub async fn register_handler(
		pool: web::Data<DbPool>,
		req: web::Json<RegisterRequest>,
	) -> impl Responder {
		if let Err(e) = req.validate() {
			log::error!("Registration validation error: {:?}", e);
			return HttpResponse::BadRequest().json(ApiResponse::<User>::err(&e.to_string()));
		}

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<User>::err("Database error"));
			},
		};

		let email = req.email.trim().to_lowercase();
		log::info!("Registering new account for email: {}", email);

		let existing = users::dsl::users
			.filter(users::dsl::email.eq(&email))
			.select(users::dsl::id)
			.first::<i32>(&mut conn)
			.optional();
		match existing {
			Ok(Some(_)) => {
				log::warn!("Registration conflict, email already taken: {}", email);
				return HttpResponse::Conflict().json(ApiResponse::<User>::err(
					"An account with this email already exists. Please sign in.",
				));
			},
			Ok(None) => {},
			Err(e) => {
				log::error!("Registration lookup error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<User>::err("Database error"));
			},
		}

		let hashed_password = match hash(req.password.as_bytes(), DEFAULT_COST) {
			Ok(hash) => hash,
			Err(e) => {
				log::error!("Password hashing failed for email {}: {}", email, e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<User>::err("Failed to hash password"));
			},
		};

		let new_user =
			NewUser { name: req.name.trim(), email: &email, password: &hashed_password };
		let user = diesel::insert_into(users::dsl::users)
			.values(&new_user)
			.returning(User::as_returning())
			.get_result::<User>(&mut conn);

		match user {
			Ok(user) => {
				log::info!("Registered user {} ({})", user.id, user.email);
				HttpResponse::Created().json(ApiResponse::ok(user))
			},
			// The unique index is the authority; the pre-check can race
			Err(diesel::result::Error::DatabaseError(
				diesel::result::DatabaseErrorKind::UniqueViolation,
				_,
			)) => {
				log::warn!("Registration conflict, email already taken: {}", email);
				HttpResponse::Conflict().json(ApiResponse::<User>::err(
					"An account with this email already exists. Please sign in.",
				))
			},
			Err(e) => {
				log::error!("User insert error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<User>::err("Failed to register user"))
			},
		}
	}

	pub async fn login_handler(
		pool: web::Data<DbPool>,
		req: web::Json<LoginRequest>,
	) -> impl Responder {
		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<LoginResp>::err("Database error"));
			},
		};

		let email = req.email.trim().to_lowercase();
		let user = users::dsl::users
			.filter(users::dsl::email.eq(&email))
			.select(User::as_select())
			.first::<User>(&mut conn)
			.optional();

		let user = match user {
			Ok(Some(user)) => user,
			Ok(None) => {
				log::warn!("Login failed, no account for email: {}", email);
				return HttpResponse::NotFound().json(ApiResponse::<LoginResp>::err(
					"User not found. Check your email and password.",
				));
			},
			Err(e) => {
				log::error!("Login lookup error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<LoginResp>::err("Database error"));
			},
		};

		match verify(req.password.as_bytes(), &user.password) {
			Ok(true) => {},
			Ok(false) => {
				log::warn!("Login failed, wrong password for user: {}", user.id);
				return HttpResponse::NotFound().json(ApiResponse::<LoginResp>::err(
					"User not found. Check your email and password.",
				));
			},
			Err(e) => {
				log::error!("Password verification error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<LoginResp>::err("Failed to verify password"));
			},
		}

		let jwt_secret =
			std::env::var("JWT_SECRET").expect("JWT_SECRET can not be found in .env");
		match JWT::new(&jwt_secret).create_jwt(user.id.to_string()) {
			Ok(token) => {
				log::info!("Login successful for user ID: {}", user.id);
				HttpResponse::Ok().json(ApiResponse::ok(LoginResp { token, user }))
			},
			Err(e) => {
				log::error!("JWT creation error: {:?}", e);
				HttpResponse::InternalServerError().json(ApiResponse::<LoginResp>::err(
					"Failed to create authentication token",
				))
			},
		}
	}

	pub async fn update_profile_handler(
		pool: web::Data<DbPool>,
		req: web::Json<ProfileUpdateRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);
		if user_id != req.user_id {
			log::error!("User ID mismatch: {} != {}", user_id, req.user_id);
			return HttpResponse::Forbidden().json(ApiResponse::<User>::err("User ID mismatch"));
		}

		if let Err(e) = req.validate() {
			log::error!("Profile validation error: {:?}", e);
			return HttpResponse::BadRequest().json(ApiResponse::<User>::err(&e.to_string()));
		}
		let update = &req.update_data;
		if let Some(currency) = update.currency.as_deref() {
			if Currency::parse(currency).is_none() {
				log::error!("Unknown currency label: {}", currency);
				return HttpResponse::BadRequest()
					.json(ApiResponse::<User>::err("Currency must be one of INR, USD, EUR"));
			}
		}
		if update.name.is_none()
			&& update.email.is_none()
			&& update.profile_pic.is_none()
			&& update.currency.is_none()
		{
			return HttpResponse::BadRequest()
				.json(ApiResponse::<User>::err("No fields to update"));
		}

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<User>::err("Database error"));
			},
		};

		let email = update.email.as_ref().map(|e| e.trim().to_lowercase());
		let user = diesel::update(users::dsl::users.filter(users::dsl::id.eq(&user_id)))
			.set((
				update.name.as_ref().map(|n| users::dsl::name.eq(n)),
				email.as_ref().map(|e| users::dsl::email.eq(e)),
				update.profile_pic.as_ref().map(|p| users::dsl::profile_pic.eq(p)),
				update.currency.as_ref().map(|c| users::dsl::currency.eq(c)),
			))
			.returning(User::as_returning())
			.get_result::<User>(&mut conn);

		match user {
			Ok(user) => {
				log::info!("Profile updated successfully for user: {}", user_id);
				HttpResponse::Ok().json(ApiResponse::ok(user))
			},
			Err(diesel::result::Error::NotFound) => {
				HttpResponse::NotFound().json(ApiResponse::<User>::err("User not found"))
			},
			Err(diesel::result::Error::DatabaseError(
				diesel::result::DatabaseErrorKind::UniqueViolation,
				_,
			)) => {
				log::warn!("Profile update conflict for user: {}", user_id);
				HttpResponse::Conflict().json(ApiResponse::<User>::err(
					"An account with this email already exists.",
				))
			},
			Err(e) => {
				log::error!("Profile update error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<User>::err("Failed to update profile"))
			},
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionHandler {}

impl TransactionHandler {
	pub async fn add_transaction_handler(
		pool: web::Data<DbPool>,
		req: web::Json<AddTransactionRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);
		if user_id != req.user_id {
			log::error!("User ID mismatch: {} != {}", user_id, req.user_id);
			return HttpResponse::Forbidden()
				.json(ApiResponse::<Transaction>::err("User ID mismatch"));
		}

		if let Err(e) = req.validate() {
			log::error!("Transaction validation error: {:?}", e);
			return HttpResponse::BadRequest()
				.json(ApiResponse::<Transaction>::err(&e.to_string()));
		}
		if req.amount <= BigDecimal::from(0) {
			log::error!("Invalid transaction amount: {}", req.amount);
			return HttpResponse::BadRequest()
				.json(ApiResponse::<Transaction>::err("Invalid transaction amount"));
		}
		if req.transaction_type != TransactionType::Income.as_str()
			&& req.transaction_type != TransactionType::Expense.as_str()
		{
			log::error!("Invalid transaction type: {}", req.transaction_type);
			return HttpResponse::BadRequest()
				.json(ApiResponse::<Transaction>::err("Invalid transaction type"));
		}

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<Transaction>::err("Database error"));
			},
		};

		let transaction_id = uuid::Uuid::new_v4();
		log::info!("Generated transaction ID: {} for user: {}", transaction_id, user_id);

		let new_transaction = Transaction {
			id: transaction_id,
			user_id: req.user_id,
			amount: req.amount.clone(),
			transaction_type: req.transaction_type.clone(),
			category: req.category.clone(),
			date: req.date,
			description: req.description.clone(),
			created_at: Some(chrono::Utc::now()),
		};

		let transaction = diesel::insert_into(transactions::table)
			.values(&new_transaction)
			.get_result::<Transaction>(&mut conn);

		match transaction {
			Ok(transaction) => {
				log::info!("Transaction created successfully for user: {}", user_id);
				HttpResponse::Created().json(ApiResponse::ok(transaction))
			},
			Err(e) => {
				log::error!("Transaction creation error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<Transaction>::err("Failed to create transaction"))
			},
		}
	}

	pub async fn get_transactions_handler(
		pool: web::Data<DbPool>,
		req: web::Json<ListTransactionsRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let req = req.into_inner();
		match Self::load_filtered(&pool, &req, &http_req).await {
			Ok(transactions) => {
				log::info!(
					"Retrieved {} transactions for user: {}",
					transactions.len(),
					req.user_id
				);
				HttpResponse::Ok().json(ApiResponse::ok(transactions))
			},
			Err(resp) => resp,
		}
	}

	pub async fn get_analytics_handler(
		pool: web::Data<DbPool>,
		req: web::Json<ListTransactionsRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let req = req.into_inner();
		match Self::load_filtered(&pool, &req, &http_req).await {
			Ok(transactions) => {
				let summary = analytics::summarize(&transactions);
				HttpResponse::Ok().json(ApiResponse::ok(summary))
			},
			Err(resp) => resp,
		}
	}

	// Shared by the listing and analytics endpoints: resolve the date window,
	// apply it plus the type filter, return the matching snapshot.
	async fn load_filtered(
		pool: &web::Data<DbPool>,
		req: &ListTransactionsRequest,
		http_req: &HttpRequest,
	) -> Result<Vec<Transaction>, HttpResponse> {
		let user_id = authenticate(http_req).await?.parse::<i32>().unwrap_or(0);
		if user_id != req.user_id {
			log::error!("User ID mismatch: {} != {}", user_id, req.user_id);
			return Err(HttpResponse::Forbidden()
				.json(ApiResponse::<Vec<Transaction>>::err("User ID mismatch")));
		}

		let mut conn = pool.get().map_err(|e| {
			log::error!("DB connection error: {:?}", e);
			HttpResponse::InternalServerError()
				.json(ApiResponse::<Vec<Transaction>>::err("Database error"))
		})?;

		let window = DateWindow::resolve(
			&req.frequency,
			req.selected_dates.as_deref(),
			chrono::Utc::now(),
		);
		let mut query = transactions::dsl::transactions
			.filter(transactions::dsl::user_id.eq(user_id))
			.into_boxed();
		match window {
			DateWindow::All => {},
			DateWindow::After(cutoff) => {
				query = query.filter(transactions::dsl::date.gt(cutoff));
			},
			DateWindow::Between(from, to) => {
				query = query
					.filter(transactions::dsl::date.ge(from))
					.filter(transactions::dsl::date.le(to));
			},
		}
		if req.transaction_type != "all" {
			query =
				query.filter(transactions::dsl::transaction_type.eq(&req.transaction_type));
		}

		query.load::<Transaction>(&mut conn).map_err(|e| {
			log::error!("Failed to list transactions for user {}: {:?}", user_id, e);
			HttpResponse::InternalServerError()
				.json(ApiResponse::<Vec<Transaction>>::err("Failed to list transactions"))
		})
	}

	pub async fn edit_transaction_handler(
		pool: web::Data<DbPool>,
		req: web::Json<EditTransactionRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);

		if req.payload.is_empty() {
			return HttpResponse::BadRequest()
				.json(ApiResponse::<String>::err("No fields to update"));
		}
		if let Some(transaction_type) = req.payload.transaction_type.as_deref() {
			if transaction_type != TransactionType::Income.as_str()
				&& transaction_type != TransactionType::Expense.as_str()
			{
				log::error!("Invalid transaction type: {}", transaction_type);
				return HttpResponse::BadRequest()
					.json(ApiResponse::<String>::err("Invalid transaction type"));
			}
		}
		if let Some(amount) = req.payload.amount.as_ref() {
			if *amount <= BigDecimal::from(0) {
				log::error!("Invalid transaction amount: {}", amount);
				return HttpResponse::BadRequest()
					.json(ApiResponse::<String>::err("Invalid transaction amount"));
			}
		}

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Database error"));
			},
		};

		let updated = diesel::update(
			transactions::dsl::transactions
				.filter(transactions::dsl::id.eq(req.transaction_id))
				.filter(transactions::dsl::user_id.eq(user_id)),
		)
		.set(&req.payload)
		.execute(&mut conn);

		match updated {
			Ok(0) => HttpResponse::NotFound()
				.json(ApiResponse::<String>::err("Transaction not found")),
			Ok(_) => {
				log::info!("Transaction {} updated for user: {}", req.transaction_id, user_id);
				HttpResponse::Ok().json(ApiResponse::ok("Transaction updated".to_string()))
			},
			Err(e) => {
				log::error!("Transaction update error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Failed to update transaction"))
			},
		}
	}

	pub async fn delete_transaction_handler(
		pool: web::Data<DbPool>,
		req: web::Json<DeleteTransactionRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Database error"));
			},
		};

		let deleted = diesel::delete(
			transactions::dsl::transactions
				.filter(transactions::dsl::id.eq(req.transaction_id))
				.filter(transactions::dsl::user_id.eq(user_id)),
		)
		.execute(&mut conn);

		match deleted {
			Ok(0) => HttpResponse::NotFound()
				.json(ApiResponse::<String>::err("Transaction not found")),
			Ok(_) => {
				log::info!("Transaction {} deleted for user: {}", req.transaction_id, user_id);
				HttpResponse::Ok().json(ApiResponse::ok("Transaction deleted".to_string()))
			},
			Err(e) => {
				log::error!("Transaction delete error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Failed to delete transaction"))
			},
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KhatabookHandler {}

impl KhatabookHandler {
	pub async fn add_contact_handler(
		pool: web::Data<DbPool>,
		req: web::Json<AddContactRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);
		if user_id != req.user_id {
			log::error!("User ID mismatch: {} != {}", user_id, req.user_id);
			return HttpResponse::Forbidden()
				.json(ApiResponse::<KhataContact>::err("User ID mismatch"));
		}
		if let Err(e) = req.validate() {
			log::error!("Contact validation error: {:?}", e);
			return HttpResponse::BadRequest()
				.json(ApiResponse::<KhataContact>::err(&e.to_string()));
		}

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<KhataContact>::err("Database error"));
			},
		};

		let new_contact = KhataContact {
			id: uuid::Uuid::new_v4(),
			user_id: req.user_id,
			name: req.name.clone(),
			phone: req.phone.clone(),
			notes: req.notes.clone(),
			created_at: Some(chrono::Utc::now()),
		};

		let contact = diesel::insert_into(khata_contacts::table)
			.values(&new_contact)
			.get_result::<KhataContact>(&mut conn);

		match contact {
			Ok(contact) => {
				log::info!("Contact {} created for user: {}", contact.id, user_id);
				HttpResponse::Created().json(ApiResponse::ok(contact))
			},
			Err(e) => {
				log::error!("Contact creation error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<KhataContact>::err("Failed to add contact"))
			},
		}
	}

	pub async fn get_contacts_handler(
		pool: web::Data<DbPool>,
		req: web::Json<GetContactsRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);
		if user_id != req.user_id {
			log::error!("User ID mismatch: {} != {}", user_id, req.user_id);
			return HttpResponse::Forbidden()
				.json(ApiResponse::<Vec<ContactWithTotals>>::err("User ID mismatch"));
		}

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<Vec<ContactWithTotals>>::err("Database error"));
			},
		};

		match KhataRepo::contacts_with_totals(&mut conn, user_id) {
			Ok(contacts) => {
				log::info!("Retrieved {} contacts for user: {}", contacts.len(), user_id);
				HttpResponse::Ok().json(ApiResponse::ok(contacts))
			},
			Err(e) => {
				log::error!("Failed to get contacts for user {}: {:?}", user_id, e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<Vec<ContactWithTotals>>::err("Failed to get contacts"))
			},
		}
	}

	pub async fn delete_contact_handler(
		pool: web::Data<DbPool>,
		req: web::Json<DeleteContactRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Database error"));
			},
		};

		match KhataRepo::delete_contact_cascade(&mut conn, req.contact_id, user_id) {
			Ok(_) => {
				log::info!("Contact {} deleted for user: {}", req.contact_id, user_id);
				HttpResponse::Ok().json(ApiResponse::ok("Contact deleted".to_string()))
			},
			Err(diesel::result::Error::NotFound) => {
				HttpResponse::NotFound().json(ApiResponse::<String>::err("Contact not found"))
			},
			Err(e) => {
				log::error!("Contact delete error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Failed to delete contact"))
			},
		}
	}

	pub async fn add_entry_handler(
		pool: web::Data<DbPool>,
		req: web::Json<AddEntryRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);
		if user_id != req.user_id {
			log::error!("User ID mismatch: {} != {}", user_id, req.user_id);
			return HttpResponse::Forbidden()
				.json(ApiResponse::<KhataEntry>::err("User ID mismatch"));
		}
		if req.entry_type != EntryType::Gave.as_str()
			&& req.entry_type != EntryType::Got.as_str()
		{
			log::error!("Invalid entry type: {}", req.entry_type);
			return HttpResponse::BadRequest()
				.json(ApiResponse::<KhataEntry>::err("Entry type must be gave or got"));
		}
		if req.amount < BigDecimal::from(0) {
			log::error!("Invalid entry amount: {}", req.amount);
			return HttpResponse::BadRequest()
				.json(ApiResponse::<KhataEntry>::err("Invalid entry amount"));
		}

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<KhataEntry>::err("Database error"));
			},
		};

		// Entries against a contact that does not exist would never surface
		// in the aggregation, so reject them here.
		let contact = khata_contacts::dsl::khata_contacts
			.filter(khata_contacts::dsl::id.eq(req.contact_id))
			.filter(khata_contacts::dsl::user_id.eq(user_id))
			.select(khata_contacts::dsl::id)
			.first::<uuid::Uuid>(&mut conn)
			.optional();
		match contact {
			Ok(Some(_)) => {},
			Ok(None) => {
				log::warn!("Entry rejected, unknown contact: {}", req.contact_id);
				return HttpResponse::NotFound()
					.json(ApiResponse::<KhataEntry>::err("Contact not found"));
			},
			Err(e) => {
				log::error!("Contact lookup error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<KhataEntry>::err("Database error"));
			},
		}

		let new_entry = KhataEntry {
			id: uuid::Uuid::new_v4(),
			user_id: req.user_id,
			contact_id: req.contact_id,
			amount: req.amount.clone(),
			entry_type: req.entry_type.clone(),
			description: req.description.clone(),
			date: req.date,
			created_at: Some(chrono::Utc::now()),
		};

		let entry = diesel::insert_into(khata_entries::table)
			.values(&new_entry)
			.get_result::<KhataEntry>(&mut conn);

		match entry {
			Ok(entry) => {
				log::info!("Entry {} added for contact: {}", entry.id, entry.contact_id);
				HttpResponse::Created().json(ApiResponse::ok(entry))
			},
			Err(e) => {
				log::error!("Entry creation error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<KhataEntry>::err("Failed to add entry"))
			},
		}
	}

	pub async fn get_entries_handler(
		pool: web::Data<DbPool>,
		req: web::Json<GetEntriesRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<Vec<KhataEntry>>::err("Database error"));
			},
		};

		match KhataRepo::entries_for_contact(&mut conn, req.contact_id, user_id) {
			Ok(entries) => {
				log::info!(
					"Retrieved {} entries for contact: {}",
					entries.len(),
					req.contact_id
				);
				HttpResponse::Ok().json(ApiResponse::ok(entries))
			},
			Err(e) => {
				log::error!("Failed to get entries for contact {}: {:?}", req.contact_id, e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<Vec<KhataEntry>>::err("Failed to get entries"))
			},
		}
	}

	pub async fn delete_entry_handler(
		pool: web::Data<DbPool>,
		req: web::Json<DeleteEntryRequest>,
		http_req: HttpRequest,
	) -> impl Responder {
		let user_id = match authenticate(&http_req).await {
			Ok(id) => id,
			Err(resp) => return resp,
		}
		.parse::<i32>()
		.unwrap_or(0);

		let mut conn = match pool.get() {
			Ok(conn) => conn,
			Err(e) => {
				log::error!("DB connection error: {:?}", e);
				return HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Database error"));
			},
		};

		let deleted = diesel::delete(
			khata_entries::dsl::khata_entries
				.filter(khata_entries::dsl::id.eq(req.entry_id))
				.filter(khata_entries::dsl::user_id.eq(user_id)),
		)
		.execute(&mut conn);

		match deleted {
			Ok(0) => {
				HttpResponse::NotFound().json(ApiResponse::<String>::err("Entry not found"))
			},
			Ok(_) => {
				log::info!("Entry {} deleted for user: {}", req.entry_id, user_id);
				HttpResponse::Ok().json(ApiResponse::ok("Entry deleted".to_string()))
			},
			Err(e) => {
				log::error!("Entry delete error: {:?}", e);
				HttpResponse::InternalServerError()
					.json(ApiResponse::<String>::err("Failed to delete entry"))
			},
		}
	}
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FuelHandler {}

impl FuelHandler {
	pub async fn estimate_handler(req: web::Json<FuelEstimateRequest>) -> impl Responder {
		match fuel::estimate(&req) {
			Ok(estimate) => HttpResponse::Ok().json(ApiResponse::ok(estimate)),
			Err(message) => {
				log::warn!("Fuel estimate rejected: {}", message);
				HttpResponse::BadRequest().json(ApiResponse::<FuelEstimate>::err(&message))
			},
		}
	}
}
