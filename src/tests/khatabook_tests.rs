use actix_web::{test, web, App};
use bigdecimal::BigDecimal;
use chrono::Utc;
use serde_json::json;

use crate::{
	db::get_db_pool,
	handler::{KhatabookHandler, UserHandler},
	models::{ApiResponse, ContactWithTotals, KhataContact, KhataEntry, User},
	tests::test_utils::{generate_test_token, test_jwt_secret},
};

macro_rules! khatabook_test_app {
	($pool:expr) => {
		test::init_service(
			App::new()
				.app_data(web::Data::new($pool.clone()))
				.service(
					web::resource("/users/register")
						.route(web::post().to(UserHandler::register_handler)),
				)
				.service(
					web::resource("/api/v1/khatabook/add-contact")
						.route(web::post().to(KhatabookHandler::add_contact_handler)),
				)
				.service(
					web::resource("/api/v1/khatabook/get-contacts")
						.route(web::post().to(KhatabookHandler::get_contacts_handler)),
				)
				.service(
					web::resource("/api/v1/khatabook/delete-contact")
						.route(web::post().to(KhatabookHandler::delete_contact_handler)),
				)
				.service(
					web::resource("/api/v1/khatabook/add-entry")
						.route(web::post().to(KhatabookHandler::add_entry_handler)),
				)
				.service(
					web::resource("/api/v1/khatabook/get-entries")
						.route(web::post().to(KhatabookHandler::get_entries_handler)),
				)
				.service(
					web::resource("/api/v1/khatabook/delete-entry")
						.route(web::post().to(KhatabookHandler::delete_entry_handler)),
				),
		)
		.await
	};
}

macro_rules! register_test_user {
	($app:expr) => {{
		let email = format!("khata-{}@example.com", uuid::Uuid::new_v4());
		let resp = test::TestRequest::post()
			.uri("/users/register")
			.set_json(&json!({
				"name": "Khata User",
				"email": email,
				"password": "testpassword123"
			}))
			.send_request($app)
			.await;
		let body: ApiResponse<User> = test::read_body_json(resp).await;
		let user = body.data.expect("registered user");
		let token = generate_test_token(user.id);
		(user.id, token)
	}};
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_contact_balance_flow() {
	test_jwt_secret();
	let pool = get_db_pool();
	let app = khatabook_test_app!(pool);
	let (user_id, token) = register_test_user!(&app);

	let contact_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/add-contact")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "user_id": user_id, "name": "Ramesh", "phone": "9876543210" }))
		.send_request(&app)
		.await;
	assert_eq!(contact_resp.status().as_u16(), 201);
	let contact_body: ApiResponse<KhataContact> = test::read_body_json(contact_resp).await;
	let contact = contact_body.data.unwrap();

	for (entry_type, amount) in [("gave", 100), ("got", 150)] {
		let resp = test::TestRequest::post()
			.uri("/api/v1/khatabook/add-entry")
			.insert_header(("Authorization", format!("Bearer {}", token)))
			.set_json(&json!({
				"user_id": user_id,
				"contact_id": contact.id,
				"amount": amount,
				"type": entry_type,
				"date": Utc::now()
			}))
			.send_request(&app)
			.await;
		assert_eq!(resp.status().as_u16(), 201);
	}

	let contacts_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/get-contacts")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "user_id": user_id }))
		.send_request(&app)
		.await;
	let contacts_body: ApiResponse<Vec<ContactWithTotals>> =
		test::read_body_json(contacts_resp).await;
	let contacts = contacts_body.data.unwrap();
	assert_eq!(contacts.len(), 1);
	assert_eq!(contacts[0].total_gave, BigDecimal::from(100));
	assert_eq!(contacts[0].total_got, BigDecimal::from(150));
	assert_eq!(contacts[0].balance, BigDecimal::from(50));
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_delete_contact_cascades_entries() {
	test_jwt_secret();
	let pool = get_db_pool();
	let app = khatabook_test_app!(pool);
	let (user_id, token) = register_test_user!(&app);

	let contact_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/add-contact")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "user_id": user_id, "name": "Suresh" }))
		.send_request(&app)
		.await;
	let contact_body: ApiResponse<KhataContact> = test::read_body_json(contact_resp).await;
	let contact = contact_body.data.unwrap();

	let _ = test::TestRequest::post()
		.uri("/api/v1/khatabook/add-entry")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({
			"user_id": user_id,
			"contact_id": contact.id,
			"amount": 250,
			"type": "gave",
			"date": Utc::now()
		}))
		.send_request(&app)
		.await;

	let delete_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/delete-contact")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "contact_id": contact.id }))
		.send_request(&app)
		.await;
	assert!(delete_resp.status().is_success());

	// Aggregation returns no rows for the deleted contact
	let contacts_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/get-contacts")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "user_id": user_id }))
		.send_request(&app)
		.await;
	let contacts_body: ApiResponse<Vec<ContactWithTotals>> =
		test::read_body_json(contacts_resp).await;
	assert!(contacts_body.data.unwrap().is_empty());

	// And its entries are gone too
	let entries_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/get-entries")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "contact_id": contact.id }))
		.send_request(&app)
		.await;
	let entries_body: ApiResponse<Vec<KhataEntry>> = test::read_body_json(entries_resp).await;
	assert!(entries_body.data.unwrap().is_empty());
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_entry_against_unknown_contact_is_rejected() {
	test_jwt_secret();
	let pool = get_db_pool();
	let app = khatabook_test_app!(pool);
	let (user_id, token) = register_test_user!(&app);

	let resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/add-entry")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({
			"user_id": user_id,
			"contact_id": uuid::Uuid::new_v4(),
			"amount": 100,
			"type": "got",
			"date": Utc::now()
		}))
		.send_request(&app)
		.await;
	assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
#[ignore = "requires a running PostgreSQL (DATABASE_URL)"]
async fn test_entries_sorted_by_date_desc() {
	test_jwt_secret();
	let pool = get_db_pool();
	let app = khatabook_test_app!(pool);
	let (user_id, token) = register_test_user!(&app);

	let contact_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/add-contact")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "user_id": user_id, "name": "Mahesh" }))
		.send_request(&app)
		.await;
	let contact_body: ApiResponse<KhataContact> = test::read_body_json(contact_resp).await;
	let contact = contact_body.data.unwrap();

	let earlier = Utc::now() - chrono::Duration::days(3);
	let later = Utc::now();
	for (date, amount) in [(earlier, 10), (later, 20)] {
		let _ = test::TestRequest::post()
			.uri("/api/v1/khatabook/add-entry")
			.insert_header(("Authorization", format!("Bearer {}", token)))
			.set_json(&json!({
				"user_id": user_id,
				"contact_id": contact.id,
				"amount": amount,
				"type": "gave",
				"date": date
			}))
			.send_request(&app)
			.await;
	}

	let entries_resp = test::TestRequest::post()
		.uri("/api/v1/khatabook/get-entries")
		.insert_header(("Authorization", format!("Bearer {}", token)))
		.set_json(&json!({ "contact_id": contact.id }))
		.send_request(&app)
		.await;
	let entries_body: ApiResponse<Vec<KhataEntry>> = test::read_body_json(entries_resp).await;
	let entries = entries_body.data.unwrap();
	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0].amount, BigDecimal::from(20));
	assert_eq!(entries[1].amount, BigDecimal::from(10));
}
