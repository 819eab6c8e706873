use bigdecimal::BigDecimal;
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Queryable, Selectable, Serialize, Deserialize, Default, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(Pg))]
pub struct User {
	pub id: i32,
	pub name: String,
	pub email: String,
	#[serde(skip_serializing, default)]
	pub password: String,
	pub profile_pic: Option<String>,
	pub currency: String,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Insertable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
	pub name: &'a str,
	pub email: &'a str,
	pub password: &'a str,
}

#[derive(Debug, Queryable, Insertable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(Pg))]
pub struct Transaction {
	pub id: uuid::Uuid,
	pub user_id: i32,
	pub amount: BigDecimal,
	#[serde(rename = "type")]
	pub transaction_type: String,
	pub category: String,
	pub date: chrono::DateTime<chrono::Utc>,
	pub description: String,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Queryable, Insertable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::khata_contacts)]
#[diesel(check_for_backend(Pg))]
pub struct KhataContact {
	pub id: uuid::Uuid,
	pub user_id: i32,
	pub name: String,
	pub phone: String,
	pub notes: String,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Debug, Queryable, Insertable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::khata_entries)]
#[diesel(check_for_backend(Pg))]
pub struct KhataEntry {
	pub id: uuid::Uuid,
	pub user_id: i32,
	pub contact_id: uuid::Uuid,
	pub amount: BigDecimal,
	#[serde(rename = "type")]
	pub entry_type: String,
	pub description: String,
	pub date: chrono::DateTime<chrono::Utc>,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// A contact row augmented with the totals derived from its ledger entries.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactWithTotals {
	#[serde(flatten)]
	pub contact: KhataContact,
	pub total_gave: BigDecimal,
	pub total_got: BigDecimal,
	pub balance: BigDecimal,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
	#[validate(length(min = 1, max = 100))]
	pub name: String,
	#[validate(email)]
	pub email: String,
	#[validate(length(min = 8))]
	pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
	pub email: String,
	pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResp {
	pub token: String,
	pub user: User,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct ProfileFields {
	#[validate(length(min = 1, max = 100))]
	pub name: Option<String>,
	#[validate(email)]
	pub email: Option<String>,
	pub profile_pic: Option<String>,
	pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
	pub user_id: i32,
	#[validate(nested)]
	pub update_data: ProfileFields,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct AddTransactionRequest {
	pub user_id: i32,
	pub amount: BigDecimal,
	#[serde(rename = "type")]
	pub transaction_type: String,
	#[validate(length(min = 1, max = 100))]
	pub category: String,
	pub date: chrono::DateTime<chrono::Utc>,
	#[serde(default)]
	pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct ListTransactionsRequest {
	pub user_id: i32,
	pub frequency: String,
	#[serde(default)]
	pub selected_dates: Option<Vec<chrono::DateTime<chrono::Utc>>>,
	#[serde(rename = "type")]
	pub transaction_type: String,
}

/// Partial overwrite for an existing transaction. `None` fields are left untouched.
#[derive(AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::transactions)]
pub struct TransactionPayload {
	pub amount: Option<BigDecimal>,
	#[serde(rename = "type")]
	pub transaction_type: Option<String>,
	pub category: Option<String>,
	pub date: Option<chrono::DateTime<chrono::Utc>>,
	pub description: Option<String>,
}

impl TransactionPayload {
	pub fn is_empty(&self) -> bool {
		self.amount.is_none()
			&& self.transaction_type.is_none()
			&& self.category.is_none()
			&& self.date.is_none()
			&& self.description.is_none()
	}
}

#[derive(Serialize, Deserialize)]
pub struct EditTransactionRequest {
	pub transaction_id: uuid::Uuid,
	pub payload: TransactionPayload,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteTransactionRequest {
	pub transaction_id: uuid::Uuid,
}

#[derive(Serialize, Deserialize, Validate)]
pub struct AddContactRequest {
	pub user_id: i32,
	#[validate(length(min = 1, max = 100))]
	pub name: String,
	#[serde(default)]
	pub phone: String,
	#[serde(default)]
	pub notes: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetContactsRequest {
	pub user_id: i32,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteContactRequest {
	pub contact_id: uuid::Uuid,
}

#[derive(Serialize, Deserialize)]
pub struct AddEntryRequest {
	pub user_id: i32,
	pub contact_id: uuid::Uuid,
	pub amount: BigDecimal,
	#[serde(rename = "type")]
	pub entry_type: String,
	#[serde(default)]
	pub description: String,
	pub date: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct GetEntriesRequest {
	pub contact_id: uuid::Uuid,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteEntryRequest {
	pub entry_id: uuid::Uuid,
}

#[derive(Serialize)]
pub struct ErrorResponse {
	pub error: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
	pub status: String,
	pub data: Option<T>,
	pub error: Option<String>,
}

impl<T> ApiResponse<T> {
	pub fn ok(data: T) -> Self {
		Self { status: "success".to_string(), data: Some(data), error: None }
	}

	pub fn err(message: &str) -> Self {
		Self { status: "error".to_string(), data: None, error: Some(message.to_string()) }
	}
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub enum TransactionType {
	Income,
	Expense,
}

impl TransactionType {
	pub fn as_str(&self) -> &str {
		match self {
			TransactionType::Income => "income",
			TransactionType::Expense => "expense",
		}
	}
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub enum EntryType {
	Gave,
	Got,
}

impl EntryType {
	pub fn as_str(&self) -> &str {
		match self {
			EntryType::Gave => "gave",
			EntryType::Got => "got",
		}
	}
}

/// Display label only; no conversion logic anywhere.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub enum Currency {
	Inr,
	Usd,
	Eur,
}

impl Currency {
	pub fn parse(label: &str) -> Option<Self> {
		match label {
			"INR" => Some(Currency::Inr),
			"USD" => Some(Currency::Usd),
			"EUR" => Some(Currency::Eur),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Currency::Inr => "INR",
			Currency::Usd => "USD",
			Currency::Eur => "EUR",
		}
	}
}
