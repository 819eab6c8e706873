use crate::handler::KhatabookHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// contacts
		.route(
			"/api/v1/khatabook/add-contact",
			web::post().to(KhatabookHandler::add_contact_handler),
		)
		.route(
			"/api/v1/khatabook/get-contacts",
			web::post().to(KhatabookHandler::get_contacts_handler),
		)
		.route(
			"/api/v1/khatabook/delete-contact",
			web::post().to(KhatabookHandler::delete_contact_handler),
		)
		// entries
		.route("/api/v1/khatabook/add-entry", web::post().to(KhatabookHandler::add_entry_handler))
		.route(
			"/api/v1/khatabook/get-entries",
			web::post().to(KhatabookHandler::get_entries_handler),
		)
		.route(
			"/api/v1/khatabook/delete-entry",
			web::post().to(KhatabookHandler::delete_entry_handler),
		);
}
