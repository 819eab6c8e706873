use crate::handler::UserHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg
		// user mgmt routes
		.route("/users/register", web::post().to(UserHandler::register_handler))
		.route("/users/login", web::post().to(UserHandler::login_handler))
		.route("/users/update-profile", web::post().to(UserHandler::update_profile_handler));
}
