use crate::handler::FuelHandler;
use actix_web::web;

pub fn init(cfg: &mut web::ServiceConfig) {
	cfg.route("/api/v1/fuel/estimate", web::post().to(FuelHandler::estimate_handler));
}
