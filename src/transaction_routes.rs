use crate::handler::TransactionHandler;
use actix_web::web;

// Query operations ride on POST as well; the request body carries the filter.
pub fn init(cfg: &mut web::ServiceConfig) {
	cfg.route(
		"/api/v1/transaction/add-transaction",
		web::post().to(TransactionHandler::add_transaction_handler),
	)
	.route(
		"/api/v1/transaction/get-transactions",
		web::post().to(TransactionHandler::get_transactions_handler),
	)
	.route(
		"/api/v1/transaction/get-analytics",
		web::post().to(TransactionHandler::get_analytics_handler),
	)
	.route(
		"/api/v1/transaction/edit-transaction",
		web::post().to(TransactionHandler::edit_transaction_handler),
	)
	.route(
		"/api/v1/transaction/delete-transaction",
		web::post().to(TransactionHandler::delete_transaction_handler),
	);
}
