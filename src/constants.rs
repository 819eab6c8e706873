pub const AUTHORIZATION: &str = "Authorization";
pub const EMPTY: &str = "";
pub const MESSAGE_INVALID_TOKEN: &str = "Invalid or missing token";
pub const ONE_WEEK: usize = 60 * 60 * 24 * 7; // in seconds

// Routes that skip bearer-token checks. Fuel estimates are stateless, so
// there is nothing to protect.
pub const IGNORE_ROUTES: [&str; 3] = ["/users/register", "/users/login", "/api/v1/fuel"];
