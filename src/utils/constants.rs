/// Base URL of the PayVault REST API. Overridable at compile time through a
/// PAYVAULT_API_URL entry in .env (see build.rs).
pub const API_URL: &str = match option_env!("PAYVAULT_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000/api",
};

/// localStorage key holding the bearer token between reloads.
pub const TOKEN_KEY: &str = "payvault_token";
