use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::env as std_env;

lazy_static! {
    pub static ref DATABASE_URL: Option<Secret<String>> = get_db_url();
    pub static ref APP_ADDRESS: String =
        load_or_default(env::APP_ADDRESS_ENV_VAR, prod::APP_ADDRESS);
}

fn load_env() {
    dotenv().ok();
}

// An unset or empty DATABASE_URL selects the in-memory member store
fn get_db_url() -> Option<Secret<String>> {
    load_env();
    std_env::var(env::DATABASE_URL_ENV_VAR)
        .ok()
        .filter(|url| !url.is_empty())
        .map(Secret::new)
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
}

pub const MAX_DB_CONNECTIONS: u32 = 5;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
