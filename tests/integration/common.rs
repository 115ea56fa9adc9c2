// Common utilities for integration tests against the live API

use cloudiq_client::prelude::*;

/// Creates a client from the environment / .env
pub fn create_test_client() -> Client {
    setup_logger();
    Client::new(Config::new()).expect("CLIENT_ID, CLIENT_SECRET, CLOUDIQ_USER and CLOUDIQ_PW must be set")
}

/// Organization used by the catalog tests
pub fn test_organization_id() -> i64 {
    get_env_or_default("CLOUDIQ_ORG_ID", 0)
}
