use crate::{
    config::KeyAuthConfig,
    error::{api::ApiError, config::ConfigError},
    model::api::ApiInfo,
    service::keyauth::{operation::Operation, KeyAuthClient, LicenseApi, USER_AGENT},
};
use test_utils::{
    builder::TestBuilder, context::TestContext, error::TestError, factory,
    stub::STUB_SESSION_ID,
};


fn config(url: String) -> KeyAuthConfig {
    KeyAuthConfig {
        name: "app".to_string(),
        owner_id: "owner123".to_string(),
        version: "2.0".to_string(),
        url,
    }
}

fn client(test: &TestContext) -> KeyAuthClient {
    KeyAuthClient::new(reqwest::Client::new(), config(test.url())).unwrap()
}

fn user_lookup(username: &str) -> Operation {
    Operation::QueryUserInfo {
        username: username.to_string(),
    }
}
