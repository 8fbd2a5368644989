use std::{ops::Deref, sync::LazyLock, time::Duration};

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
});

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self(
            reqwest::Client::builder()
                .user_agent(USER_AGENT.as_str())
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap(),
        )
    }
}
