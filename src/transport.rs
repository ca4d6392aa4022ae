use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use secrecy::ExposeSecret;
use secrecy::SecretString;

use crate::config::GerritConfig;
use crate::error::TransportError;

/// Fetches response bodies from Gerrit.
///
/// [`crate::sync::GerritService`] only needs `GET`; tests substitute a canned implementation.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String, TransportError>;
}

/// A blocking HTTP client authenticating with a username and HTTP password.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    username: String,
    password: SecretString,
}

impl HttpTransport {
    pub fn new(config: &GerritConfig) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }
}

impl Transport for HttpTransport {
    #[tracing::instrument(level = "debug", skip(self))]
    fn get(&self, url: &str) -> Result<String, TransportError> {
        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        tracing::debug!(%status, "Received response");
        let body = response.text()?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
