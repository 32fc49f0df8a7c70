use crate::error::{AppError, Result};
use hyper_util::client::legacy::connect::HttpConnector;
use yup_oauth2::{
    ServiceAccountAuthenticator, ServiceAccountKey, authenticator::Authenticator,
    hyper_rustls::HttpsConnector,
};

pub(crate) type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

pub(crate) const YOUTUBE_READONLY_SCOPE: &str =
    "https://www.googleapis.com/auth/youtube.readonly";

/// Create and verify an authenticator for the service account key by
/// fetching a token. Both API clients share the same credential set.
pub(crate) async fn create_and_verify_authenticator(key: ServiceAccountKey) -> Result<AuthType> {
    let auth = ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    // Trigger authentication by requesting a token
    let _token = auth
        .token(&[YOUTUBE_READONLY_SCOPE])
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

    Ok(auth)
}
