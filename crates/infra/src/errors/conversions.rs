//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use sdc_domain::SdcError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub SdcError);

impl From<InfraError> for SdcError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<SdcError> for InfraError {
    fn from(value: SdcError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoSdcError {
    fn into_sdc(self) -> SdcError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → SdcError */
/* -------------------------------------------------------------------------- */

impl IntoSdcError for HttpError {
    fn into_sdc(self) -> SdcError {
        if self.is_timeout() {
            return SdcError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return SdcError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return SdcError::InvalidRequest(format!("failed to build HTTP request: {self}"));
        }

        if self.is_decode() {
            return SdcError::Decode(format!("failed to read HTTP response: {self}"));
        }

        if let Some(status) = self.status() {
            return SdcError::Http {
                status: status.as_u16(),
                body: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        SdcError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_sdc())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → SdcError */
/* -------------------------------------------------------------------------- */

impl From<url::ParseError> for InfraError {
    fn from(value: url::ParseError) -> Self {
        InfraError(SdcError::InvalidRequest(format!("invalid URL: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
