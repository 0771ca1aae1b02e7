use crate::wallet::ProviderKey;

/// The errors shown to the user by the wallet button.
///
/// Only the message is ever displayed; the underlying causes are logged
/// where they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ButtonError {
    #[error("namespace not found")]
    NamespaceNotFound,
    #[error("no wallets found")]
    NoWalletsFound,
    #[error("error detecting wallets")]
    DetectionFailed,
    #[error("error connecting to {0}")]
    ConnectionFailed(ProviderKey),
}

/// The provider namespace exists but could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamespaceError {
    #[error("provider namespace `{0}' is not an object")]
    NotAnObject(String),
    #[error("cannot read `{key}' from the provider namespace: {reason}")]
    Unreadable { key: ProviderKey, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid wallet button options: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum APIErrorCode {
    #[error("Invalid inputs.")]
    InvalidRequest,
    #[error("An error occured during the execution of this API call.")]
    InternalError,
    #[error("The request was denied. The user may have refused the connection.")]
    Refused,
    /// The account changed while we were talking to the wallet.
    #[error("The account has changed.")]
    AccountChange,
    #[error("Unknown error code `{0}'")]
    Unknown(i64),
}

/// Error returned by a CIP30 wallet when one of its promises rejects.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {info}.")]
pub struct APIError {
    pub code: APIErrorCode,
    pub info: String,
}

impl APIError {
    pub(crate) fn internal(info: impl Into<String>) -> Self {
        Self {
            code: APIErrorCode::InternalError,
            info: info.into(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for APIErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = APIErrorCode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(formatter, "Expecting an integer APIErrorCode")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match v {
                    -1 => Ok(APIErrorCode::InvalidRequest),
                    -2 => Ok(APIErrorCode::InternalError),
                    -3 => Ok(APIErrorCode::Refused),
                    -4 => Ok(APIErrorCode::AccountChange),
                    unknown => Ok(APIErrorCode::Unknown(unknown)),
                }
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(v)
                    .map(APIErrorCode::Unknown)
                    .map_err(|_| E::custom(format!("error code `{v}' is out of range")))
            }
        }

        deserializer.deserialize_i64(Visitor)
    }
}
