use crate::error::{APIError, NamespaceError};
use std::{fmt, rc::Rc, str::FromStr};

/// The wallet connector applications the button knows about.
///
/// The order of the variants is the order in which wallets are queried
/// and listed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKey {
    Nami,
    Eternl,
    Flint,
    Yoroi,
    Gero,
}

impl ProviderKey {
    pub const ALL: [ProviderKey; 5] = [
        ProviderKey::Nami,
        ProviderKey::Eternl,
        ProviderKey::Flint,
        ProviderKey::Yoroi,
        ProviderKey::Gero,
    ];

    /// the key under which the wallet injects itself in the namespace
    ///
    /// This is `"nami"` for example.
    pub const fn as_str(self) -> &'static str {
        match self {
            ProviderKey::Nami => "nami",
            ProviderKey::Eternl => "eternl",
            ProviderKey::Flint => "flint",
            ProviderKey::Yoroi => "yoroi",
            ProviderKey::Gero => "gero",
        }
    }

    /// human readable name of the wallet, as used in the install instructions
    pub const fn display_name(self) -> &'static str {
        match self {
            ProviderKey::Nami => "Nami",
            ProviderKey::Eternl => "Eternl",
            ProviderKey::Flint => "Flint",
            ProviderKey::Yoroi => "Yoroi",
            ProviderKey::Gero => "Gero",
        }
    }

    /// where to download the wallet extension
    pub const fn install_url(self) -> &'static str {
        match self {
            ProviderKey::Nami => "https://namiwallet.io/",
            ProviderKey::Eternl => "https://eternl.io/",
            ProviderKey::Flint => "https://flint-wallet.com/",
            ProviderKey::Yoroi => "https://yoroi-wallet.com/",
            ProviderKey::Gero => "https://gerowallet.io/",
        }
    }
}

impl fmt::Display for ProviderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported wallet `{0}'")]
pub struct UnknownProviderKey(pub String);

impl FromStr for ProviderKey {
    type Err = UnknownProviderKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownProviderKey(s.to_owned()))
    }
}

/// The part of a CIP30 wallet object the button relies on.
///
/// Everything else the wallet injects (name, icon, api version...) is
/// never looked at.
#[async_trait::async_trait(?Send)]
pub trait Provider {
    /// Check if the user already approved the connection of this web
    /// application with the wallet.
    async fn is_enabled(&self) -> Result<bool, APIError>;

    /// Ask the user to approve the connection. Resolves once the wallet
    /// accepted, fails if the user refused or the wallet could not answer.
    async fn enable(&self) -> Result<(), APIError>;
}

/// Access to the object through which the wallets advertise themselves
/// (`window.cardano` in a browser).
pub trait Namespace {
    /// `true` if the namespace object exists at all.
    fn is_present(&self) -> bool;

    /// Look up the wallet injected under `key`.
    ///
    /// Returns `Ok(None)` if that wallet is not installed. An error means
    /// the namespace itself could not be read.
    fn provider(&self, key: ProviderKey) -> Result<Option<Rc<dyn Provider>>, NamespaceError>;
}

impl<N: Namespace + ?Sized> Namespace for Rc<N> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }

    fn provider(&self, key: ProviderKey) -> Result<Option<Rc<dyn Provider>>, NamespaceError> {
        (**self).provider(key)
    }
}

/// A wallet found during the last enumeration pass.
#[derive(Clone)]
pub struct WalletEntry {
    pub name: ProviderKey,
    pub enabled: bool,
    pub api: Rc<dyn Provider>,
}

impl fmt::Debug for WalletEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletEntry")
            .field("name", &self.name)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
