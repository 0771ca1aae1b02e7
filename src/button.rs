use crate::{
    error::ButtonError,
    wallet::{Namespace, ProviderKey, WalletEntry},
};
use futures::future::join_all;
use std::cell::{Ref, RefCell};

/// Everything the button displays.
#[derive(Debug, Clone, Default)]
pub struct ComponentState {
    /// wallets found by the last successful enumeration pass, in
    /// [`ProviderKey::ALL`] order
    pub wallets: Vec<WalletEntry>,
    /// whether the provider namespace existed when the button was attached
    pub has_provider_namespace: bool,
    pub error: Option<ButtonError>,
}

/// The wallet button logic, independent of any rendering.
///
/// The [`Namespace`] is given at construction so the button can be driven
/// against the real `window.cardano` or against an in-memory one.
///
/// The state is only borrowed between two `.await` points, so several
/// operations may be in flight at the same time. Nothing orders them: the
/// last one to finish overwrites the state.
pub struct WalletButton<N> {
    namespace: N,
    state: RefCell<ComponentState>,
}

impl<N: Namespace> WalletButton<N> {
    /// Probe the environment for the provider namespace.
    ///
    /// This is only done once: a namespace injected after the button was
    /// attached will not be seen.
    pub fn attach(namespace: N) -> Self {
        let has_provider_namespace = namespace.is_present();
        tracing::debug!(has_provider_namespace, "wallet button attached");

        Self {
            namespace,
            state: RefCell::new(ComponentState {
                has_provider_namespace,
                ..ComponentState::default()
            }),
        }
    }

    pub fn state(&self) -> Ref<'_, ComponentState> {
        self.state.borrow()
    }

    pub fn has_provider_namespace(&self) -> bool {
        self.state.borrow().has_provider_namespace
    }

    pub fn wallets(&self) -> Vec<WalletEntry> {
        self.state.borrow().wallets.clone()
    }

    pub fn error(&self) -> Option<ButtonError> {
        self.state.borrow().error
    }

    /// Run an enumeration pass and replace the wallet list with its result.
    ///
    /// If the pass fails the previous wallet list is kept and only the
    /// error is updated.
    pub async fn check_available_wallets(&self) {
        if !self.has_provider_namespace() {
            self.state.borrow_mut().error = Some(ButtonError::NamespaceNotFound);
            return;
        }

        match self.enumerate().await {
            Ok(wallets) => {
                tracing::debug!(found = wallets.len(), "wallet enumeration done");
                let error = wallets.is_empty().then_some(ButtonError::NoWalletsFound);

                let mut state = self.state.borrow_mut();
                state.wallets = wallets;
                state.error = error;
            }
            Err(error) => self.state.borrow_mut().error = Some(error),
        }
    }

    /// Ask the wallet of `entry` to connect, then refresh the wallet list.
    ///
    /// Selecting a wallet that is already enabled does nothing.
    pub async fn connect(&self, entry: &WalletEntry) {
        if entry.enabled {
            tracing::debug!(wallet = %entry.name, "wallet already connected");
            return;
        }

        match entry.api.enable().await {
            Ok(()) => {
                tracing::info!(wallet = %entry.name, "wallet connected");
                self.check_available_wallets().await;
            }
            Err(error) => {
                tracing::error!(wallet = %entry.name, %error, "cannot connect to wallet");
                self.state.borrow_mut().error = Some(ButtonError::ConnectionFailed(entry.name));
            }
        }
    }

    async fn enumerate(&self) -> Result<Vec<WalletEntry>, ButtonError> {
        let mut installed = Vec::with_capacity(ProviderKey::ALL.len());
        for key in ProviderKey::ALL {
            match self.namespace.provider(key) {
                Ok(Some(api)) => installed.push((key, api)),
                Ok(None) => {}
                Err(error) => {
                    tracing::error!(%error, "error detecting wallets");
                    return Err(ButtonError::DetectionFailed);
                }
            }
        }

        // `join_all` keeps the input order whatever order the queries settle in
        let queries = installed.into_iter().map(|(name, api)| async move {
            match api.is_enabled().await {
                Ok(enabled) => Some(WalletEntry { name, enabled, api }),
                Err(error) => {
                    tracing::warn!(wallet = %name, %error, "error checking wallet, skipping it");
                    None
                }
            }
        });

        Ok(join_all(queries).await.into_iter().flatten().collect())
    }
}
