//! What the wallet button shows, as a pure function of its state.
//!
//! The browser element draws a [`View`] into the DOM; keeping this step
//! separate lets the display rules be tested without a document.

use crate::{button::ComponentState, wallet::ProviderKey};

pub const CHECK_BUTTON_LABEL: &str = "Check Available Wallets";
pub const INSTRUCTIONS_TITLE: &str = "To use this application, you need a Cardano wallet:";
pub const INSTALL_STEP: &str = "Install one of the following wallets:";
pub const CREATE_STEP: &str = "Create or restore a wallet";
pub const RETURN_STEP: &str = "Return to this page and click \"Check Available Wallets\"";

pub const CONNECTED_LABEL: &str = "(Connected)";
pub const CONNECT_LABEL: &str = "(Click to connect)";

/// Stylesheet injected next to the widget.
pub const STYLE: &str = r#"
.wallet-container {
  display: block;
  font-family: system-ui, sans-serif;
  padding: 1rem;
  border-radius: 8px;
  background: #f4f4f4;
}
.wallet-container button {
  background: #7b3fe4;
  color: white;
  border: none;
  padding: 0.5rem 1rem;
  border-radius: 4px;
  cursor: pointer;
  transition: background 0.3s ease;
}
.wallet-container button:hover {
  background: #6032b0;
}
.wallet-container .wallet-error {
  color: red;
}
.wallet-container .wallet-list {
  margin-top: 1rem;
}
.wallet-container .wallet-item {
  display: flex;
  align-items: center;
  gap: 1rem;
  padding: 0.5rem;
  border: 1px solid #ddd;
  margin: 0.5rem 0;
  border-radius: 4px;
  cursor: pointer;
}
.wallet-container .wallet-item:hover {
  background: #eee;
}
.wallet-container .instructions {
  color: #666;
  line-height: 1.5;
}
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// message displayed under the check button
    pub error: Option<String>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// no provider namespace: explain how to install a wallet
    Instructions(Vec<InstallLink>),
    WalletList(Vec<WalletItem>),
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletItem {
    /// position of the wallet in [`ComponentState::wallets`]
    pub index: usize,
    pub name: ProviderKey,
    pub status: &'static str,
}

pub fn install_links() -> Vec<InstallLink> {
    ProviderKey::ALL
        .into_iter()
        .map(|key| InstallLink {
            label: key.display_name(),
            href: key.install_url(),
        })
        .collect()
}

pub fn render(state: &ComponentState) -> View {
    let body = if !state.has_provider_namespace {
        Body::Instructions(install_links())
    } else if !state.wallets.is_empty() {
        Body::WalletList(
            state
                .wallets
                .iter()
                .enumerate()
                .map(|(index, wallet)| WalletItem {
                    index,
                    name: wallet.name,
                    status: if wallet.enabled {
                        CONNECTED_LABEL
                    } else {
                        CONNECT_LABEL
                    },
                })
                .collect(),
        )
    } else {
        Body::Empty
    };

    View {
        error: state.error.map(|error| error.to_string()),
        body,
    }
}
