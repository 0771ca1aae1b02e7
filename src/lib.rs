/*!

# Cardano wallet button

A small browser widget that finds the Cardano wallets (CIP30) installed in
the browser, shows whether this page is already allowed to use them and lets
the user connect one.

## Features

- Detect the `window.cardano` namespace and explain how to install a wallet
  when it is missing
- List the supported wallets (Nami, Eternl, Flint, Yoroi and Gero) with their
  connection status
- Ask a wallet for the user's permission to connect

## Usage

From javascript, mount a [`CardanoWalletButton`] in any element of the page.

The logic of the button is available without any DOM through
[`WalletButton`]. Look for the wallets first:

```no_run
use cardano_wallet_button::{BrowserNamespace, WalletButton};

# async fn test() {
let button = WalletButton::attach(BrowserNamespace::default());
button.check_available_wallets().await;

for wallet in button.wallets() {
    println!("Wallet: {} (connected: {})", wallet.name, wallet.enabled);
}
# }
```

Then connect one of them. Once the user accepted, the wallet list is
refreshed.

```no_run
# use cardano_wallet_button::{BrowserNamespace, ProviderKey, WalletButton};
#
# async fn test() -> anyhow::Result<()> {
# let button = WalletButton::attach(BrowserNamespace::default());
let eternl: ProviderKey = "eternl".parse()?;
if let Some(wallet) = button.wallets().into_iter().find(|w| w.name == eternl) {
    button.connect(&wallet).await;
}
if let Some(error) = button.error() {
    println!("{error}");
}
# Ok(()) }
```

The wallets are reached through the [`Namespace`] and [`Provider`] traits so
any other source of wallets can be plugged in.

*/

mod browser;
mod button;
pub mod config;
mod element;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod view;
mod wallet;

#[cfg(test)]
mod testing;

pub use self::{
    browser::{BrowserNamespace, BrowserProvider},
    button::{ComponentState, WalletButton},
    config::Config,
    element::CardanoWalletButton,
    wallet::{Namespace, Provider, ProviderKey, UnknownProviderKey, WalletEntry},
};
