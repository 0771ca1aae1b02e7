use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A wallet object injected by a browser extension under
    /// `window.cardano.<key>`.
    ///
    /// Only the two methods the button needs are bound. The object is
    /// otherwise opaque.
    #[derive(Clone, PartialEq)]
    pub type Cip30Wallet;

    /// Check if the dApp is connected to the wallet. Returns true if connected
    /// or whitelisted, indicating wallet.enable() will succeed without prompts.
    ///
    /// Wallets answer with a promise, but a plain value is accepted as well:
    /// the result is not assumed to be a `Promise`.
    #[wasm_bindgen(method, catch, js_name = "isEnabled")]
    pub fn is_enabled(this: &Cip30Wallet) -> Result<JsValue, JsValue>;

    /// Establishes initial connection with user's wallet. Prompts for user
    /// permission on first connect, subsequent connections may use cached
    /// permissions.
    ///
    /// The returned API object is not used: the button only needs to know
    /// the wallet accepted.
    ///
    /// More details [CIP-0030](https://github.com/cardano-foundation/CIPs/tree/master/CIP-0030#cardanowalletnameenable-extensions-extension----promiseapi)
    ///
    #[wasm_bindgen(method, catch, js_name = "enable")]
    pub fn enable(this: &Cip30Wallet) -> Result<JsValue, JsValue>;
}
