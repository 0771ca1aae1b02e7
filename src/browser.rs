//! [`Namespace`] and [`Provider`] backed by the objects the wallet
//! extensions inject in the page.

use crate::{
    error::{APIError, NamespaceError},
    ffi,
    wallet::{Namespace, Provider, ProviderKey},
};
use std::rc::Rc;
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;

/// The global object wallets register themselves on, `window.cardano`
/// unless configured otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserNamespace {
    name: String,
}

impl BrowserNamespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn object(&self) -> JsValue {
        js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(&self.name))
            .unwrap_or(JsValue::UNDEFINED)
    }
}

impl Default for BrowserNamespace {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_NAMESPACE)
    }
}

impl Namespace for BrowserNamespace {
    fn is_present(&self) -> bool {
        !self.object().is_undefined()
    }

    fn provider(&self, key: ProviderKey) -> Result<Option<Rc<dyn Provider>>, NamespaceError> {
        let namespace = self.object();
        if !namespace.is_object() {
            return Err(NamespaceError::NotAnObject(self.name.clone()));
        }

        let value = js_sys::Reflect::get(&namespace, &JsValue::from_str(key.as_str())).map_err(
            |error| NamespaceError::Unreadable {
                key,
                reason: format!("{error:?}"),
            },
        )?;

        if !value.is_truthy() {
            return Ok(None);
        }

        Ok(Some(Rc::new(BrowserProvider {
            cip30_wallet: value.unchecked_into(),
        })))
    }
}

/// A wallet injected in the page.
///
/// Nothing is checked about the shape of the object: if it has no
/// `isEnabled` or `enable` method the call fails like a rejected promise.
#[derive(Clone, PartialEq)]
pub struct BrowserProvider {
    cip30_wallet: ffi::Cip30Wallet,
}

#[async_trait::async_trait(?Send)]
impl Provider for BrowserProvider {
    async fn is_enabled(&self) -> Result<bool, APIError> {
        match settle(self.cip30_wallet.is_enabled()).await {
            Ok(obj) => obj.as_bool().ok_or_else(|| {
                APIError::internal(format!("Unexpected returned JSON Object: {obj:?}"))
            }),
            Err(error) => Err(decode_rejection(error)),
        }
    }

    async fn enable(&self) -> Result<(), APIError> {
        match settle(self.cip30_wallet.enable()).await {
            Ok(_api) => Ok(()),
            Err(error) => Err(decode_rejection(error)),
        }
    }
}

/// Await the outcome of a wallet call the way `await` does in javascript:
/// a thrown exception or a rejected promise is an error, any other value
/// (promise or not) is the answer.
async fn settle(call: Result<JsValue, JsValue>) -> Result<JsValue, JsValue> {
    let answer = call?;
    JsFuture::from(js_sys::Promise::resolve(&answer)).await
}

/// Wallets reject with a CIP30 `APIError`. Anything else (a thrown
/// `TypeError` for example) is reported as an internal error.
fn decode_rejection(error: JsValue) -> APIError {
    let raw = format!("{error:?}");
    serde_wasm_bindgen::from_value(error).unwrap_or_else(|decode_error| {
        APIError::internal(format!(
            "Couldn't decode the error content ({raw}): {decode_error}"
        ))
    })
}
