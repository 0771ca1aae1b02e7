//! In-memory wallets and namespace used by the unit tests.

use crate::{
    error::{APIError, APIErrorCode, NamespaceError},
    wallet::{Namespace, Provider, ProviderKey},
};
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Poll},
};

/// Returns `Pending` `n` times before completing, so tests can decide in
/// which order concurrent queries settle.
struct Yield(usize);

impl Future for Yield {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 == 0 {
            Poll::Ready(())
        } else {
            self.0 -= 1;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub fn refused(info: &str) -> APIError {
    APIError {
        code: APIErrorCode::Refused,
        info: info.to_owned(),
    }
}

pub struct FakeProvider {
    key: ProviderKey,
    enabled: Cell<bool>,
    is_enabled_error: Option<APIError>,
    enable_error: Option<APIError>,
    delay: usize,
    settled: Rc<RefCell<Vec<ProviderKey>>>,
    pub is_enabled_calls: Cell<usize>,
    pub enable_calls: Cell<usize>,
}

impl FakeProvider {
    pub fn new(key: ProviderKey, enabled: bool) -> Self {
        Self {
            key,
            enabled: Cell::new(enabled),
            is_enabled_error: None,
            enable_error: None,
            delay: 0,
            settled: Rc::default(),
            is_enabled_calls: Cell::new(0),
            enable_calls: Cell::new(0),
        }
    }

    pub fn failing_is_enabled(mut self, error: APIError) -> Self {
        self.is_enabled_error = Some(error);
        self
    }

    pub fn failing_enable(mut self, error: APIError) -> Self {
        self.enable_error = Some(error);
        self
    }

    /// delay the answer to `isEnabled` by `polls` extra polls
    pub fn delayed(mut self, polls: usize) -> Self {
        self.delay = polls;
        self
    }
}

#[async_trait::async_trait(?Send)]
impl Provider for FakeProvider {
    async fn is_enabled(&self) -> Result<bool, APIError> {
        self.is_enabled_calls.set(self.is_enabled_calls.get() + 1);
        Yield(self.delay).await;
        self.settled.borrow_mut().push(self.key);
        match &self.is_enabled_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.enabled.get()),
        }
    }

    async fn enable(&self) -> Result<(), APIError> {
        self.enable_calls.set(self.enable_calls.get() + 1);
        match &self.enable_error {
            Some(error) => Err(error.clone()),
            None => {
                self.enabled.set(true);
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct FakeNamespace {
    present: bool,
    unreadable: Cell<bool>,
    providers: BTreeMap<ProviderKey, Rc<FakeProvider>>,
    settled: Rc<RefCell<Vec<ProviderKey>>>,
}

impl FakeNamespace {
    /// no `window.cardano` at all
    pub fn absent() -> Self {
        Self::default()
    }

    /// an empty `window.cardano`
    pub fn empty() -> Self {
        Self {
            present: true,
            ..Self::default()
        }
    }

    /// `window.cardano` is there but cannot be read (e.g. `null`)
    pub fn unreadable() -> Self {
        Self {
            present: true,
            unreadable: Cell::new(true),
            ..Self::default()
        }
    }

    /// from now on, reading the namespace fails
    pub fn make_unreadable(&self) {
        self.unreadable.set(true);
    }

    pub fn with(mut self, mut provider: FakeProvider) -> Self {
        provider.settled = Rc::clone(&self.settled);
        self.providers.insert(provider.key, Rc::new(provider));
        self
    }

    pub fn get(&self, key: ProviderKey) -> Rc<FakeProvider> {
        Rc::clone(&self.providers[&key])
    }

    /// order in which the `isEnabled` queries answered
    pub fn settle_order(&self) -> Vec<ProviderKey> {
        self.settled.borrow().clone()
    }

    pub fn is_enabled_calls(&self) -> usize {
        self.providers
            .values()
            .map(|provider| provider.is_enabled_calls.get())
            .sum()
    }
}

impl Namespace for FakeNamespace {
    fn is_present(&self) -> bool {
        self.present
    }

    fn provider(&self, key: ProviderKey) -> Result<Option<Rc<dyn Provider>>, NamespaceError> {
        if self.unreadable.get() {
            return Err(NamespaceError::NotAnObject("cardano".to_owned()));
        }
        Ok(self
            .providers
            .get(&key)
            .map(|provider| Rc::clone(provider) as Rc<dyn Provider>))
    }
}
