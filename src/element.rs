use crate::{
    browser::BrowserNamespace,
    button::WalletButton,
    config::Config,
    logging,
    view::{self, Body, InstallLink},
};
use std::{
    cell::{Cell, RefCell},
    future::Future,
    rc::Rc,
};
use wasm_bindgen::{JsCast as _, prelude::*};
use web_sys::{Document, Element, Event};

type Listener = Closure<dyn FnMut(Event)>;

/// The wallet button, drawn inside a host element of the page.
///
/// ```js
/// import init, { CardanoWalletButton } from "cardano-wallet-button";
///
/// await init();
/// const button = new CardanoWalletButton(document.getElementById("wallet"));
/// // later, when the page section goes away
/// button.detach();
/// ```
#[wasm_bindgen]
pub struct CardanoWalletButton {
    mounted: Rc<Mounted>,
}

struct Mounted {
    button: WalletButton<BrowserNamespace>,
    host: Element,
    document: Document,
    /// click handlers of the elements currently drawn
    listeners: RefCell<Vec<Listener>>,
    detached: Cell<bool>,
}

#[wasm_bindgen]
impl CardanoWalletButton {
    /// Attach the button to `host`, looking for the wallets namespace once.
    #[wasm_bindgen(constructor)]
    pub fn new(host: Element, options: JsValue) -> Result<CardanoWalletButton, JsValue> {
        let config = Config::from_js(options).map_err(JsError::from)?;
        logging::init(config.log_level.into());

        let document = host
            .owner_document()
            .ok_or_else(|| JsError::new("the host element has no document"))?;

        let mounted = Rc::new(Mounted {
            button: WalletButton::attach(BrowserNamespace::new(config.namespace)),
            host,
            document,
            listeners: RefCell::default(),
            detached: Cell::new(false),
        });
        mounted.draw()?;

        Ok(Self { mounted })
    }

    /// Remove the button from the page and forget about the wallets.
    ///
    /// Operations still waiting on a wallet will complete but won't be
    /// displayed.
    pub fn detach(self) {
        self.mounted.detached.set(true);
        self.mounted.host.set_inner_html("");
        self.mounted.listeners.borrow_mut().clear();
    }
}

impl Mounted {
    fn draw(self: &Rc<Self>) -> Result<(), JsValue> {
        if self.detached.get() {
            return Ok(());
        }

        let (view, wallets) = {
            let state = self.button.state();
            (view::render(&state), state.wallets.clone())
        };
        let mut listeners = Vec::new();

        let style = self.text("style", view::STYLE)?;
        let container = self.element("div", "wallet-container")?;

        let check = self.text("button", view::CHECK_BUTTON_LABEL)?;
        listeners.push(self.on_click(&check, |mounted| async move {
            mounted.button.check_available_wallets().await;
        })?);
        container.append_child(&check)?;

        if let Some(error) = &view.error {
            let message = self.text("p", error)?;
            message.set_class_name("wallet-error");
            container.append_child(&message)?;
        }

        match &view.body {
            Body::Instructions(links) => {
                let instructions = self.instructions(links)?;
                container.append_child(&instructions)?;
            }
            Body::WalletList(items) => {
                let list = self.element("div", "wallet-list")?;
                for item in items {
                    let row = self.element("div", "wallet-item")?;
                    let name = self.text("span", item.name.as_str())?;
                    let status = self.text("span", item.status)?;
                    row.append_child(&name)?;
                    row.append_child(&status)?;

                    let entry = wallets[item.index].clone();
                    listeners.push(self.on_click(&row, move |mounted| {
                        let entry = entry.clone();
                        async move { mounted.button.connect(&entry).await }
                    })?);
                    list.append_child(&row)?;
                }
                container.append_child(&list)?;
            }
            Body::Empty => {}
        }

        self.host.set_inner_html("");
        self.host.append_child(&style)?;
        self.host.append_child(&container)?;
        // the previous elements are gone, so are their handlers
        *self.listeners.borrow_mut() = listeners;

        Ok(())
    }

    fn instructions(&self, links: &[InstallLink]) -> Result<Element, JsValue> {
        let instructions = self.element("div", "instructions")?;
        let title = self.text("h3", view::INSTRUCTIONS_TITLE)?;
        instructions.append_child(&title)?;

        let steps = self.document.create_element("ol")?;
        let install = self.text("li", view::INSTALL_STEP)?;
        let wallets = self.document.create_element("ul")?;
        for link in links {
            let anchor = self.text("a", link.label)?;
            anchor.set_attribute("href", link.href)?;
            anchor.set_attribute("target", "_blank")?;

            let item = self.document.create_element("li")?;
            item.append_child(&anchor)?;
            wallets.append_child(&item)?;
        }
        install.append_child(&wallets)?;
        steps.append_child(&install)?;
        let create = self.text("li", view::CREATE_STEP)?;
        let back = self.text("li", view::RETURN_STEP)?;
        steps.append_child(&create)?;
        steps.append_child(&back)?;
        instructions.append_child(&steps)?;

        Ok(instructions)
    }

    /// Run `action` on click, then draw the new state.
    fn on_click<F, Fut>(self: &Rc<Self>, target: &Element, action: F) -> Result<Listener, JsValue>
    where
        F: Fn(Rc<Mounted>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let mounted = Rc::downgrade(self);
        let listener = Listener::new(move |_event: Event| {
            let Some(mounted) = mounted.upgrade() else {
                return;
            };
            let task = action(Rc::clone(&mounted));
            wasm_bindgen_futures::spawn_local(async move {
                task.await;
                if let Err(error) = mounted.draw() {
                    tracing::error!(?error, "cannot draw the wallet button");
                }
            });
        });
        target.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

        Ok(listener)
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }

    fn text(&self, tag: &str, text: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        element.set_text_content(Some(text));
        Ok(element)
    }
}
