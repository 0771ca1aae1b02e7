use std::fmt::{self, Write as _};
use tracing::{Event, Level, Metadata, Subscriber, field::Field};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt as _},
    util::SubscriberInitExt as _,
};
use wasm_bindgen::JsValue;

type Sink = fn(&Level, &str);

/// Forwards `tracing` events to the browser console.
pub struct ConsoleLayer {
    max_level: Level,
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self {
            max_level,
            sink: console_sink,
        }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        metadata.level() <= &self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut line = format!("{} {}:", metadata.level(), metadata.target());
        event.record(&mut LineVisitor(&mut line));
        (self.sink)(metadata.level(), &line);
    }
}

/// Appends the message then the `key=value` fields of an event.
struct LineVisitor<'a>(&'a mut String);

impl tracing::field::Visit for LineVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            let _ = write!(self.0, " {value}");
        } else {
            let _ = write!(self.0, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.0, " {value:?}");
        } else {
            let _ = write!(self.0, " {}={value:?}", field.name());
        }
    }
}

fn console_sink(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Install the console logger and the panic hook.
///
/// Calling this more than once is harmless: the first subscriber stays.
pub fn init(max_level: Level) {
    console_error_panic_hook::set_once();

    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new(max_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use tracing_subscriber::layer::SubscriberExt;

    use super::*;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: &Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((*level, line.to_owned())));
    }

    fn logged(max_level: Level, f: impl FnOnce()) -> Vec<(Level, String)> {
        LINES.with(|lines| lines.borrow_mut().clear());
        let layer = ConsoleLayer {
            max_level,
            sink: capture,
        };
        tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), f);
        LINES.with(|lines| lines.take())
    }

    #[test]
    fn formats_message_and_fields() {
        let lines = logged(Level::INFO, || {
            tracing::warn!(target: "wallets", wallet = %"flint", "error checking wallet");
        });

        assert_eq!(
            lines,
            [(
                Level::WARN,
                "WARN wallets: error checking wallet wallet=flint".to_owned()
            )]
        );
    }

    #[test]
    fn filters_by_level() {
        let lines = logged(Level::WARN, || {
            tracing::error!("one");
            tracing::warn!("two");
            tracing::info!("three");
            tracing::debug!("four");
        });

        let levels: Vec<_> = lines.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, [Level::ERROR, Level::WARN]);
    }
}
