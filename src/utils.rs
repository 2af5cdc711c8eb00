pub fn set_panic_hook() {
    // Better panic messages in the browser console. Safe to call repeatedly.
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    console::init();
}

/// Routes `log` records to the browser's `console.log`.
#[cfg(target_arch = "wasm32")]
mod console {
    use log::{LevelFilter, Log, Metadata, Record};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = console, js_name = log)]
        fn console_log(s: &str);
    }

    struct ConsoleLogger;

    static LOGGER: ConsoleLogger = ConsoleLogger;

    impl Log for ConsoleLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                console_log(&format!(
                    "[{} {}] {}",
                    record.level(),
                    record.target(),
                    record.args()
                ));
            }
        }

        fn flush(&self) {}
    }

    pub fn init() {
        // a second call finds the logger already set, which is fine
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Info);
        }
    }
}
