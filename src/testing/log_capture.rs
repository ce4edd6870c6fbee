use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

thread_local! {
    static RECORDS: RefCell<Vec<CapturedRecord>> = const { RefCell::new(Vec::new()) };
}

/// Buffers every record on the thread that emitted it.
struct ThreadLocalLogger;

impl Log for ThreadLocalLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let captured = CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        RECORDS.with(|r| r.borrow_mut().push(captured));
    }

    fn flush(&self) {}
}

static LOGGER: ThreadLocalLogger = ThreadLocalLogger;
static INIT: Once = Once::new();

pub fn install() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
}

/// Runs `f` and returns its result with every record it logged on this thread.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<CapturedRecord>) {
    install();
    RECORDS.with(|r| r.borrow_mut().clear());
    let out = f();
    let records: Vec<CapturedRecord> = RECORDS.with(|r| r.borrow_mut().drain(..).collect());
    (out, records)
}

/// Records at exactly `level`.
pub fn at_level(records: &[CapturedRecord], level: Level) -> Vec<&CapturedRecord> {
    records.iter().filter(|r| r.level == level).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_records_from_this_thread() {
        let ((), records) = capture(|| {
            log::info!("hello {}", 1);
            log::debug!("detail");
        });
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "hello 1");
        assert_eq!(records[0].target, module_path!());
        assert_eq!(at_level(&records, Level::Debug).len(), 1);
    }

    #[test]
    fn other_threads_are_not_captured() {
        let ((), records) = capture(|| {
            std::thread::spawn(|| log::info!("elsewhere"))
                .join()
                .unwrap();
        });
        assert!(records.is_empty());
    }
}
