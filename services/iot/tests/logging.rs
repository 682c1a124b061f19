//! Checks the log lines the publisher emits.
//!
//! Lives in its own test binary because it installs a global logger.

mod common;

use common::{init_publish_test, MockHttpSend};
use iotsign_iot::Publisher;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CaptureLogger {
    lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CaptureLogger {
    fn take(&self) -> Vec<(Level, String)> {
        self.lines.lock().expect("lock poisoned").drain(..).collect()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("iotsign_iot")
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines
                .lock()
                .expect("lock poisoned")
                .push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

fn has_line(lines: &[(Level, String)], level: Level, msg: &str) -> bool {
    lines.iter().any(|(l, m)| *l == level && m == msg)
}

#[tokio::test]
async fn test_publish_logs_sucessful_only_on_200() -> anyhow::Result<()> {
    let logger = CaptureLogger::default();
    log::set_boxed_logger(Box::new(logger.clone()))?;
    log::set_max_level(LevelFilter::Info);

    let (ctx, config) = init_publish_test(MockHttpSend::status(200, "accepted"));
    Publisher::new(ctx, config).publish("Hello World").await?;

    let lines = logger.take();
    assert!(has_line(&lines, Level::Info, "sucessful"), "{lines:?}");
    assert!(has_line(&lines, Level::Info, "Http Status Code 200"), "{lines:?}");
    assert!(has_line(&lines, Level::Info, "accepted"), "{lines:?}");

    let (ctx, config) = init_publish_test(MockHttpSend::status(500, "boom"));
    Publisher::new(ctx, config).publish("Hello World").await?;

    let lines = logger.take();
    assert!(!lines.iter().any(|(_, m)| m == "sucessful"), "{lines:?}");
    assert!(
        has_line(
            &lines,
            Level::Warn,
            "publish not accepted, Http Status Code 500: boom"
        ),
        "{lines:?}"
    );

    let (ctx, config) = init_publish_test(MockHttpSend::transport_error(
        "dns error: failed to lookup address information",
    ));
    let err = Publisher::new(ctx, config)
        .publish("Hello World")
        .await
        .unwrap_err();
    // The cause only lives in the source, never in the message.
    assert!(!err.to_string().contains("dns error"));

    let lines = logger.take();
    assert!(!lines.iter().any(|(_, m)| m == "sucessful"), "{lines:?}");
    assert!(
        lines.iter().any(|(l, m)| *l == Level::Error
            && m.starts_with("error\n")
            && m.contains("failed to send http request")
            && m.contains("dns error: failed to lookup address information")),
        "{lines:?}"
    );

    Ok(())
}
