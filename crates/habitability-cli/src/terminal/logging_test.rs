use std::io;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::terminal::logging::{ExohabFormatter, build_filter, default_directive};
use crate::terminal::print;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a subscriber built like `init` and return what it wrote.
fn capture(verbose: u8, quiet: bool, rust_log: Option<&str>, f: impl FnOnce()) -> String {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, quiet, rust_log))
        .with_ansi(false)
        .event_format(ExohabFormatter)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = sink.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn verbosity_maps_to_levels() {
    assert_eq!(default_directive(0, false), "info");
    assert_eq!(default_directive(1, false), "debug");
    assert_eq!(default_directive(3, false), "trace");
    assert_eq!(default_directive(2, true), "warn");
}

#[test]
fn quiet_still_prints_results() {
    let out = capture(0, true, None, || {
        print::print("Luminosity 1.0000");
        info!("loaded rows");
        warn!("skipping row");
    });
    assert!(out.contains("Luminosity 1.0000"));
    assert!(!out.contains("loaded rows"));
    assert!(out.contains("skipping row"));
}

#[test]
fn rust_log_cannot_hide_results() {
    let out = capture(0, false, Some("warn"), || {
        print::print("Inner edge 0.9500 AU");
        info!("loaded rows");
    });
    assert!(out.contains("Inner edge 0.9500 AU"));
    assert!(!out.contains("loaded rows"));
}
