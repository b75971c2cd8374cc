//! Checks the tracing events emitted by the move transition.

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use village::core::{Parcel, VillageState};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(level: Level, f: F) -> String {
    let output = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(output.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    output.contents()
}

#[test]
fn ignored_move_logs_debug_event() {
    let state = VillageState::new("Bob's House", vec![]);

    let logs = capture(Level::DEBUG, || {
        let _ = state.move_to("Cabin");
    });

    assert!(logs.contains("Ignoring move"), "{logs}");
    assert!(logs.contains("from=Bob's House"), "{logs}");
    assert!(logs.contains("to=Cabin"), "{logs}");
}

#[test]
fn applied_move_logs_trace_event() {
    let state = VillageState::new(
        "Alice's House",
        vec![Parcel::new("Alice's House", "Bob's House")],
    );

    let logs = capture(Level::TRACE, || {
        let _ = state.move_to("Bob's House");
    });

    assert!(logs.contains("Robot moved"), "{logs}");
    assert!(logs.contains("delivered=1"), "{logs}");
    assert!(logs.contains("remaining=0"), "{logs}");
}

#[test]
fn applied_move_is_quiet_at_debug() {
    let state = VillageState::new("Bob's House", vec![]);

    let logs = capture(Level::DEBUG, || {
        let _ = state.move_to("Town Hall");
    });

    assert!(logs.is_empty(), "{logs}");
}
