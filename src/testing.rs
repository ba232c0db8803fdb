//! Test helpers shared by the unit test modules.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::subscriber::DefaultGuard;

/// Log lines captured from the current thread's `tracing` events.
///
/// Keeps the thread-local subscriber installed until dropped. `#[tokio::test]`
/// runs on a current-thread runtime, so spawned tasks are captured too.
pub(crate) struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl CapturedLogs {
    /// Message of every event recorded so far, one entry per event.
    pub(crate) fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(|line| line.trim().to_owned())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

#[derive(Clone)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Installs a bare fmt subscriber (no time, level or target) for the
/// current thread and returns a handle to what it writes.
pub(crate) fn capture_logs() -> CapturedLogs {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let writer = SharedBuf(Arc::clone(&buf));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .finish();

    CapturedLogs { buf, _guard: tracing::subscriber::set_default(subscriber) }
}
