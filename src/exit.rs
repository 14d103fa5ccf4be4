//! Process termination with flushed standard streams.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static EXIT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// True once an exit has been requested anywhere in the process.
///
/// Argument parsing can end the invocation (help, version, usage error)
/// before the scaffolding logic runs; the dispatch path checks this flag so
/// the main logic never executes after such an outcome.
pub fn requested() -> bool {
    EXIT_REQUESTED.load(Ordering::SeqCst)
}

/// Record that the current invocation is finished without terminating yet.
pub fn request_exit() {
    EXIT_REQUESTED.store(true, Ordering::SeqCst);
}

/// Flush both standard streams, then terminate the process.
///
/// Buffered output can be lost on some platforms when the process ends
/// while a pipe write is still queued; blocking flushes on both streams
/// before the real exit primitive close that window. Flush failures must
/// not mask the exit path itself.
pub fn exit(code: i32) -> ! {
    request_exit();
    let _ = std::io::stdout().flush();
    let _ = std::io::stderr().flush();
    std::process::exit(code)
}
