//! Scoped suspension of asynchronous input processing.
//!
//! A native clipboard call sequence (enumerate, copy, free) must not
//! be interleaved with reentrant access to the same class from input
//! handlers elsewhere in the process. The broker brackets every native
//! call with a [`SuspendGuard`] acquired through an [`InputGate`]; the
//! guard resumes input on every exit path, including early error
//! returns.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hook into the process's input-event machinery.
///
/// The machinery itself lives outside this crate; embeddings implement
/// the trait over whatever suspension primitive they have. Calls are
/// balanced: every `suspend` is matched by exactly one `resume`.
pub trait InputGate {
    fn suspend(&self);
    fn resume(&self);
}

/// RAII bracket around a native call sequence.
///
/// Suspends on construction, resumes on drop.
#[must_use = "dropping the guard immediately resumes input"]
pub struct SuspendGuard<'a> {
    gate: &'a dyn InputGate,
}

impl<'a> SuspendGuard<'a> {
    pub fn enter(gate: &'a dyn InputGate) -> Self {
        gate.suspend();
        Self { gate }
    }
}

impl Drop for SuspendGuard<'_> {
    fn drop(&mut self) {
        self.gate.resume();
    }
}

/// Gate for embeddings with no asynchronous input to suspend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGate;

impl InputGate for NoopGate {
    fn suspend(&self) {}
    fn resume(&self) {}
}

/// Depth-counted gate.
///
/// Suspension brackets nest: the hooks fire only on the outermost
/// transitions (depth 0 to 1 and back), so a guard taken inside an
/// already-suspended scope costs nothing.
pub struct NestingGate {
    depth: AtomicUsize,
    on_suspend: Hook,
    on_resume: Hook,
}

type Hook = Box<dyn Fn() + Send + Sync>;

impl NestingGate {
    pub fn new(
        on_suspend: impl Fn() + Send + Sync + 'static,
        on_resume: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            depth: AtomicUsize::new(0),
            on_suspend: Box::new(on_suspend),
            on_resume: Box::new(on_resume),
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::SeqCst)
    }
}

impl InputGate for NestingGate {
    fn suspend(&self) {
        if self.depth.fetch_add(1, Ordering::SeqCst) == 0 {
            (self.on_suspend)();
        }
    }

    fn resume(&self) {
        let prev = self.depth.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(prev > 0, "resume without matching suspend");
        if prev == 1 {
            (self.on_resume)();
        }
    }
}

impl fmt::Debug for NestingGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NestingGate")
            .field("depth", &self.depth())
            .finish()
    }
}
