//! Selection broker — the mediation layer over the native service.
//!
//! One broker serves all three selection classes. Each operation is
//! synchronous and blocking from the caller's perspective: it suspends
//! asynchronous input, runs the native call sequence, marshals the
//! result into caller-owned values, and releases every native
//! allocation before returning. The broker holds no cached state —
//! target lists are snapshots at call time and ownership is queried
//! live, so results always reflect the store as other processes left
//! it.

mod hint;

pub use hint::OwnershipHint;

use crate::input::{InputGate, NoopGate, SuspendGuard};
use crate::native::NativeClipboard;
use crate::selection::{SelectionClass, SelectionError, SelectionPayload, TargetType};

/// Upper bound on the number of targets one enumeration reports.
///
/// Matches the native API's fixed enumeration window; targets beyond
/// the cap are silently dropped.
pub const MAX_TARGETS: usize = 256;

/// Mediator between the application's selection classes and the native
/// clipboard service.
pub struct SelectionBroker<N> {
    native: N,
    gate: Box<dyn InputGate>,
}

impl<N: NativeClipboard> SelectionBroker<N> {
    /// Broker over `native` with no input suspension.
    pub fn new(native: N) -> Self {
        Self::with_gate(native, Box::new(NoopGate))
    }

    /// Broker that brackets every native call sequence with `gate`.
    pub fn with_gate(native: N, gate: Box<dyn InputGate>) -> Self {
        Self { native, gate }
    }

    /// The underlying native service.
    pub fn native(&self) -> &N {
        &self.native
    }

    /// List the data types currently offered under `class`.
    ///
    /// The list is a snapshot at call time, in the native service's
    /// enumeration order (stable within one run), capped at
    /// [`MAX_TARGETS`] entries. A class holding no data yields an
    /// empty list, not an error. Each native name buffer is released
    /// as soon as it has been converted.
    pub fn targets(&self, class: SelectionClass) -> Result<Vec<TargetType>, SelectionError> {
        let _input = SuspendGuard::enter(self.gate.as_ref());
        let names = self.native.enumerate(class, MAX_TARGETS)?;
        let targets: Vec<TargetType> = names
            .into_iter()
            .filter_map(|buf| {
                // Target names are identifiers, not payloads; empty
                // ones cannot name anything and are skipped.
                let name = String::from_utf8_lossy(buf.as_bytes()).into_owned();
                TargetType::new(name).ok()
            })
            .collect();
        tracing::debug!(class = %class, count = targets.len(), "enumerated targets");
        Ok(targets)
    }

    /// Fetch the data offered under `target` for `class`.
    ///
    /// `Ok(None)` is the normal result when the class is empty or does
    /// not offer `target`. On a hit the bytes are copied verbatim into
    /// an owned payload tagged foreign, and the native buffer is
    /// released before returning. Length is authoritative; there is no
    /// transcoding, truncation, or terminator scan, and the fetch is
    /// all-or-nothing.
    pub fn fetch(
        &self,
        class: SelectionClass,
        target: &TargetType,
    ) -> Result<Option<SelectionPayload>, SelectionError> {
        let _input = SuspendGuard::enter(self.gate.as_ref());
        let Some(buf) = self.native.fetch(class, target.as_str())? else {
            tracing::debug!(class = %class, target = %target, "no selection data");
            return Ok(None);
        };
        let payload = SelectionPayload::foreign(buf.as_bytes().to_vec());
        drop(buf);
        tracing::debug!(
            class = %class,
            target = %target,
            len = payload.len(),
            "fetched selection data"
        );
        Ok(Some(payload))
    }

    /// Publish or retract data under `target` for `class`.
    ///
    /// `data = None` removes the target's entry; `clear` erases all
    /// prior content for the class first. Bytes are committed verbatim
    /// with no validation — any byte sequence is acceptable. Repeating
    /// the call with identical arguments changes nothing further.
    pub fn store(
        &self,
        class: SelectionClass,
        target: &TargetType,
        data: Option<&[u8]>,
        clear: bool,
    ) -> Result<(), SelectionError> {
        let _input = SuspendGuard::enter(self.gate.as_ref());
        self.native.store(class, target.as_str(), data, clear)?;
        tracing::debug!(
            class = %class,
            target = %target,
            len = data.map(<[u8]>::len),
            clear,
            "stored selection data"
        );
        Ok(())
    }

    /// Whether this process is the current source of `class`'s
    /// content, queried live from the native service on every call.
    pub fn owns(&self, class: SelectionClass) -> bool {
        let _input = SuspendGuard::enter(self.gate.as_ref());
        self.native.owns(class)
    }
}
