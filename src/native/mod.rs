//! Native clipboard service boundary.
//!
//! The window system's clipboard is an opaque service behind the
//! [`NativeClipboard`] trait: four primitives, each parameterized by a
//! selection class. Buffers coming back from the service are foreign
//! allocations; they are wrapped in [`NativeBuf`] at the boundary so
//! release is deterministic and no raw pointer escapes the call.

mod buf;
pub mod mem;

pub use buf::{FreeFn, NativeBuf};
pub use mem::MemClipboard;

use crate::selection::SelectionClass;

/// Opaque native-service failure.
///
/// The native layer is a black box; its failures are rare and carry no
/// finer classification. Callers own any retry policy.
#[derive(Debug, Clone, thiserror::Error)]
#[error("native clipboard: {0}")]
pub struct NativeError(String);

impl NativeError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// The system clipboard service, one store per selection class.
///
/// Every [`NativeBuf`] an implementation returns transfers ownership
/// to the caller: the caller releases it (on drop), never the service.
/// Implementations must not interleave stores between classes — each
/// class's store is independent.
pub trait NativeClipboard {
    /// List up to `max` target names offered under `class`, in the
    /// service's enumeration order. One buffer per name.
    fn enumerate(&self, class: SelectionClass, max: usize) -> Result<Vec<NativeBuf>, NativeError>;

    /// Fetch the data stored under `target` for `class`, or `None`
    /// when the class holds no such entry.
    fn fetch(
        &self,
        class: SelectionClass,
        target: &str,
    ) -> Result<Option<NativeBuf>, NativeError>;

    /// Commit `data` under `target` for `class`. `None` removes the
    /// target's entry; `clear` erases all prior content for the class
    /// before the commit is applied.
    fn store(
        &self,
        class: SelectionClass,
        target: &str,
        data: Option<&[u8]>,
        clear: bool,
    ) -> Result<(), NativeError>;

    /// Whether this process is the current source of `class`'s content.
    fn owns(&self, class: SelectionClass) -> bool;
}
