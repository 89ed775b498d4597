//! clipsel — a selection broker over the window system's clipboard
//! service.
//!
//! The broker mediates between an application's independent selection
//! classes (primary, secondary, clipboard) and the single shared
//! native store backing each class. Four operations cover the whole
//! contract: enumerate the targets a class offers, fetch data of a
//! chosen target, publish or retract data, and query whether this
//! process is the class's current source.
//!
//! Data crossing the boundary is environment-controlled: it may be
//! malformed, arbitrarily large, or absent. The broker moves it
//! without mutation — fetched bytes are copied verbatim out of the
//! foreign allocation into a [`SelectionPayload`] whose length is
//! authoritative, tagged [`Provenance::Foreign`] so downstream
//! consumers know decoding is still owed. Absence is a normal result
//! (`Ok(None)`), distinct from naming a class that does not exist.
//!
//! Architecture: the native service sits behind the
//! [`NativeClipboard`] trait, its allocations wrapped in [`NativeBuf`]
//! for deterministic release. Every native call sequence runs inside a
//! [`SuspendGuard`] taken from an [`InputGate`], so unrelated input
//! processing cannot re-enter the clipboard mid-sequence; the guard
//! releases on every exit path. All operations are synchronous and
//! blocking — local IPC with the windowing service, no cancellation or
//! timeout semantics.
//!
//! Target lists are snapshots in the native enumeration order, stable
//! within one run and capped at [`MAX_TARGETS`] entries. Ownership is
//! queried live on every call, never cached.

pub mod broker;
pub mod input;
pub mod native;
pub mod selection;

pub use broker::{MAX_TARGETS, OwnershipHint, SelectionBroker};
pub use input::{InputGate, NestingGate, NoopGate, SuspendGuard};
pub use native::{MemClipboard, NativeBuf, NativeClipboard, NativeError};
pub use selection::{Provenance, SelectionClass, SelectionError, SelectionPayload, TargetType};
