/*
 * weave-runtime
 * Copyright (c) 2025 Posit, PBC
 *
 * File access abstraction for the weave inclusion engine.
 *
 * This crate provides a trait-based abstraction for the few file operations
 * the engine performs, allowing it to run against different backends:
 *
 * - NativeRuntime: real filesystem access using std (default)
 * - MemoryRuntime: in-memory documents, for tests and embedding
 */

mod memory;
mod native;
mod traits;

// Re-export core types (API surface)
pub use traits::{RuntimeError, RuntimeResult, SystemRuntime};

// Re-export runtime implementations
pub use memory::MemoryRuntime;
pub use native::NativeRuntime;

/// Create a default runtime for the current platform.
pub fn default_runtime() -> NativeRuntime {
    NativeRuntime::new()
}
