//! Tool-call surface for a language model
//!
//! The natural-language side lives in the connected model runtime. This
//! module owns the structured side: the JSON tool definitions advertised to
//! the model, and the dispatcher that routes an already-parsed
//! `(operation, arguments)` pair onto the index manager.

pub mod definitions;
pub mod dispatch;

pub use definitions::tool_definitions;
pub use dispatch::dispatch;
