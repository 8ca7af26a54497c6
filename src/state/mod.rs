//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only shared mutable state in the client; everything
//! else is page-local signals.

pub mod session;
