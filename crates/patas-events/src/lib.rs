//! Patas Amigas Event Binding
//!
//! Content swaps destroy and replace the subtree handlers were attached to,
//! so every swap is followed by a full rebind. Rebinding must never
//! accumulate duplicate handlers. Instead of relying on reference equality
//! of handler functions, the registry hands out `BindingId` handles and the
//! `Rebinder` disposes every handle from its previous pass before adding the
//! new set.

mod registry;

pub use registry::{BindingId, EventKind, EventRegistry, Rebinder, Target};
