//! # System Lifecycle
//!
//! Starts the two store actors, hands out their clients, and stops them again.
//!
//! ## The StorefrontSystem Pattern
//!
//! ```rust,ignore
//! let system = StorefrontSystem::start(&config)?;
//! let app = build_router(AppState::new(&system), config.max_body_bytes);
//! // ... serve ...
//! system.shutdown().await?;
//! ```
//!
//! The collections are independent, so there is no wiring between actors: each one
//! is spawned on its own task and owns its own snapshot file.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors drain** - queued requests are still answered, then `recv()` returns `None`
//! 3. **Await completion** - every actor task is joined
//!
//! Clones of the clients held elsewhere (the router state, for instance) keep their actor
//! alive, so the HTTP server must be stopped before `shutdown` is awaited.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the compact `tracing` subscriber. Store actors tag every
//! event with `entity_type`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and mutations
//! RUST_LOG=debug cargo run     # full payloads
//! ```

pub mod storefront_system;
pub mod tracing;

pub use storefront_system::*;
pub use tracing::*;
