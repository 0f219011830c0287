//! # edu-core
//!
//! Session-independent building blocks for the EduAgent client.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Front-end                            │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐  │
//! │  │ Route Guard  │   │  ApiClient   │───│    AuthStore     │  │
//! │  │ (pure fn)    │   │ (edu-client) │   │ (token owner)    │  │
//! │  └──────────────┘   └──────────────┘   └──────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this crate performs I/O. The HTTP client lives in
//! `edu-client`; front-ends supply their own `AuthStore`.

pub mod auth_store;
pub mod error;
pub mod guard;
pub mod model;
pub mod route;
pub mod validation;

pub use auth_store::{AuthStore, MemoryAuthStore, TOKEN_KEY};
pub use error::{ClientError, Result};
pub use guard::{evaluate, AuthSnapshot, Capability, GuardOutcome};
pub use model::{Role, User};
pub use route::Route;
