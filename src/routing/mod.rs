//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (host, method, path)
//!     → router.rs (host → tenant route table)
//!     → table.rs (method + path → route)
//!     → matcher.rs (path segments, format suffix, parameters)
//!     → Return: matched Route or DispatchError
//!
//! Route Compilation (at startup):
//!     Resource / Namespace declarations per tenant
//!     → Expand allowed operations into routes
//!     → Reject conflicts and unbacked actions
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in hot path (literal segments and parameters only)
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)

pub mod matcher;
pub mod resource;
pub mod router;
pub mod table;

pub use resource::{Format, Namespace, Operation, Resource};
pub use router::HostRouter;
pub use table::{HandlerId, Matched, Route, RouteError, RouteTable};
