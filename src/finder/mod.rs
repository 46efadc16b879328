//! Intercept finder orchestrating subdivision, clustering, and candidate
//! emission for one event at a time.
//!
//! Modules
//! - [`params`] – configuration types used by the finder and the demo tool.
//! - `pipeline` – the [`InterceptFinder`] implementation.
//! - `workspace` – the active-cell map and hit stamps reused across events.
//!
//! Key Ideas
//! - Lookup tables depend only on the layout and are shared behind an `Arc`;
//!   everything that depends on the event lives in the workspace and is
//!   cleared before each call.
//! - Candidates borrow the caller's hits, so they cannot outlive the event.

pub mod params;
mod pipeline;
mod workspace;

pub use params::FinderParams;
pub use pipeline::InterceptFinder;
pub use workspace::FinderWorkspace;
