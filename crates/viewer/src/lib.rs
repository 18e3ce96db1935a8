//! Meridian viewer runtime.
//!
//! The interactive pieces of the portfolio site, mapped to a non-UI target:
//! a shared selection state with change subscription, the carousel
//! fetch/cancel controller, and the globe frame-loop glue that ties marker
//! visibility, horizon fade, click arbitration, and camera recentering
//! together. All state is per-component and flows one way, from fetch
//! results to display state.

pub mod controller;
pub mod fetcher;
pub mod globe;
pub mod selection;
