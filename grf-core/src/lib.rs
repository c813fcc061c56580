//! Core domain types for the GRF route exporter.
//!
//! A solved [`Route`] is a read-only input: an ordered set of [`Stop`]s, each
//! optionally carrying the turn-by-turn [`Direction`]s that lead to it. The
//! solver configuration and the break-location policy are external
//! collaborators, modelled by the [`SolverSettings`] and [`BreakLocator`]
//! traits so the codec never depends on a concrete solver.
//!
//! Coordinates are WGS84 with `x = longitude` and `y = latitude`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod barrier;
pub mod breaks;
pub mod direction;
pub mod project;
pub mod route;
pub mod settings;
pub mod stop;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use barrier::{Barrier, BarrierEffect};
pub use breaks::{AdjacentStopLocator, BreakLocator};
pub use direction::{Direction, ManeuverType};
pub use project::{CustomPropertyInfo, ProjectInfo};
pub use route::{Route, RouteError};
pub use settings::{
    NetworkAttribute, Restriction, SolverSettings, StaticSolverSettings, UTurnPolicy,
};
pub use stop::{Location, Order, PropertyValue, Stop, StopKind};
