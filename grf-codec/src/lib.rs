//! Export of solved routes as GRF documents.
//!
//! [`RouteExporter`] walks a [`grf_core::Route`] and writes the GRF element
//! tree into any [`TreeWriter`]: stops first, then barriers, the routing
//! result with its direction items, and finally the solver settings. Content
//! the format cannot hold is reported through [`ExportWarnings`]; problems
//! that make the document meaningless abort with [`ExportError`] before the
//! first element is written.
//!
//! All text rendering is locale-invariant and driven by [`ExportOptions`].

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod barriers;
mod directions;
pub mod error;
pub mod export;
pub mod format;
pub mod geometry;
mod location;
pub mod maneuver;
pub mod options;
pub mod settings;
mod stops;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod vocabulary;
pub mod warnings;
pub mod writer;

pub use error::{ExportError, WriteError};
pub use export::{ExportContext, GrfDocument, RouteExporter};
pub use options::{ExportLabels, ExportOptions, LossyRemapPolicy, UnitSystem};
pub use settings::BacktrackPolicy;
pub use warnings::{ExportWarning, ExportWarnings};
pub use writer::{TreeWriter, XmlTreeWriter};
