//! Errors raised while exporting a route.
//!
//! Anything in this module aborts the export. Content that can be exported
//! with caveats is reported through [`crate::ExportWarnings`] instead.

use grf_core::RouteError;
use thiserror::Error;

/// Errors raised by a [`crate::TreeWriter`].
#[derive(Debug, Error)]
pub enum WriteError {
    /// The underlying sink failed.
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
    /// An element was closed while none was open.
    #[error("no open element to close")]
    UnbalancedEnd,
    /// An attribute was written after the start tag was completed.
    #[error("attribute `{name}` written outside a start tag")]
    AttributeOutsideStartTag {
        /// Attribute name.
        name: String,
    },
    /// The document was finished with elements still open.
    #[error("element `{name}` was never closed")]
    Unclosed {
        /// Innermost open element.
        name: String,
    },
}

/// Fatal export failures.
///
/// Stop-level variants carry the sequence number of the offending stop.
/// They are detected before the first element is written, so the sink is
/// left untouched. [`ExportError::Write`] may occur mid-document; callers must
/// then discard whatever the sink received.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The route breaks a model invariant such as unique sequence numbers.
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] RouteError),
    /// A stop other than a break has no map location.
    #[error("stop {stop} has no map location")]
    MissingMapLocation {
        /// Sequence number of the stop.
        stop: u32,
    },
    /// A break has no location and no stand-in stop could be found.
    #[error("break stop {stop} cannot be placed on the map")]
    UnresolvedBreakLocation {
        /// Sequence number of the break.
        stop: u32,
    },
    /// A routed route contains a non-break stop without directions.
    #[error("stop {stop} has no directions although the route was routed")]
    MissingDirections {
        /// Sequence number of the stop.
        stop: u32,
    },
    /// Writing the document failed.
    #[error(transparent)]
    Write(#[from] WriteError),
}

impl ExportError {
    /// Sequence number of the stop behind a stop-level failure.
    #[must_use]
    pub const fn stop(&self) -> Option<u32> {
        match self {
            Self::MissingMapLocation { stop }
            | Self::UnresolvedBreakLocation { stop }
            | Self::MissingDirections { stop } => Some(*stop),
            Self::InvalidRoute(_) | Self::Write(_) => None,
        }
    }
}
