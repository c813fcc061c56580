//! Caveats collected while exporting.

use std::fmt;

/// Content that was exported in degraded form or left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportWarning {
    /// At least one active barrier has a geometry other than a point.
    UnsupportedBarrierGeometry,
    /// At least one active point barrier only delays travel.
    DelayBarriersNotSupported,
    /// The U-turn policy was written as the nearest available value.
    ApproximatedUTurnPolicy,
}

impl fmt::Display for ExportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::UnsupportedBarrierGeometry => "barriers with unsupported geometry were skipped",
            Self::DelayBarriersNotSupported => "delay-only point barriers are not supported",
            Self::ApproximatedUTurnPolicy => {
                "U-turns at dead ends and intersections were exported as allowed everywhere"
            }
        };
        f.write_str(message)
    }
}

/// Ordered, append-only list of warnings for one export.
///
/// # Examples
/// ```
/// use grf_codec::{ExportWarning, ExportWarnings};
///
/// let mut warnings = ExportWarnings::new();
/// warnings.push(ExportWarning::DelayBarriersNotSupported);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(
///     warnings.messages(),
///     vec!["delay-only point barriers are not supported".to_owned()]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportWarnings {
    entries: Vec<ExportWarning>,
}

impl ExportWarnings {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a warning and log it.
    pub fn push(&mut self, warning: ExportWarning) {
        log::warn!("{warning}");
        self.entries.push(warning);
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether `warning` was recorded.
    #[must_use]
    pub fn contains(&self, warning: ExportWarning) -> bool {
        self.entries.contains(&warning)
    }

    /// Warnings in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &ExportWarning> {
        self.entries.iter()
    }

    /// Human-readable messages in recording order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a ExportWarnings {
    type Item = &'a ExportWarning;
    type IntoIter = std::slice::Iter<'a, ExportWarning>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
