//! Caller-supplied export settings.
//!
//! Everything that would otherwise come from the host's regional settings is
//! passed explicitly so an export is deterministic.

/// Measurement system for lengths shown to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Kilometres.
    #[default]
    Metric,
    /// Miles.
    UsCustomary,
}

impl UnitSystem {
    /// Value written to `DIRECTIONSLENGTHUNITS`.
    #[must_use]
    pub const fn directions_units(self) -> &'static str {
        match self {
            Self::Metric => "kilometers",
            Self::UsCustomary => "miles",
        }
    }
}

/// Whether approximate policy remaps are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossyRemapPolicy {
    /// Remap without telling the caller.
    #[default]
    Silent,
    /// Remap and record a warning.
    Warn,
}

/// Words and prefixes used in generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLabels {
    /// Text for break maneuvers.
    pub break_label: String,
    /// Short kilometre unit.
    pub kilometers: String,
    /// Short mile unit.
    pub miles: String,
    /// Singular hour.
    pub hour: String,
    /// Plural hours.
    pub hours: String,
    /// Singular minute.
    pub minute: String,
    /// Plural minutes.
    pub minutes: String,
    /// Prefix for the first depot visit.
    pub start_prefix: String,
    /// Prefix for the last depot visit.
    pub finish_prefix: String,
    /// Prefix for intermediate depot visits.
    pub renewal_prefix: String,
}

impl Default for ExportLabels {
    fn default() -> Self {
        Self {
            break_label: "Lunch".to_owned(),
            kilometers: "km".to_owned(),
            miles: "mi".to_owned(),
            hour: "hour".to_owned(),
            hours: "hours".to_owned(),
            minute: "minute".to_owned(),
            minutes: "minutes".to_owned(),
            start_prefix: "Start: ".to_owned(),
            finish_prefix: "Finish: ".to_owned(),
            renewal_prefix: "Renewal: ".to_owned(),
        }
    }
}

/// Settings for one export.
///
/// # Examples
/// ```
/// use grf_codec::{ExportOptions, LossyRemapPolicy, UnitSystem};
///
/// let options = ExportOptions::new(UnitSystem::UsCustomary)
///     .with_custom_properties(["dock"])
///     .with_uturn_remap(LossyRemapPolicy::Warn);
/// assert_eq!(options.custom_properties, vec!["dock".to_owned()]);
/// assert_eq!(options.units.directions_units(), "miles");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportOptions {
    /// Units for length text and direction lengths.
    pub units: UnitSystem,
    /// Order custom properties to include in stop comments, in order.
    pub custom_properties: Vec<String>,
    /// Generated text.
    pub labels: ExportLabels,
    /// Reporting of the approximate U-turn remap.
    pub uturn_remap: LossyRemapPolicy,
}

impl ExportOptions {
    /// Options for `units` with default labels and no custom properties.
    #[must_use]
    pub fn new(units: UnitSystem) -> Self {
        Self {
            units,
            ..Self::default()
        }
    }

    /// Select the custom properties to include in comments.
    #[must_use]
    pub fn with_custom_properties<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_properties = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the generated text.
    #[must_use]
    pub fn with_labels(mut self, labels: ExportLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Choose whether the U-turn approximation is reported.
    #[must_use]
    pub const fn with_uturn_remap(mut self, policy: LossyRemapPolicy) -> Self {
        self.uturn_remap = policy;
        self
    }

    /// Short unit name for lengths.
    #[must_use]
    pub fn length_unit(&self) -> &str {
        match self.units {
            UnitSystem::Metric => &self.labels.kilometers,
            UnitSystem::UsCustomary => &self.labels.miles,
        }
    }
}
