//! The `ROUTESETTINGS` section.
//!
//! Translates the solver configuration into the smaller vocabulary the
//! document supports.

use chrono::NaiveDateTime;
use grf_core::{SolverSettings, UTurnPolicy};

use crate::error::WriteError;
use crate::format::format_timestamp;
use crate::options::{ExportOptions, LossyRemapPolicy};
use crate::vocabulary::{
    ATTR_NAME, ATTR_STATUS, ATTR_TYPE, ATTR_VALUE, ATTRIBUTE, ATTRIBUTEPARAMS, BACKTRACKPOLICY,
    DIRECTIONSCONTENT, DIRECTIONSLENGTHUNITS, IMPEDANCEATTRIBUTE, PARAM, RESTRICTION,
    RESTRICTIONS, ROUTESETTINGS, TRIPPLANSETTINGS, TRIPSTART,
};
use crate::warnings::{ExportWarning, ExportWarnings};
use crate::writer::TreeWriter;

const IMPEDANCE: &str = "Time";
const RESTRICTION_TYPE: &str = "strict";
const RESTRICTION_STATUS: &str = "on";
const DIRECTIONS_CONTENT: &str = "all";

/// U-turn vocabulary of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacktrackPolicy {
    /// U-turns are not allowed.
    Disable,
    /// U-turns only at dead ends.
    DeadEnd,
    /// U-turns allowed everywhere.
    Allow,
}

impl BacktrackPolicy {
    /// Nearest document value for a solver policy.
    ///
    /// Dead ends and intersections have no exact counterpart and become
    /// [`BacktrackPolicy::Allow`]; see [`BacktrackPolicy::is_exact_for`].
    ///
    /// # Examples
    /// ```
    /// use grf_codec::settings::BacktrackPolicy;
    /// use grf_core::UTurnPolicy;
    ///
    /// let policy = BacktrackPolicy::from_uturn(UTurnPolicy::AtDeadEndsAndIntersections);
    /// assert_eq!(policy.as_str(), "allow");
    /// ```
    #[must_use]
    pub const fn from_uturn(policy: UTurnPolicy) -> Self {
        match policy {
            UTurnPolicy::Nowhere => Self::Disable,
            UTurnPolicy::AtDeadEnds => Self::DeadEnd,
            UTurnPolicy::AtDeadEndsAndIntersections => Self::Allow,
        }
    }

    /// Whether the document value means the same as the solver policy.
    #[must_use]
    pub const fn is_exact_for(policy: UTurnPolicy) -> bool {
        !matches!(policy, UTurnPolicy::AtDeadEndsAndIntersections)
    }

    /// Value written to `BACKTRACKPOLICY`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disable => "disable",
            Self::DeadEnd => "deadend",
            Self::Allow => "allow",
        }
    }
}

/// Write `ROUTESETTINGS` for `settings`.
pub(crate) fn write_route_settings<T, S>(
    writer: &mut T,
    settings: &S,
    start_time: NaiveDateTime,
    options: &ExportOptions,
    warnings: &mut ExportWarnings,
) -> Result<(), WriteError>
where
    T: TreeWriter,
    S: SolverSettings,
{
    let uturn = settings.uturn_policy();
    if !BacktrackPolicy::is_exact_for(uturn) && options.uturn_remap == LossyRemapPolicy::Warn {
        warnings.push(ExportWarning::ApproximatedUTurnPolicy);
    }
    writer.start_element(ROUTESETTINGS)?;
    writer.value_element(BACKTRACKPOLICY, BacktrackPolicy::from_uturn(uturn).as_str())?;
    writer.start_element(IMPEDANCEATTRIBUTE)?;
    writer.attribute(ATTR_NAME, IMPEDANCE)?;
    writer.end_element()?;
    write_restrictions(writer, settings)?;
    write_attribute_parameters(writer, settings)?;
    writer.start_element(TRIPPLANSETTINGS)?;
    writer.value_element(TRIPSTART, &format_timestamp(start_time))?;
    writer.value_element(DIRECTIONSLENGTHUNITS, options.units.directions_units())?;
    writer.value_element(DIRECTIONSCONTENT, DIRECTIONS_CONTENT)?;
    writer.end_element()?;
    writer.end_element()
}

fn write_restrictions<T, S>(writer: &mut T, settings: &S) -> Result<(), WriteError>
where
    T: TreeWriter,
    S: SolverSettings,
{
    writer.start_element(RESTRICTIONS)?;
    for name in settings.enabled_restrictions() {
        writer.start_element(RESTRICTION)?;
        writer.attribute(ATTR_NAME, name)?;
        writer.attribute(ATTR_TYPE, RESTRICTION_TYPE)?;
        writer.attribute(ATTR_STATUS, RESTRICTION_STATUS)?;
        writer.end_element()?;
    }
    writer.end_element()
}

fn write_attribute_parameters<T, S>(writer: &mut T, settings: &S) -> Result<(), WriteError>
where
    T: TreeWriter,
    S: SolverSettings,
{
    let mut parameterised = settings
        .network_attributes()
        .iter()
        .filter(|attribute| !attribute.parameters.is_empty())
        .peekable();
    if parameterised.peek().is_none() {
        return Ok(());
    }
    writer.start_element(ATTRIBUTEPARAMS)?;
    for attribute in parameterised {
        writer.start_element(ATTRIBUTE)?;
        writer.attribute(ATTR_NAME, &attribute.name)?;
        for parameter in &attribute.parameters {
            let value = settings
                .attribute_parameter_value(&attribute.name, parameter)
                .unwrap_or_default();
            writer.start_element(PARAM)?;
            writer.attribute(ATTR_NAME, parameter)?;
            writer.attribute(ATTR_VALUE, &value)?;
            writer.end_element()?;
        }
        writer.end_element()?;
    }
    writer.end_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Node, TreeRecorder};
    use grf_core::StaticSolverSettings;
    use grf_core::test_support::start_time;
    use rstest::rstest;

    fn render(settings: &StaticSolverSettings, options: &ExportOptions) -> (Node, ExportWarnings) {
        let mut writer = TreeRecorder::new();
        let mut warnings = ExportWarnings::new();
        write_route_settings(&mut writer, settings, start_time(), options, &mut warnings)
            .expect("settings written");
        (writer.into_root().expect("root"), warnings)
    }

    #[rstest]
    #[case(UTurnPolicy::Nowhere, "disable")]
    #[case(UTurnPolicy::AtDeadEnds, "deadend")]
    #[case(UTurnPolicy::AtDeadEndsAndIntersections, "allow")]
    fn uturn_policies_map_to_backtrack_values(#[case] policy: UTurnPolicy, #[case] expected: &str) {
        let (root, warnings) = render(&StaticSolverSettings::new(policy), &ExportOptions::default());
        let value = root.child(BACKTRACKPOLICY).and_then(|node| node.attribute(ATTR_VALUE));
        assert_eq!(value, Some(expected));
        assert!(warnings.is_empty());
    }

    #[rstest]
    fn lossy_remap_warns_when_requested() {
        let settings = StaticSolverSettings::new(UTurnPolicy::AtDeadEndsAndIntersections);
        let options = ExportOptions::default().with_uturn_remap(LossyRemapPolicy::Warn);
        let (_, warnings) = render(&settings, &options);
        assert!(warnings.contains(ExportWarning::ApproximatedUTurnPolicy));
    }

    #[rstest]
    fn only_enabled_restrictions_are_written() {
        let settings = StaticSolverSettings::default()
            .with_restriction("Oneway", true)
            .with_restriction("Avoid Toll Roads", false);
        let (root, _) = render(&settings, &ExportOptions::default());
        let restrictions = root.child(RESTRICTIONS).expect("restrictions");
        let names: Vec<Option<&str>> = restrictions
            .children
            .iter()
            .map(|node| node.attribute(ATTR_NAME))
            .collect();
        assert_eq!(names, vec![Some("Oneway")]);
        let first = restrictions.child(RESTRICTION).expect("restriction");
        assert_eq!(first.attribute(ATTR_TYPE), Some("strict"));
        assert_eq!(first.attribute(ATTR_STATUS), Some("on"));
    }

    #[rstest]
    fn attribute_parameters_are_omitted_without_parameters() {
        let settings = StaticSolverSettings::default().with_attribute("Oneway", Vec::<String>::new());
        let (root, _) = render(&settings, &ExportOptions::default());
        assert!(root.child(ATTRIBUTEPARAMS).is_none());
    }

    #[rstest]
    fn attribute_parameters_fall_back_to_empty_values() {
        let settings = StaticSolverSettings::default()
            .with_attribute("Height", ["VehicleHeight", "Tolerance"])
            .with_parameter_value("Height", "VehicleHeight", "4.1");
        let (root, _) = render(&settings, &ExportOptions::default());
        let attribute = root
            .path(&[ATTRIBUTEPARAMS, ATTRIBUTE])
            .expect("attribute written");
        assert_eq!(attribute.attribute(ATTR_NAME), Some("Height"));
        let values: Vec<(Option<&str>, Option<&str>)> = attribute
            .children_named(PARAM)
            .map(|param| (param.attribute(ATTR_NAME), param.attribute(ATTR_VALUE)))
            .collect();
        assert_eq!(
            values,
            vec![
                (Some("VehicleHeight"), Some("4.1")),
                (Some("Tolerance"), Some("")),
            ]
        );
    }

    #[rstest]
    fn trip_plan_reports_start_and_units() {
        let options = ExportOptions::new(crate::UnitSystem::UsCustomary);
        let (root, _) = render(&StaticSolverSettings::default(), &options);
        let trip = root.child(TRIPPLANSETTINGS).expect("trip plan");
        assert_eq!(trip.child_names(), vec![TRIPSTART, DIRECTIONSLENGTHUNITS, DIRECTIONSCONTENT]);
        let value = |name: &str| trip.child(name).and_then(|node| node.attribute(ATTR_VALUE));
        assert_eq!(value(TRIPSTART), Some("2024-03-01T08:00:00"));
        assert_eq!(value(DIRECTIONSLENGTHUNITS), Some("miles"));
        assert_eq!(value(DIRECTIONSCONTENT), Some("all"));
    }
}
