//! Solver configuration consumed by the exporter.
//!
//! The solver owns its settings object; the exporter only reads it through
//! the [`SolverSettings`] trait. [`StaticSolverSettings`] is a plain-data
//! implementation for callers that receive settings as serialised input.

use std::collections::BTreeMap;

/// Where vehicles may turn around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UTurnPolicy {
    /// U-turns are never allowed.
    Nowhere,
    /// U-turns only at dead ends.
    #[default]
    AtDeadEnds,
    /// U-turns at dead ends and intersections.
    AtDeadEndsAndIntersections,
}

/// A named network restriction and whether the solver applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restriction {
    /// Restriction attribute name.
    pub name: String,
    /// Whether the restriction is currently enabled.
    pub enabled: bool,
}

/// A network attribute and the parameters it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkAttribute {
    /// Attribute name.
    pub name: String,
    /// Declared parameter names, in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameters: Vec<String>,
}

/// Read access to the solver configuration.
///
/// # Examples
///
/// ```rust
/// use grf_core::{NetworkAttribute, Restriction, SolverSettings, UTurnPolicy};
///
/// struct NoRestrictions;
///
/// impl SolverSettings for NoRestrictions {
///     fn uturn_policy(&self) -> UTurnPolicy {
///         UTurnPolicy::Nowhere
///     }
///     fn restrictions(&self) -> &[Restriction] {
///         &[]
///     }
///     fn network_attributes(&self) -> &[NetworkAttribute] {
///         &[]
///     }
///     fn attribute_parameter_value(&self, _attribute: &str, _parameter: &str) -> Option<String> {
///         None
///     }
/// }
///
/// assert_eq!(NoRestrictions.uturn_policy(), UTurnPolicy::Nowhere);
/// ```
pub trait SolverSettings {
    /// The U-turn policy used while solving.
    fn uturn_policy(&self) -> UTurnPolicy;

    /// All known restrictions, enabled or not.
    fn restrictions(&self) -> &[Restriction];

    /// All network attributes, with or without parameters.
    fn network_attributes(&self) -> &[NetworkAttribute];

    /// Value of `parameter` on `attribute`, or `None` when unset.
    fn attribute_parameter_value(&self, attribute: &str, parameter: &str) -> Option<String>;

    /// Names of the enabled restrictions, in declaration order.
    fn enabled_restrictions(&self) -> impl Iterator<Item = &str> {
        self.restrictions()
            .iter()
            .filter(|restriction| restriction.enabled)
            .map(|restriction| restriction.name.as_str())
    }
}

/// Solver settings held as plain data.
///
/// # Examples
/// ```
/// use grf_core::{SolverSettings, StaticSolverSettings, UTurnPolicy};
///
/// let settings = StaticSolverSettings::new(UTurnPolicy::Nowhere)
///     .with_restriction("Oneway", true)
///     .with_parameter_value("Height", "VehicleHeight", "4.1");
/// assert_eq!(settings.enabled_restrictions().collect::<Vec<_>>(), vec!["Oneway"]);
/// assert_eq!(
///     settings.attribute_parameter_value("Height", "VehicleHeight"),
///     Some("4.1".to_owned())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticSolverSettings {
    /// U-turn policy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub uturn_policy: UTurnPolicy,
    /// Restrictions and their state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub restrictions: Vec<Restriction>,
    /// Network attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub network_attributes: Vec<NetworkAttribute>,
    /// Parameter values keyed by attribute, then parameter name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parameter_values: BTreeMap<String, BTreeMap<String, String>>,
}

impl StaticSolverSettings {
    /// Construct settings with the given U-turn policy and nothing else.
    pub fn new(uturn_policy: UTurnPolicy) -> Self {
        Self {
            uturn_policy,
            ..Self::default()
        }
    }

    /// Add a restriction.
    #[must_use]
    pub fn with_restriction(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.restrictions.push(Restriction {
            name: name.into(),
            enabled,
        });
        self
    }

    /// Add a network attribute declaring `parameters`.
    #[must_use]
    pub fn with_attribute<I, P>(mut self, name: impl Into<String>, parameters: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        self.network_attributes.push(NetworkAttribute {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Set a parameter value.
    #[must_use]
    pub fn with_parameter_value(
        mut self,
        attribute: impl Into<String>,
        parameter: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.parameter_values
            .entry(attribute.into())
            .or_default()
            .insert(parameter.into(), value.into());
        self
    }
}

impl SolverSettings for StaticSolverSettings {
    fn uturn_policy(&self) -> UTurnPolicy {
        self.uturn_policy
    }

    fn restrictions(&self) -> &[Restriction] {
        &self.restrictions
    }

    fn network_attributes(&self) -> &[NetworkAttribute] {
        &self.network_attributes
    }

    fn attribute_parameter_value(&self, attribute: &str, parameter: &str) -> Option<String> {
        self.parameter_values
            .get(attribute)
            .and_then(|values| values.get(parameter))
            .cloned()
    }
}
