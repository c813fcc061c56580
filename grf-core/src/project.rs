//! Project metadata shared by every route in a project.

/// Catalogue entry for an order custom property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomPropertyInfo {
    /// Property key used in [`crate::Order::custom_properties`].
    pub name: String,
    /// Human-readable title.
    pub title: String,
}

/// Metadata of the project that owns the route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectInfo {
    /// Project name.
    pub name: String,
    /// Custom properties defined for orders.
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_properties: Vec<CustomPropertyInfo>,
}

impl ProjectInfo {
    /// Title of a custom property, falling back to its name when the
    /// catalogue has no entry or the entry has an empty title.
    ///
    /// # Examples
    /// ```
    /// use grf_core::{CustomPropertyInfo, ProjectInfo};
    ///
    /// let project = ProjectInfo {
    ///     name: "Deliveries".into(),
    ///     custom_properties: vec![CustomPropertyInfo {
    ///         name: "dock".into(),
    ///         title: "Loading dock".into(),
    ///     }],
    /// };
    /// assert_eq!(project.property_title("dock"), "Loading dock");
    /// assert_eq!(project.property_title("gate"), "gate");
    /// ```
    pub fn property_title<'a>(&'a self, name: &'a str) -> &'a str {
        self.custom_properties
            .iter()
            .find(|info| info.name == name && !info.title.is_empty())
            .map_or(name, |info| info.title.as_str())
    }
}
