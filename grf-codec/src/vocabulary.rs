//! Element and attribute names of the GRF document.
//!
//! Route-import tooling matches these names literally.

/// Format version written on the root element.
pub const GRF_VERSION: &str = "1.1";

/// Root element.
pub const GRFDOC: &str = "GRFDOC";
/// Route description.
pub const ROUTE_INFO: &str = "ROUTE_INFO";
/// Stop list.
pub const STOPS: &str = "STOPS";
/// One stop.
pub const STOP: &str = "STOP";
/// Named point shared by stops and barriers.
pub const LOCATION: &str = "LOCATION";
/// Coordinate pair.
pub const POINT: &str = "POINT";
/// Display name.
pub const TITLE: &str = "TITLE";
/// Free-form comment.
pub const COMMENTS: &str = "COMMENTS";
/// Service time in seconds.
pub const DURATION: &str = "DURATION";
/// Barrier list.
pub const BARRIERS: &str = "BARRIERS";
/// One barrier.
pub const BARRIER: &str = "BARRIER";
/// Routing result.
pub const ROUTERESULT: &str = "ROUTERESULT";
/// Totals summary text.
pub const TOTALSTEXT: &str = "TOTALSTEXT";
/// Total length.
pub const LENGTH: &str = "LENGTH";
/// Total time.
pub const TRAVELTIME: &str = "TRAVELTIME";
/// Driving time.
pub const DRIVINGTIME: &str = "DRIVINGTIME";
/// Direction item list.
pub const ITEMS: &str = "ITEMS";
/// One direction item.
pub const ITEM: &str = "ITEM";
/// Part (stop) index of an item.
pub const PARTID: &str = "PARTID";
/// Item length.
pub const ITEMLENGTH: &str = "ITEMLENGTH";
/// Item time.
pub const ITEMTIME: &str = "ITEMTIME";
/// Item type code.
pub const ITEMTYPE: &str = "ITEMTYPE";
/// Item instruction.
pub const ITEMTEXT: &str = "ITEMTEXT";
/// Item length as display text.
pub const DRIVETEXT: &str = "DRIVETEXT";
/// Legacy maneuver code.
pub const MANEUVERTYPE: &str = "MANEUVERTYPE";
/// Item geometry.
pub const SHAPE: &str = "SHAPE";
/// Polyline geometry.
pub const POLYLINE: &str = "POLYLINE";
/// Polyline part.
pub const PATH: &str = "PATH";
/// Coordinate list.
pub const COORDS: &str = "COORDS";
/// Solver configuration.
pub const ROUTESETTINGS: &str = "ROUTESETTINGS";
/// U-turn policy.
pub const BACKTRACKPOLICY: &str = "BACKTRACKPOLICY";
/// Impedance attribute.
pub const IMPEDANCEATTRIBUTE: &str = "IMPEDANCEATTRIBUTE";
/// Restriction list.
pub const RESTRICTIONS: &str = "RESTRICTIONS";
/// One restriction.
pub const RESTRICTION: &str = "RESTRICTION";
/// Network attribute parameters.
pub const ATTRIBUTEPARAMS: &str = "ATTRIBUTEPARAMS";
/// Attribute owning parameters.
pub const ATTRIBUTE: &str = "ATTRIBUTE";
/// One parameter.
pub const PARAM: &str = "PARAM";
/// Trip plan settings.
pub const TRIPPLANSETTINGS: &str = "TRIPPLANSETTINGS";
/// Departure timestamp.
pub const TRIPSTART: &str = "TRIPSTART";
/// Units for direction lengths.
pub const DIRECTIONSLENGTHUNITS: &str = "DIRECTIONSLENGTHUNITS";
/// Directions detail level.
pub const DIRECTIONSCONTENT: &str = "DIRECTIONSCONTENT";

/// `version` attribute.
pub const ATTR_VERSION: &str = "version";
/// `enabled` attribute.
pub const ATTR_ENABLED: &str = "enabled";
/// `x` attribute.
pub const ATTR_X: &str = "x";
/// `y` attribute.
pub const ATTR_Y: &str = "y";
/// `name` attribute.
pub const ATTR_NAME: &str = "name";
/// `type` attribute.
pub const ATTR_TYPE: &str = "type";
/// `status` attribute.
pub const ATTR_STATUS: &str = "status";
/// `value` attribute.
pub const ATTR_VALUE: &str = "value";
