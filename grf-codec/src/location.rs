//! The `LOCATION` node shared by stops and barriers.

use geo::Coord;

use crate::error::WriteError;
use crate::format::format_number;
use crate::vocabulary::{ATTR_X, ATTR_Y, COMMENTS, LOCATION, POINT, TITLE};
use crate::writer::TreeWriter;

/// Write `LOCATION` → `POINT[x,y]`, `TITLE` and, when given, `COMMENTS`.
///
/// An empty comment still produces an empty `COMMENTS` element; `None`
/// leaves it out.
pub fn write_location<T: TreeWriter>(
    writer: &mut T,
    point: Coord<f64>,
    title: &str,
    comments: Option<&str>,
) -> Result<(), WriteError> {
    writer.start_element(LOCATION)?;
    writer.start_element(POINT)?;
    writer.attribute(ATTR_X, &format_number(point.x))?;
    writer.attribute(ATTR_Y, &format_number(point.y))?;
    writer.end_element()?;
    writer.text_element(TITLE, title)?;
    if let Some(comments) = comments {
        writer.start_element(COMMENTS)?;
        if !comments.is_empty() {
            writer.text(comments)?;
        }
        writer.end_element()?;
    }
    writer.end_element()
}
