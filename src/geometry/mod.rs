pub mod location;
pub mod rectangle;

pub use self::location::Location;
pub use self::rectangle::{placeholder_polygon, Footprint};
