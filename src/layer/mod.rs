pub mod envelope_layer;
pub mod field_mapping;
pub mod point_layer;

pub use self::envelope_layer::EnvelopeLayer;
pub use self::field_mapping::FieldMapping;
pub use self::point_layer::{PointLayer, PointRecord};
