pub mod reproject;

pub use self::reproject::Reprojection;
