pub mod use_insight_rotation;

pub use use_insight_rotation::use_insight_rotation;
