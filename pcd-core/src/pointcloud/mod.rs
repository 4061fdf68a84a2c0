pub mod decimation;
pub mod point;
pub mod splat;
pub mod table;
