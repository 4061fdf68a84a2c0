pub mod converter;
pub mod ply;
