pub mod quiz;
pub mod score;
