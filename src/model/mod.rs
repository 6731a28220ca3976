pub mod factors;
pub mod scores;
