pub mod box_stats;
pub mod monthly;
