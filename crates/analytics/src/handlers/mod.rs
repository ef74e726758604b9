//! HTTP request handlers for the analytics API.

pub mod exercises;
pub mod stats;

pub use exercises::{__path_health_check, __path_list_exercises, health_check, list_exercises};
pub use stats::{
    __path_get_stats, __path_get_user_stats, __path_get_weekly_stats, get_stats, get_user_stats,
    get_weekly_stats,
};
