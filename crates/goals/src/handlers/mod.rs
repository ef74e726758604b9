//! HTTP request handlers for the goals API.

pub mod goals;
pub mod health;

pub use goals::{
    __path_create_goal, __path_get_goals, __path_update_goal_status, create_goal, get_goals,
    update_goal_status,
};
pub use health::{__path_health_check, health_check};
