pub mod angles;
pub mod cache;
pub mod classify;
pub mod fetch;
pub mod run;
