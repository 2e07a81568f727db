pub mod advice;
pub mod analytics;
