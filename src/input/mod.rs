//! Input processing module
//! Handles file detection, text extraction, and job-post acquisition

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod job_post;

pub use job_post::JobPostSource;
pub use manager::InputManager;
