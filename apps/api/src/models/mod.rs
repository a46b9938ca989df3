pub mod applicant;
pub mod context;
pub mod job;
pub mod resume;
pub mod user;
