//! MongoDB persistence for the feedback service

mod database;
mod feedback_repo;

pub use database::{connect, MongoConfig, MongoHealthProbe};
pub use feedback_repo::MongoFeedbackRepository;
