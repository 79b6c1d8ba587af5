pub mod answers;
pub mod assessment;
pub mod config;
pub mod question;
