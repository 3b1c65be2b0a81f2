pub mod explain;
pub mod health;
pub mod labs;
pub mod report;
pub mod sessions;
