pub mod entry;
pub mod metadata;
pub mod selection;
pub mod session;
