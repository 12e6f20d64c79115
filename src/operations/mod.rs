pub mod creation;
pub mod selection;
pub mod transfer;
pub mod walk;
