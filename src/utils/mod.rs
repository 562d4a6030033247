//! Small shared helpers.

pub mod class;
pub mod date;
pub mod mime;
pub mod path;
