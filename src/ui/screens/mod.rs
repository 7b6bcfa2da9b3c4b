pub mod diagnostic;
pub mod overview;
pub mod viewer;
