pub mod dynamic;
pub mod save;
