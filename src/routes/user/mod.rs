pub mod create;
pub mod follow;
