pub mod create;
pub mod delete;
pub mod edit;
pub mod import;
pub mod lifecycle;
pub mod list;
pub mod show;
pub mod tab;
