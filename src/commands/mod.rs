pub mod create;
pub mod list;
pub mod menu;
pub mod run;
