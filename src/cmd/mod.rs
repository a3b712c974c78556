pub mod changelog;
pub mod install;
