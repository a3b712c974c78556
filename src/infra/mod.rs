pub mod git;
pub mod proxy;
