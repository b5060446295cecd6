pub mod audit;
pub mod export;
pub mod history;
pub mod show;
