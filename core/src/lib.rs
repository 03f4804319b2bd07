mod exec;

pub mod hardware;
pub mod monitor;
pub mod scan;
pub mod store;
