pub mod links;
pub mod stations;
