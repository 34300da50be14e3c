mod api_models;
mod db;
mod error;
mod extractors;
mod handlers;
mod report;
mod router;
mod validate;

pub use router::{not_found, router};
