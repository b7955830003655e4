pub mod builder;
pub mod inversion;
pub mod request;
pub mod types;
