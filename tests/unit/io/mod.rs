pub mod batch;
pub mod discovery;
