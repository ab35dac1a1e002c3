pub mod into_cause;
pub mod result_ext;
