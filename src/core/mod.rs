pub mod calculator;
pub mod form;
pub mod stats;
pub mod validate;
