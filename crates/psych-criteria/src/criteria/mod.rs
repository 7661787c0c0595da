pub mod adhd;
pub mod psychosis;
pub mod ptsd;
