pub mod leaves;
pub mod shared;
