pub mod domains;
pub mod minimax;
pub mod search;
