pub mod lists;
pub mod search;
