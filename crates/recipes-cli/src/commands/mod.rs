pub mod catalog;
pub mod dispatch;
pub mod recipe;
pub mod schema;
pub mod serve;
pub mod shared;
