pub mod auth;
pub mod chat;
pub mod coord;
pub mod courses;
pub mod dispatch;
pub mod schema;
pub mod shared;
pub mod shell;
pub mod student;
pub mod teacher;
