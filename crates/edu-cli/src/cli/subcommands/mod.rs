pub mod auth;
pub mod coord;
pub mod courses;
pub mod teacher;

pub use auth::AuthCommands;
pub use coord::CoordCommands;
pub use courses::CoursesCommands;
pub use teacher::TeacherCommands;
