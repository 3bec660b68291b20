pub mod course_type;
pub mod event;
pub mod gender;
pub mod meet;
pub mod swim_time;
pub mod swimmer;

pub use course_type::CourseType;
pub use event::Event;
pub use gender::Gender;
pub use meet::Meet;
pub use swim_time::SwimTime;
pub use swimmer::Swimmer;
