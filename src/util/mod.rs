pub mod fps;
pub mod time;

pub use fps::FpsCounter;
