pub mod newsroom;

pub use newsroom::Newsroom;
