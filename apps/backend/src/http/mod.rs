pub mod envelope;

pub use envelope::{respond, Message};
