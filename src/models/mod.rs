pub mod task;

// Export the Task and Stage types for use throughout the app
pub use task::{Stage, Task};
