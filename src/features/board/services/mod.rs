pub mod task_operations;
