pub mod cleanup_loop;
pub mod task_runner;
