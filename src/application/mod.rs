pub mod commands;
pub mod todo_service;
