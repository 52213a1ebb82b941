#![allow(non_snake_case)]

pub mod cli;
pub mod client;
pub mod config;
pub mod events;
pub mod models;
pub mod runtime;
pub mod server;
pub mod service;
pub mod tasks;
