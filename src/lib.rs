//! Shared ToDo List Frontend
//!
//! Leptos CSR client for the shared to-do backend: create a list, share it
//! via an invite URL, and keep tasks and a memo in sync by reloading the full
//! list state after every mutation.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod shell;
pub mod todos;
