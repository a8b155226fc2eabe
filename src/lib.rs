pub mod bootstrap;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod editor;
pub mod error;
pub mod git;
pub mod hooks;
pub mod http;
pub mod installer;
pub mod registry;
pub mod report;
pub mod timing;
