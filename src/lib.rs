// Library for tests to access modules

pub mod certificates;
pub mod classify;
pub mod config;
pub mod llm;
pub mod mailer;
pub mod models;
pub mod parser;
pub mod report;
pub mod runner;
pub mod version;
