#![cfg(test)]

mod analytics_tests;
mod khatabook_tests;
