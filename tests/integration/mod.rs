//! Integration tests for scoped context management

mod logging_init;
mod test_utils;
