pub mod logging;
pub mod print;
pub mod prompt;

#[cfg(test)]
mod logging_test;
#[cfg(test)]
mod prompt_test;
