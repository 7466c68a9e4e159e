pub mod error;
pub mod fleet;
pub mod json;
pub mod matching;
pub mod params;
pub mod request_handler;
pub mod scenario;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
