pub mod response;
pub mod test_utils;
