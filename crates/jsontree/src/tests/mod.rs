mod property_scratch;
pub mod utils;
