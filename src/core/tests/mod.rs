pub mod utils;

mod proptests;
