pub mod ad_collector;
pub mod ad_library;
pub mod recraft_client;
pub mod together_client;

pub use ad_collector::*;
pub use ad_library::*;
pub use recraft_client::*;
pub use together_client::*;
