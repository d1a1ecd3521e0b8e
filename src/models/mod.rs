pub mod common;
pub mod movie;
pub mod review;
pub mod state;
pub mod video;

pub use common::*;
pub use movie::*;
pub use review::*;
pub use state::*;
pub use video::*;
