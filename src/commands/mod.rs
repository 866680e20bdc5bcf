pub mod status;
pub mod update;
pub mod upload;

pub use status::*;
pub use update::*;
pub use upload::*;
