pub mod actor;
pub mod movie;
pub mod node;
pub mod paging;
pub mod payloads;

pub use actor::*;
pub use movie::*;
pub use node::*;
pub use paging::*;
pub use payloads::*;
