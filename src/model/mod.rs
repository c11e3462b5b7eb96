pub mod id;
pub mod node;
pub mod sequence;

pub use id::*;
pub use node::*;
pub use sequence::*;
