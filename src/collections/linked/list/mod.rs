mod indexed_list;
mod iter;
mod node;

pub use indexed_list::*;
pub use iter::*;
pub(crate) use node::*;
