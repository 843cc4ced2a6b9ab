//! Small algorithmic helpers shared between days

mod graph;
mod union_find;

pub use graph::count_walks;
pub use union_find::DisjointSet;
