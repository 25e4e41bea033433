//! Graph core: indexing, styling, reachability and view rebuilds.
//!
//! Everything here is a pure function over explicit values and never
//! touches the DOM.

pub mod collect;
pub mod explorer;
pub mod index;
mod load;
pub mod search;
pub mod style;
mod types;
pub mod view;

pub use collect::{Subgraph, collect};
pub use explorer::{GraphExplorer, SearchOutcome};
pub use index::{DegreeMap, EdgeIndex};
pub use load::GraphLoadError;
pub use style::{NodeColor, StyledNode};
pub use types::{Edge, EdgeId, GraphSource, NodeId};
pub use view::{View, rebuild};
