// Modules under core, split into files for convenience
mod cell;
mod element;
mod header;
mod keyword;
mod rmat;
mod row;
mod survey;
mod twiss;

// Re-exports of the key public data structures
pub use cell::{Cell, Scalar};
pub use element::{Element, Parameter, COMMON_COLUMNS};
pub use header::{FileType, Header};
pub use keyword::{Keyword, Layout};
pub use rmat::{Rmat, RMAT_COLUMNS};
pub use row::{Payload, Row, Trailer};
pub use survey::{Survey, SurveySummary};
pub use twiss::{Twiss, TwissSummary};
