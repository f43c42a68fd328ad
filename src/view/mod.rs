pub mod classifier;
pub mod html;
pub mod model;

pub use classifier::{AuctionViewClassifier, Classification};
pub use model::{BidAction, DisplayZone, Region, Row, RowStatus, ViewState};
