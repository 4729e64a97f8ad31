pub mod line_item;
pub mod result;
pub mod site;

pub use line_item::{unit_price, LineItem, Unit};
pub use result::{DefaultedFields, ParseResult};
pub use site::Site;
