// Value objects for the Frinkiac JSON wire format.

mod caption;
mod frame;

pub use caption::{Caption, Episode, Subtitle};
pub use frame::Frame;
