mod float;
mod id;
mod timestamp;

pub use float::{Float32, Float64};
pub use id::Id;
pub use timestamp::Timestamp;

// Arbitrary-precision decimals come straight from rust_decimal; the grid
// only needs exact construction, ordering, and display.
pub use rust_decimal::Decimal;
