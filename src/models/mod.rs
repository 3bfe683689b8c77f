pub mod category;
pub mod insight;
pub mod purchase;
pub mod timeframe;

pub use category::*;
pub use insight::*;
pub use purchase::*;
pub use timeframe::*;
