pub mod sizes;
pub mod url;

pub use sizes::*;
pub use url::*;
