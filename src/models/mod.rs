pub mod coin;
pub mod detail;
pub mod favorite;
pub mod history;
pub mod params;
pub mod response;

pub use coin::*;
pub use detail::*;
pub use favorite::*;
pub use history::*;
pub use params::*;
pub use response::*;
