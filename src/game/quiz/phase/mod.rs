mod failed;
mod loading;
mod question;
mod results;

pub use self::failed::*;
pub use self::loading::*;
pub use self::question::*;
pub use self::results::*;
