pub mod live;
pub mod session;

pub use live::LivePage;
pub use session::{BrowserSession, LaunchOptions};
