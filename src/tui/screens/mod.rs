//! Screen state structs for the waitlist TUI

pub mod help;
pub mod hosted;
pub mod overview;
pub mod process;
pub mod waitlist;

pub use help::HelpScreen;
pub use hosted::HostedScreen;
pub use overview::OverviewScreen;
pub use process::ProcessScreen;
pub use waitlist::WaitlistScreen;
