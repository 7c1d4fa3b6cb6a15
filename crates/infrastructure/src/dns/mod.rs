pub mod codec;
pub mod listener;
pub mod server;
pub mod transport;

pub use listener::{DnsListener, ListenerOptions};
pub use server::{DnsServerHandler, DropReason, Outcome, Transport};
