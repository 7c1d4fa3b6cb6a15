pub mod tcp;

pub use tcp::{read_with_length_prefix, send_with_length_prefix, MAX_TCP_MESSAGE_SIZE};
