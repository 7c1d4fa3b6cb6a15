//! RFC 1035 §4.2.2 framing: each message is preceded by its length as a
//! two-byte big-endian integer.

use prionis_dns_domain::DomainError;
use std::io::ErrorKind;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const MAX_TCP_MESSAGE_SIZE: usize = 65535;

pub async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> Result<(), DomainError>
where
    S: AsyncWriteExt + Unpin,
{
    if message_bytes.len() > MAX_TCP_MESSAGE_SIZE {
        return Err(DomainError::IoError(format!(
            "Message too large for TCP framing: {} bytes (max {})",
            message_bytes.len(),
            MAX_TCP_MESSAGE_SIZE
        )));
    }

    let length_bytes = (message_bytes.len() as u16).to_be_bytes();

    stream
        .write_all(&length_bytes)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(message_bytes)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

/// Reads one framed message. `Ok(None)` means the peer closed the stream
/// cleanly between messages.
pub async fn read_with_length_prefix<S>(stream: &mut S) -> Result<Option<Vec<u8>>, DomainError>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    match stream.read_exact(&mut len_buf).await {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => {
            return Err(DomainError::IoError(format!(
                "Failed to read message length: {}",
                e
            )))
        }
    }

    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream
        .read_exact(&mut message)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read message body: {}", e)))?;

    Ok(Some(message))
}
