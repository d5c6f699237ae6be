//! Minimal SNTP client packet codec.
//!
//! Only the transmit timestamp's integer seconds are used; the fractional
//! part and round-trip delay are ignored, which is well within the
//! one-second resolution of the relative-time display.

use crate::error::FetchError;

/// Size of an NTP request/response packet.
pub const NTP_PACKET_SIZE: usize = 48;

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch.
pub const NTP_UNIX_OFFSET_SECS: u64 = 2_208_988_800;

/// Byte offset of the transmit timestamp's seconds field.
const TRANSMIT_TIMESTAMP_OFFSET: usize = 40;

/// One NTP request/response exchange over whatever transport the platform has.
pub trait NtpTransport {
    /// Send `request` and wait at most `timeout_ms` for a full reply.
    fn exchange(
        &mut self,
        request: &[u8; NTP_PACKET_SIZE],
        timeout_ms: u64,
    ) -> Result<[u8; NTP_PACKET_SIZE], FetchError>;
}

/// Client request: LI = 3 (unsynchronized), version 4, mode 3 (client).
pub const fn request_packet() -> [u8; NTP_PACKET_SIZE] {
    let mut packet = [0u8; NTP_PACKET_SIZE];
    packet[0] = 0b1110_0011;
    packet[1] = 0; // stratum
    packet[2] = 6; // poll interval
    packet[3] = 0xEC; // precision
    packet
}

/// Extract Unix seconds from a server reply.
pub fn parse_transmit_seconds(reply: &[u8]) -> Result<u64, FetchError> {
    let Some(field) = reply.get(TRANSMIT_TIMESTAMP_OFFSET..TRANSMIT_TIMESTAMP_OFFSET + 4) else {
        return Err(FetchError::Sync);
    };
    let ntp_secs = u64::from(u32::from_be_bytes([field[0], field[1], field[2], field[3]]));

    match ntp_secs.checked_sub(NTP_UNIX_OFFSET_SECS) {
        Some(unix) if unix > 0 => Ok(unix),
        _ => Err(FetchError::Sync),
    }
}
