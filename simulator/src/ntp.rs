//! NTP over a plain UDP socket.

use std::net::UdpSocket;
use std::time::Duration;

use today_common::FetchError;
use today_common::config::NTP_PORT;
use today_common::ntp::{NTP_PACKET_SIZE, NtpTransport};
use tracing::{debug, warn};

pub struct UdpNtpTransport {
    server: String,
}

impl UdpNtpTransport {
    pub fn new(server: impl Into<String>) -> Self { Self { server: server.into() } }
}

impl NtpTransport for UdpNtpTransport {
    fn exchange(
        &mut self,
        request: &[u8; NTP_PACKET_SIZE],
        timeout_ms: u64,
    ) -> Result<[u8; NTP_PACKET_SIZE], FetchError> {
        let io_error = |err: std::io::Error| {
            warn!(%err, server = self.server.as_str(), "NTP socket error");
            FetchError::Network
        };

        let socket = UdpSocket::bind(("0.0.0.0", 0)).map_err(io_error)?;
        socket
            .set_read_timeout(Some(Duration::from_millis(timeout_ms)))
            .map_err(io_error)?;
        socket.send_to(request, (self.server.as_str(), NTP_PORT)).map_err(io_error)?;

        let mut reply = [0u8; NTP_PACKET_SIZE];
        let (len, from) = socket.recv_from(&mut reply).map_err(io_error)?;
        debug!(len, %from, "NTP reply");

        if len < NTP_PACKET_SIZE {
            warn!(len, "Short NTP reply");
            return Err(FetchError::Sync);
        }
        Ok(reply)
    }
}
