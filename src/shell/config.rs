use crate::modules::users::core::user::User;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

pub const BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));

/// The server has no runtime configuration surface. `RUST_LOG` only tunes logging.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub seed: Vec<User>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: BIND_ADDR,
            seed: vec![User::new("1", "Charles")],
        }
    }
}
