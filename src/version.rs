// Service identity reported by /version, health checks and the MCP handshake

/// Crate version, fixed at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name, fixed at build time.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Server name announced in `initialize` and health payloads.
pub const SERVICE: &str = "cameras_mcp";

/// MCP revision this server speaks.
pub const PROTOCOL_VERSION: &str = "2024-11-05";
