/// The capability string advertised during the handshake. Context takeover is
/// disabled on both peers, so every message is compressed with a fresh context.
pub const PERMESSAGE_DEFLATE_OFFER: &str =
    "permessage-deflate; server_no_context_takeover; client_no_context_takeover";

const PERMESSAGE_DEFLATE: &str = "permessage-deflate";
const CLIENT_NO_CONTEXT_TAKEOVER: &str = "client_no_context_takeover";
const SERVER_NO_CONTEXT_TAKEOVER: &str = "server_no_context_takeover";
const MAX_WINDOW_BITS: &str = "max_window_bits";

#[derive(Debug, Clone, Default)]
pub struct Extensions {
    pub permessage_deflate: bool,
    pub client_no_context_takeover: bool,
    pub server_no_context_takeover: bool,
    // Window-size negotiation is not supported, the parameter is only
    // recognized so negotiation can refuse it
    pub max_window_bits_requested: bool,
}

pub fn parse_extensions(extensions_header_value: &str) -> Option<Extensions> {
    let extensions_str = extensions_header_value.split(';');
    let mut extensions = Extensions::default();

    for extension_str in extensions_str.into_iter() {
        let extension = extension_str.trim();
        if extension == PERMESSAGE_DEFLATE {
            extensions.permessage_deflate = true;
        } else if extension.starts_with(CLIENT_NO_CONTEXT_TAKEOVER) {
            extensions.client_no_context_takeover = true;
        } else if extension.starts_with(SERVER_NO_CONTEXT_TAKEOVER) {
            extensions.server_no_context_takeover = true;
        } else if extension.contains(MAX_WINDOW_BITS) {
            extensions.max_window_bits_requested = true;
        }
    }
    if !extensions.permessage_deflate {
        return None;
    }

    Some(extensions)
}

impl Extensions {
    /// Whether the parsed header matches the only mode this crate implements:
    /// permessage-deflate with no context takeover on either side and default
    /// window size.
    pub fn negotiated(&self) -> bool {
        self.permessage_deflate
            && self.client_no_context_takeover
            && self.server_no_context_takeover
            && !self.max_window_bits_requested
    }
}
