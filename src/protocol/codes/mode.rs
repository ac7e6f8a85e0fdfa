use crate::protocol::error::Error;

code_table! {
    /// How the module exchanges data over its serial interface.
    pub enum OperatingMode: unknown {
        At = 0 => "AT mode",
        Api = 1 => "API mode",
        ApiEscaped = 2 => "API mode with escaped characters",
    }
}

impl OperatingMode {
    /// Is this one of the two modes that speak API frames?
    pub const fn is_api(&self) -> bool {
        matches!(self, Self::Api | Self::ApiEscaped)
    }

    /// Does this mode escape special bytes on the wire?
    pub const fn is_escaped(&self) -> bool {
        matches!(self, Self::ApiEscaped)
    }

    /// Fail with [Error::OperatingModeUnsupported] unless this is an
    /// API mode.
    pub fn require_api(self) -> Result<Self, Error> {
        if self.is_api() {
            Ok(self)
        } else {
            Err(Error::OperatingModeUnsupported(self))
        }
    }
}

impl Default for OperatingMode {
    fn default() -> Self {
        Self::Api
    }
}

code_table! {
    /// Format of received data frames (the `AO` setting).
    pub enum ApiOutputMode: absent {
        Native = 0x00 => "Native",
        Explicit = 0x01 => "Explicit",
        ExplicitZdoPassthru = 0x03 => "Explicit with ZDO Passthru",
    }
}

code_table! {
    pub enum IpAddressingMode: absent {
        Dhcp = 0x00 => "DHCP",
        Static = 0x01 => "Static",
    }
}

code_table! {
    /// Transport protocol for IPv4 frames.
    pub enum IpProtocol: absent {
        Udp = 0 => "UDP",
        Tcp = 1 => "TCP",
        TcpSsl = 4 => "TCP SSL",
    }
}
