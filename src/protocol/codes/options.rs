use bitflags::bitflags;

bitflags! {
    /// Options reported on received packets.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct ReceiveOptions: u8 {
        const PACKET_ACKNOWLEDGED = 0x01;
        const BROADCAST_PACKET = 0x02;
        const APS_ENCRYPTED = 0x20;
        const SENT_FROM_END_DEVICE = 0x40;
    }
}

bitflags! {
    /// Options for transmit requests.
    ///
    /// Several names share bits: their meaning depends on the radio
    /// protocol in use.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct TransmitOptions: u8 {
        const DISABLE_ACK = 0x01;
        const DISABLE_RETRIES_AND_REPAIR = 0x01;
        const DONT_ATTEMPT_RD = 0x02;
        const USE_BROADCAST_PAN_ID = 0x04;
        const ENABLE_UNICAST_NACK = 0x04;
        const ENABLE_UNICAST_TRACE_ROUTE = 0x04;
        const ENABLE_MULTICAST = 0x08;
        const ENABLE_APS_ENCRYPTION = 0x20;
        const USE_EXTENDED_TIMEOUT = 0x40;
        const POINT_MULTIPOINT_MODE = 0x40;
        const REPEATER_MODE = 0x80;
        const DIGIMESH_MODE = 0xC0;
    }
}

bitflags! {
    /// Options for remote AT command requests.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct RemoteAtCommandOptions: u8 {
        const DISABLE_ACK = 0x01;
        const APPLY_CHANGES = 0x02;
        const EXTENDED_TIMEOUT = 0x40;
    }
}

bitflags! {
    /// Options for TX IPv4 requests.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Ipv4TransmitOptions: u8 {
        /// Close the socket after sending. Without it, the socket is
        /// left open.
        const CLOSE_SOCKET = 0x02;
    }
}

code_table! {
    /// What the device cloud does with uploaded data.
    pub enum SendDataRequestOptions: absent {
        Overwrite = 0 => "Overwrite",
        Archive = 1 => "Archive",
        Append = 2 => "Append",
        Transient = 3 => "Transient data (do not store)",
    }
}
