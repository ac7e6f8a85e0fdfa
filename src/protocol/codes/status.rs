code_table! {
    /// Result of an AT command, local or remote.
    pub enum AtCommandStatus: unknown {
        Ok = 0 => "Status OK",
        Error = 1 => "Status Error",
        InvalidCommand = 2 => "Invalid command",
        InvalidParameter = 3 => "Invalid parameter",
        TxFailure = 4 => "TX failure",
    }
}

impl AtCommandStatus {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

code_table! {
    /// Discovery overhead incurred by a transmission.
    pub enum DiscoveryStatus: unknown {
        NoDiscoveryOverhead = 0x00 => "No discovery overhead",
        AddressDiscovery = 0x01 => "Address discovery",
        RouteDiscovery = 0x02 => "Route discovery",
        AddressAndRoute = 0x03 => "Address and route",
        ExtendedTimeoutDiscovery = 0x40 => "Extended timeout discovery",
    }
}

code_table! {
    /// Delivery result of a transmit request.
    pub enum TransmitStatus: unknown {
        Success = 0x00 => "Success.",
        NoAck = 0x01 => "No acknowledgement received.",
        CcaFailure = 0x02 => "CCA failure.",
        Purged = 0x03 => "Transmission purged, it was attempted before stack was up.",
        WifiPhysicalError = 0x04 => "Physical error occurred on the interface with the WiFi transceiver.",
        InvalidDestination = 0x15 => "Invalid destination endpoint.",
        NoBuffers = 0x18 => "No buffers.",
        NetworkAckFailure = 0x21 => "Network ACK Failure.",
        NotJoinedNetwork = 0x22 => "Not joined to network.",
        SelfAddressed = 0x23 => "Self-addressed.",
        AddressNotFound = 0x24 => "Address not found.",
        RouteNotFound = 0x25 => "Route not found.",
        BroadcastFailed = 0x26 => "Broadcast source failed to hear a neighbor relay the message.",
        InvalidBindingTableIndex = 0x2B => "Invalid binding table index.",
        InvalidEndpoint = 0x2C => "Invalid endpoint",
        BroadcastErrorAps = 0x2D => "Attempted broadcast with APS transmission.",
        BroadcastErrorApsEe0 = 0x2E => "Attempted broadcast with APS transmission, but EE=0.",
        SoftwareError = 0x31 => "A software error occurred.",
        ResourceError = 0x32 => "Resource error lack of free buffers, timers, etc.",
        PayloadTooLarge = 0x74 => "Data payload too large.",
        IndirectMessageUnrequested = 0x75 => "Indirect message unrequested",
        SocketCreationFailed = 0x76 => "Attempt to create a client socket failed.",
        IpPortNotExist = 0x77 => "TCP connection to given IP address and port doesn't exist. Source port is non-zero so that a new connection is not attempted.",
        UdpSrcPortMismatch = 0x78 => "Source port on a UDP transmission doesn't match a listening port on the transmitting module.",
        KeyNotAuthorized = 0xBB => "Key not authorized.",
    }
}

impl TransmitStatus {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

code_table! {
    /// Unsolicited modem status events.
    pub enum ModemStatus: unknown {
        HardwareReset = 0x00 => "Device was reset",
        WatchdogTimerReset = 0x01 => "Watchdog timer was reset",
        JoinedNetwork = 0x02 => "Device joined to network",
        Disassociated = 0x03 => "Device disassociated",
        SynchronizationLost = 0x04 => "Configuration error/synchronization lost",
        CoordinatorRealignment = 0x05 => "Coordinator realignment",
        CoordinatorStarted = 0x06 => "The coordinator started",
        NetworkSecurityKeyUpdated = 0x07 => "Network security key was updated",
        NetworkWokeUp = 0x0B => "Network Woke Up",
        NetworkWentToSleep = 0x0C => "Network Went To Sleep",
        VoltageSupplyLimitExceeded = 0x0D => "Voltage supply limit exceeded",
        ConfigChangedWhileJoining = 0x11 => "Modem configuration changed while joining",
        StackError = 0x80 => "Stack error",
        ApNotConnected = 0x82 => "Send/join command issued without connecting from AP",
        ApNotFound = 0x83 => "Access point not found",
        PskNotConfigured = 0x84 => "PSK not configured",
        SsidNotFound = 0x87 => "SSID not found",
        FailedJoinSecurity = 0x88 => "Failed to join with security enabled",
        InvalidChannel = 0x8A => "Invalid channel",
        FailedJoinAp = 0x8E => "Failed to join access point",
    }
}

code_table! {
    /// Transmit power level (the `PL` setting).
    pub enum PowerLevel: unknown {
        Lowest = 0x00 => "Lowest",
        Low = 0x01 => "Low",
        Medium = 0x02 => "Medium",
        High = 0x03 => "High",
        Highest = 0x04 => "Highest",
    }
}

code_table! {
    /// Cellular association state (the `AI` setting on cellular modules).
    pub enum CellularAssociationIndicationStatus: absent {
        Connected = 0x00 => "Connected to the Internet.",
        RegisteringCellularNetwork = 0x22 => "Registering to cellular network",
        ConnectingInternet = 0x23 => "Connecting to the Internet",
        BypassMode = 0x2F => "Bypass mode active",
        Initializing = 0xFF => "Initializing",
    }
}

code_table! {
    /// Wi-Fi association state (the `AI` setting on Wi-Fi modules).
    pub enum WifiAssociationIndicationStatus: absent {
        Joined = 0x00 => "Successfully joined to access point.",
        Initializing = 0x01 => "Initialization in progress.",
        Initialized = 0x02 => "Initialized, but not yet scanning.",
        Disconnecting = 0x13 => "Disconnecting from access point.",
        SsidNotConfigured = 0x23 => "SSID not configured",
        InvalidKey = 0x24 => "Encryption key invalid (NULL or invalid length).",
        JoinFailed = 0x27 => "SSID found, but join failed.",
        WaitingForAuth = 0x40 => "Waiting for WPA or WPA2 authentication.",
        WaitingForIp = 0x41 => "Joined to a network and waiting for IP address.",
        SettingUpSockets = 0x42 => "Joined to a network and IP configured. Setting up listening sockets.",
        ScanningForSsid = 0xFF => "Scanning for the configured SSID.",
    }
}

code_table! {
    /// Result of a device cloud request or response.
    pub enum DeviceCloudStatus: absent {
        Success = 0x00 => "Success",
        BadRequest = 0x01 => "Bad request",
        ResponseUnavailable = 0x02 => "Response unavailable",
        DeviceCloudError = 0x03 => "Device Cloud error",
        Canceled = 0x20 => "Device Request canceled by user",
        TimedOut = 0x21 => "Session timed out",
        UnknownError = 0x40 => "Unknown error",
    }
}

code_table! {
    /// Why the module rejected the last frame it was sent.
    pub enum FrameError: absent {
        InvalidType = 0x02 => "Invalid frame type",
        InvalidLength = 0x03 => "Invalid frame length",
        InvalidChecksum = 0x04 => "Erroneous checksum on last frame",
        PayloadTooBig = 0x05 => "Payload of last API frame was too big to fit into a buffer",
        StringEntryTooBig = 0x06 => "String entry was too big on last API frame sent",
        WrongState = 0x07 => "Wrong state to receive frame",
        WrongRequestId = 0x08 => "Device request ID of device response didn't match the number in the request",
    }
}
