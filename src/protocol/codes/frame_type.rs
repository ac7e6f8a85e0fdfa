code_table! {
    /// Frame type discriminators, the first byte of every frame's data.
    pub enum FrameType: absent {
        Tx64Request = 0x00 => "TX (Transmit) Request 64-bit address",
        Tx16Request = 0x01 => "TX (Transmit) Request 16-bit address",
        RemoteAtCommandWifi = 0x07 => "Remote AT Command Request (Wi-Fi)",
        AtCommand = 0x08 => "AT Command",
        TransmitRequest = 0x10 => "Transmit Request",
        ExplicitAddressing = 0x11 => "Explicit Addressing Command Frame",
        RemoteAtCommand = 0x17 => "Remote AT Command Request",
        TxSms = 0x1F => "TX SMS",
        TxIpv4 = 0x20 => "TX IPv4",
        SendDataRequest = 0x28 => "Send Data Request",
        DeviceResponse = 0x2A => "Device Response",
        Rx64 = 0x80 => "RX (Receive) Packet 64-bit Address",
        Rx16 = 0x81 => "RX (Receive) Packet 16-bit Address",
        RxIo64 = 0x82 => "IO Data Sample RX 64-bit Address Indicator",
        RxIo16 = 0x83 => "IO Data Sample RX 16-bit Address Indicator",
        RemoteAtCommandResponseWifi = 0x87 => "Remote AT Command Response (Wi-Fi)",
        AtCommandResponse = 0x88 => "AT Command Response",
        TxStatus = 0x89 => "TX (Transmit) Status",
        ModemStatus = 0x8A => "Modem Status",
        TransmitStatus = 0x8B => "Transmit Status",
        IoSampleWifi = 0x8F => "IO Data Sample RX Indicator (Wi-Fi)",
        Receive = 0x90 => "Receive Packet",
        ExplicitRx = 0x91 => "Explicit RX Indicator",
        IoSampleRx = 0x92 => "IO Data Sample RX Indicator",
        RemoteAtCommandResponse = 0x97 => "Remote Command Response",
        RxSms = 0x9F => "RX SMS",
        RxIpv4 = 0xB0 => "RX IPv4",
        SendDataResponse = 0xB8 => "Send Data Response",
        DeviceRequest = 0xB9 => "Device Request",
        DeviceResponseStatus = 0xBA => "Device Response Status",
        FrameError = 0xFE => "Frame Error",
        Generic = 0xFF => "Generic",
    }
}
