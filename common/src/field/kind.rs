//! # Address Field Kinds
//!
//! Every parameter that differs between the address field kinds lives here,
//! so the parser and the bounds check never branch on raw flags.

use std::fmt;
use std::str::FromStr;

pub const IP_ADDRESS_CLASS: &str = "foswikiIpAddress";
pub const NETMASK_CLASS: &str = "foswikiNetmask";
pub const MAC_ADDRESS_CLASS: &str = "foswikiMacAddress";

/// The kind of address a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    IPv4Address,
    Netmask,
    MacAddress,
}

/// Inclusive range a single segment must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentBounds {
    pub min: u32,
    pub max: u32,
}

impl SegmentBounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [Self::IPv4Address, Self::Netmask, Self::MacAddress];

    pub fn radix(&self) -> u32 {
        match self {
            Self::MacAddress => 16,
            Self::IPv4Address | Self::Netmask => 10,
        }
    }

    pub fn segment_count(&self) -> usize {
        match self {
            Self::MacAddress => 6,
            Self::IPv4Address | Self::Netmask => 4,
        }
    }

    /// Separator used when joining canonical segments.
    pub fn separator(&self) -> char {
        match self {
            Self::MacAddress => ':',
            Self::IPv4Address | Self::Netmask => '.',
        }
    }

    /// Width of a canonical, zero-padded segment.
    pub fn width(&self) -> usize {
        match self {
            Self::MacAddress => 2,
            Self::IPv4Address | Self::Netmask => 3,
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Self::IPv4Address => "Please provide a valid IP address",
            Self::Netmask => "Please provide a valid netmask",
            Self::MacAddress => "Please provide a valid mac address",
        }
    }

    pub fn marker_class(&self) -> &'static str {
        match self {
            Self::IPv4Address => IP_ADDRESS_CLASS,
            Self::Netmask => NETMASK_CLASS,
            Self::MacAddress => MAC_ADDRESS_CLASS,
        }
    }

    /// Bounds for the segment at the 1-indexed `position`.
    ///
    /// IPv4 addresses stop at 254 and may not start or end with a zero
    /// segment. Netmask and MAC segments take the full byte range.
    pub fn bounds(&self, position: usize) -> SegmentBounds {
        match self {
            Self::IPv4Address => {
                if position == 1 || position == self.segment_count() {
                    SegmentBounds::new(1, 254)
                } else {
                    SegmentBounds::new(0, 254)
                }
            }
            Self::Netmask | Self::MacAddress => SegmentBounds::new(0, 255),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IPv4Address => "ip",
            Self::Netmask => "netmask",
            Self::MacAddress => "mac",
        };
        f.write_str(name)
    }
}

impl FromStr for FieldKind {
    type Err = String;

    /// Accepts the short names (`ip`, `netmask`, `mac`) case-insensitively,
    /// as well as the marker class names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ip" | "ipv4" | "foswikiipaddress" => Ok(Self::IPv4Address),
            "netmask" | "mask" | "foswikinetmask" => Ok(Self::Netmask),
            "mac" | "foswikimacaddress" => Ok(Self::MacAddress),
            _ => Err(format!("unknown address kind: {s}")),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
