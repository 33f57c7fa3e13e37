use std::fmt;
use std::str::FromStr;

/// DNS record types accepted by the JSON resolver endpoint.
///
/// Covers the IANA resource record registry entries the provider understands
/// plus the provider-specific `ANY`. The enumeration is fixed at build time;
/// `ALL` preserves the stable public ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    AFSDB,
    APL,
    CAA,
    CDNSKEY,
    CDS,
    CERT,
    CNAME,
    CSYNC,
    DHCID,
    DLV,
    DNAME,
    DNSKEY,
    DS,
    EUI48,
    EUI64,
    HINFO,
    HIP,
    HTTPS,
    IPSECKEY,
    KEY,
    KX,
    LOC,
    MX,
    NAPTR,
    NS,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    OPENPGPKEY,
    PTR,
    RRSIG,
    RP,
    SIG,
    SMIMEA,
    SOA,
    SRV,
    SSHFP,
    SVCB,
    TA,
    TKEY,
    TLSA,
    TSIG,
    TXT,
    URI,
    ZONEMD,

    // Provider specific
    ANY,
}

impl RecordType {
    /// Every known record type, in the stable public order.
    pub const ALL: [RecordType; 48] = [
        RecordType::A,
        RecordType::AAAA,
        RecordType::AFSDB,
        RecordType::APL,
        RecordType::CAA,
        RecordType::CDNSKEY,
        RecordType::CDS,
        RecordType::CERT,
        RecordType::CNAME,
        RecordType::CSYNC,
        RecordType::DHCID,
        RecordType::DLV,
        RecordType::DNAME,
        RecordType::DNSKEY,
        RecordType::DS,
        RecordType::EUI48,
        RecordType::EUI64,
        RecordType::HINFO,
        RecordType::HIP,
        RecordType::HTTPS,
        RecordType::IPSECKEY,
        RecordType::KEY,
        RecordType::KX,
        RecordType::LOC,
        RecordType::MX,
        RecordType::NAPTR,
        RecordType::NS,
        RecordType::NSEC,
        RecordType::NSEC3,
        RecordType::NSEC3PARAM,
        RecordType::OPENPGPKEY,
        RecordType::PTR,
        RecordType::RRSIG,
        RecordType::RP,
        RecordType::SIG,
        RecordType::SMIMEA,
        RecordType::SOA,
        RecordType::SRV,
        RecordType::SSHFP,
        RecordType::SVCB,
        RecordType::TA,
        RecordType::TKEY,
        RecordType::TLSA,
        RecordType::TSIG,
        RecordType::TXT,
        RecordType::URI,
        RecordType::ZONEMD,
        RecordType::ANY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::AFSDB => "AFSDB",
            RecordType::APL => "APL",
            RecordType::CAA => "CAA",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::CDS => "CDS",
            RecordType::CERT => "CERT",
            RecordType::CNAME => "CNAME",
            RecordType::CSYNC => "CSYNC",
            RecordType::DHCID => "DHCID",
            RecordType::DLV => "DLV",
            RecordType::DNAME => "DNAME",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::DS => "DS",
            RecordType::EUI48 => "EUI48",
            RecordType::EUI64 => "EUI64",
            RecordType::HINFO => "HINFO",
            RecordType::HIP => "HIP",
            RecordType::HTTPS => "HTTPS",
            RecordType::IPSECKEY => "IPSECKEY",
            RecordType::KEY => "KEY",
            RecordType::KX => "KX",
            RecordType::LOC => "LOC",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NS => "NS",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::PTR => "PTR",
            RecordType::RRSIG => "RRSIG",
            RecordType::RP => "RP",
            RecordType::SIG => "SIG",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::SOA => "SOA",
            RecordType::SRV => "SRV",
            RecordType::SSHFP => "SSHFP",
            RecordType::SVCB => "SVCB",
            RecordType::TA => "TA",
            RecordType::TKEY => "TKEY",
            RecordType::TLSA => "TLSA",
            RecordType::TSIG => "TSIG",
            RecordType::TXT => "TXT",
            RecordType::URI => "URI",
            RecordType::ZONEMD => "ZONEMD",
            RecordType::ANY => "ANY",
        }
    }

    /// Canonical IANA type code (255 for the provider-specific `ANY`).
    pub fn code(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::RP => 17,
            RecordType::AFSDB => 18,
            RecordType::SIG => 24,
            RecordType::KEY => 25,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::KX => 36,
            RecordType::CERT => 37,
            RecordType::DNAME => 39,
            RecordType::APL => 42,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::IPSECKEY => 45,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::DHCID => 49,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::SMIMEA => 53,
            RecordType::HIP => 55,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::OPENPGPKEY => 61,
            RecordType::CSYNC => 62,
            RecordType::ZONEMD => 63,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::EUI48 => 108,
            RecordType::EUI64 => 109,
            RecordType::TKEY => 249,
            RecordType::TSIG => 250,
            RecordType::ANY => 255,
            RecordType::URI => 256,
            RecordType::CAA => 257,
            RecordType::TA => 32768,
            RecordType::DLV => 32769,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            13 => Some(RecordType::HINFO),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            17 => Some(RecordType::RP),
            18 => Some(RecordType::AFSDB),
            24 => Some(RecordType::SIG),
            25 => Some(RecordType::KEY),
            28 => Some(RecordType::AAAA),
            29 => Some(RecordType::LOC),
            33 => Some(RecordType::SRV),
            35 => Some(RecordType::NAPTR),
            36 => Some(RecordType::KX),
            37 => Some(RecordType::CERT),
            39 => Some(RecordType::DNAME),
            42 => Some(RecordType::APL),
            43 => Some(RecordType::DS),
            44 => Some(RecordType::SSHFP),
            45 => Some(RecordType::IPSECKEY),
            46 => Some(RecordType::RRSIG),
            47 => Some(RecordType::NSEC),
            48 => Some(RecordType::DNSKEY),
            49 => Some(RecordType::DHCID),
            50 => Some(RecordType::NSEC3),
            51 => Some(RecordType::NSEC3PARAM),
            52 => Some(RecordType::TLSA),
            53 => Some(RecordType::SMIMEA),
            55 => Some(RecordType::HIP),
            59 => Some(RecordType::CDS),
            60 => Some(RecordType::CDNSKEY),
            61 => Some(RecordType::OPENPGPKEY),
            62 => Some(RecordType::CSYNC),
            63 => Some(RecordType::ZONEMD),
            64 => Some(RecordType::SVCB),
            65 => Some(RecordType::HTTPS),
            108 => Some(RecordType::EUI48),
            109 => Some(RecordType::EUI64),
            249 => Some(RecordType::TKEY),
            250 => Some(RecordType::TSIG),
            255 => Some(RecordType::ANY),
            256 => Some(RecordType::URI),
            257 => Some(RecordType::CAA),
            32768 => Some(RecordType::TA),
            32769 => Some(RecordType::DLV),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        RecordType::ALL
            .iter()
            .find(|rt| rt.as_str() == upper)
            .copied()
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}

/// Translate a numeric type-code string into its mnemonic.
///
/// Unrecognized codes are returned unchanged: the provider may emit codes
/// newer than this table and callers still get a printable type.
pub fn numeric_to_str(raw: &str) -> String {
    match raw.parse::<u16>().ok().and_then(RecordType::from_code) {
        Some(record_type) => record_type.as_str().to_string(),
        None => raw.to_string(),
    }
}

/// Whether `s` names a known DNS type, as a mnemonic or a numeric code.
pub fn is_known_type(s: &str) -> bool {
    if RecordType::ALL.iter().any(|rt| rt.as_str() == s) {
        return true;
    }
    s.parse::<u16>()
        .ok()
        .and_then(RecordType::from_code)
        .is_some()
}
