//! Parser for the pipe-delimited SMS report format
//!
//! Reporters text `TYPE|LOCATION|DESCRIPTION`, e.g.
//! `FLOOD|Mumbai, Maharashtra|Water level rising, 50 people stranded`.
//! Anything that does not fit still produces a usable report.

pub const UNKNOWN_TYPE: &str = "unknown";
pub const UNSPECIFIED_LOCATION: &str = "Location not specified";

const SEPARATOR: char = '|';

/// Fields extracted from an inbound SMS body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSms {
    pub disaster_type: String,
    pub location: String,
    pub description: String,
}

/// Split an SMS body into type, location and description
///
/// Empty segments count as missing. A body without any separator is free
/// text and only fills the description. Pipes after the second separator
/// stay part of the description.
pub fn parse_sms_body(body: &str) -> ParsedSms {
    if !body.contains(SEPARATOR) {
        return ParsedSms {
            disaster_type: UNKNOWN_TYPE.to_string(),
            location: UNSPECIFIED_LOCATION.to_string(),
            description: body.to_string(),
        };
    }

    let mut parts = body.splitn(3, SEPARATOR).map(str::trim);
    let mut next_part = || parts.next().filter(|p| !p.is_empty());

    let disaster_type = next_part()
        .map(str::to_lowercase)
        .unwrap_or_else(|| UNKNOWN_TYPE.to_string());
    let location = next_part()
        .map(str::to_string)
        .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string());
    let description = next_part()
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string());

    ParsedSms {
        disaster_type,
        location,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_format() {
        let parsed = parse_sms_body("FLOOD|Mumbai, Maharashtra|50 people stranded");
        assert_eq!(parsed.disaster_type, "flood");
        assert_eq!(parsed.location, "Mumbai, Maharashtra");
        assert_eq!(parsed.description, "50 people stranded");
    }

    #[test]
    fn test_free_text_falls_back() {
        let parsed = parse_sms_body("just help me");
        assert_eq!(parsed.disaster_type, UNKNOWN_TYPE);
        assert_eq!(parsed.location, UNSPECIFIED_LOCATION);
        assert_eq!(parsed.description, "just help me");
    }

    #[test]
    fn test_type_only() {
        let parsed = parse_sms_body("EARTHQUAKE|");
        assert_eq!(parsed.disaster_type, "earthquake");
        assert_eq!(parsed.location, UNSPECIFIED_LOCATION);
        assert_eq!(parsed.description, "EARTHQUAKE|");
    }

    #[test]
    fn test_segments_are_trimmed() {
        let parsed = parse_sms_body("  Cyclone | Puri, Odisha |  roofs gone ");
        assert_eq!(parsed.disaster_type, "cyclone");
        assert_eq!(parsed.location, "Puri, Odisha");
        assert_eq!(parsed.description, "roofs gone");
    }

    #[test]
    fn test_empty_segments_use_defaults() {
        let body = "|| ";
        let parsed = parse_sms_body(body);
        assert_eq!(parsed.disaster_type, UNKNOWN_TYPE);
        assert_eq!(parsed.location, UNSPECIFIED_LOCATION);
        assert_eq!(parsed.description, body);
    }

    #[test]
    fn test_extra_pipes_stay_in_description() {
        let parsed = parse_sms_body("fire|Delhi|third floor|stairs blocked");
        assert_eq!(parsed.description, "third floor|stairs blocked");
    }
}
