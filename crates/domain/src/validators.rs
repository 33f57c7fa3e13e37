use std::str::FromStr;

use crate::dns_record::RecordType;
use crate::errors::FieldError;
use crate::query::ContentType;
use crate::request::QueryRequest;

/// Validate a request against the full rule set.
///
/// Rules run in a fixed order and only the first violation is reported;
/// callers must not assume exhaustive error listings. Structural rules
/// (closed field set, required fields, primitive types) are enforced earlier
/// by the `QueryRequest` shape itself. The subnet rule is a deliberate second
/// pass: "non-blank when present" is not a shape constraint.
pub fn assert_valid_request(request: &QueryRequest) -> Result<(), FieldError> {
    if !is_idn_hostname(&request.name) {
        return Err(FieldError::new(
            "name",
            "must match format \"idn-hostname\"",
        ));
    }

    if !RecordType::ALL
        .iter()
        .any(|rt| rt.as_str() == request.record_type)
    {
        return Err(FieldError::new(
            "type",
            "must be equal to one of the allowed values",
        ));
    }

    if let Some(content_type) = &request.content_type {
        if ContentType::from_str(content_type).is_err() {
            return Err(FieldError::new(
                "contentType",
                "must be equal to one of the allowed values",
            ));
        }
    }

    if let Some(subnet) = &request.edns_client_subnet {
        if subnet.trim().is_empty() {
            return Err(FieldError::new("EDNSClientSubnet", "cannot be empty if set"));
        }
    }

    Ok(())
}

/// Internationalized hostname syntax.
///
/// Labels are dot-separated, 1-63 characters, alphanumeric in any script,
/// with interior hyphens. A single trailing dot is tolerated. Total length
/// is capped at 253 characters.
pub fn is_idn_hostname(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > 253 {
        return false;
    }
    name.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let last = label.chars().next_back().unwrap_or(first);

    if first == '-' || last == '-' {
        return false;
    }
    if label.chars().count() > 63 {
        return false;
    }
    label.chars().all(|c| c.is_alphanumeric() || c == '-')
}
