//! Record reference parsing
//!
//! A record reference arrives in one of two shapes:
//! - an absolute URL whose query string carries a numeric type code (`etc`)
//!   and a unique id (`id`), in any order, with any other parameters ignored;
//! - a serialized identity object (`LogicalName` / `Id`), used verbatim
//!   without a metadata round trip.
//!
//! URL references only carry the numeric type code, so resolving them to a
//! logical type name requires one metadata lookup against the record service.

use crate::error::CascadeError;
use cascade_core::{RecordIdentity, RecordService, SerializedIdentity};
use uuid::Uuid;

/// Convert a record reference string into a canonical identity.
///
/// # Errors
///
/// - [`CascadeError::MalformedReference`] when the input is neither a
///   well-formed absolute URL nor a well-formed serialized identity.
/// - [`CascadeError::IdentityNotResolved`] when a URL lacks a usable `id`,
///   or its type code matches no record type. Callers must treat this as
///   "no identity available", not as a crash.
pub async fn parse_reference(
    service: &dyn RecordService,
    reference: &str,
) -> Result<RecordIdentity, CascadeError> {
    if is_absolute_url(reference) {
        return parse_url_reference(service, reference).await;
    }

    let serialized: SerializedIdentity =
        serde_json::from_str(reference).map_err(|e| CascadeError::MalformedReference {
            reference: reference.to_string(),
            message: e.to_string(),
        })?;
    tracing::debug!(type_name = %serialized.logical_name, id = %serialized.id,
        "reference parsed as serialized identity");
    Ok(RecordIdentity::new(serialized.logical_name, serialized.id)?)
}

async fn parse_url_reference(
    service: &dyn RecordService,
    reference: &str,
) -> Result<RecordIdentity, CascadeError> {
    let mut type_code: Option<i32> = None;
    let mut id: Option<Uuid> = None;

    for param in query_string(reference).split('&') {
        let (name, value) = param.split_once('=').unwrap_or((param, ""));
        match name {
            "etc" => {
                let code = value.parse().map_err(|e| CascadeError::MalformedReference {
                    reference: reference.to_string(),
                    message: format!("type code '{value}': {e}"),
                })?;
                type_code = Some(code);
            }
            "id" => {
                let parsed =
                    Uuid::parse_str(value).map_err(|e| CascadeError::MalformedReference {
                        reference: reference.to_string(),
                        message: format!("id '{value}': {e}"),
                    })?;
                id = Some(parsed);
            }
            _ => {}
        }
        // Both keys seen, the rest of the query string is irrelevant.
        if type_code.is_some() && id.is_some() {
            break;
        }
    }

    let Some(id) = id.filter(|id| !id.is_nil()) else {
        return Err(CascadeError::IdentityNotResolved {
            reference: reference.to_string(),
        });
    };
    let Some(code) = type_code else {
        return Err(CascadeError::IdentityNotResolved {
            reference: reference.to_string(),
        });
    };

    match service.record_type_by_code(code).await? {
        Some(type_name) => {
            tracing::debug!(code, %type_name, %id, "url reference resolved via metadata");
            Ok(RecordIdentity::new(type_name, id)?)
        }
        None => Err(CascadeError::IdentityNotResolved {
            reference: reference.to_string(),
        }),
    }
}

/// Absolute-URL check: a scheme followed by `://`.
fn is_absolute_url(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Query portion of a URL, without the leading `?` or a trailing fragment.
fn query_string(url: &str) -> &str {
    let query = url.split_once('?').map_or("", |(_, q)| q);
    query.split_once('#').map_or(query, |(q, _)| q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_url_detection() {
        assert!(is_absolute_url("https://org.example.com/main.aspx?etc=2"));
        assert!(is_absolute_url("custom+scheme://whatever"));
        assert!(!is_absolute_url("{\"LogicalName\":\"contact\"}"));
        assert!(!is_absolute_url("main.aspx?etc=2&id=abc"));
        assert!(!is_absolute_url("://missing-scheme"));
        assert!(!is_absolute_url("1http://digit-first"));
    }

    #[test]
    fn query_string_extraction() {
        assert_eq!(query_string("https://x/y?a=1&b=2"), "a=1&b=2");
        assert_eq!(query_string("https://x/y?a=1#frag"), "a=1");
        assert_eq!(query_string("https://x/y"), "");
    }
}
