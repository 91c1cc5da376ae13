use crate::error::{Result, UriError};
use crate::id::RecordId;

/// File extension for record data files.
const DATA_EXTENSION: &str = "geojson";

/// Qualifier label selecting an alternate-geometry file.
const ALT_LABEL: &str = "alt";

/// An alternate-geometry qualifier.
///
/// Selects a secondary data file for the same identifier, named after
/// the source that produced the geometry, e.g.
/// `1360391327-alt-quattroshapes.geojson`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AltGeometry {
    /// Provider of the alternate geometry (required).
    pub source: String,
    /// Optional function label, e.g. `display`.
    pub function: Option<String>,
    /// Any further trailing labels.
    pub extras: Vec<String>,
}

/// A parsed qualifier clause.
///
/// Path derivation dispatches over these variants; adding a new
/// derivation rule means adding a variant and a match arm, not editing
/// the server. Unrecognized labels survive parsing so the caller can
/// report them, but no rule will derive a path for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualifier {
    AltGeometry(AltGeometry),
    Unrecognized { label: String, tokens: Vec<String> },
}

/// Optional qualifier arguments carried alongside an identifier.
///
/// An empty set selects the primary data file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UriArgs {
    pub qualifiers: Vec<Qualifier>,
}

impl UriArgs {
    /// Arguments selecting the primary data file.
    pub fn primary() -> Self {
        Self::default()
    }

    /// Arguments selecting an alternate geometry from the given source.
    pub fn alternate(source: impl Into<String>) -> Self {
        Self {
            qualifiers: vec![Qualifier::AltGeometry(AltGeometry {
                source: source.into(),
                function: None,
                extras: Vec::new(),
            })],
        }
    }

    pub fn is_primary(&self) -> bool {
        self.qualifiers.is_empty()
    }
}

/// Parses a request path into an identifier and its qualifier arguments.
///
/// Only the final path segment matters; `/1360391327`,
/// `/136/039/132/7/1360391327.geojson` and
/// `/1360391327-alt-quattroshapes.geojson` are all accepted. Fails with
/// [`UriError::MalformedIdentifier`] when the segment does not start
/// with a decimal identifier or a qualifier clause is incomplete.
pub fn parse_uri(path: &str) -> Result<(RecordId, UriArgs)> {
    let malformed = || UriError::MalformedIdentifier(path.to_string());

    let base = path
        .trim_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or_else(malformed)?;

    // Strip the trailing extension, if any.
    let stem = base
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(base);

    let mut tokens = stem.split('-');

    let id: RecordId = tokens
        .next()
        .ok_or_else(malformed)?
        .parse()
        .map_err(|_| malformed())?;

    let tokens: Vec<&str> = tokens.collect();

    if tokens.iter().any(|token| token.is_empty()) {
        return Err(malformed());
    }

    let args = match tokens.split_first() {
        None => UriArgs::primary(),
        Some((label, rest)) if *label == ALT_LABEL => {
            // An alt clause without a source names no file.
            let (source, rest) = rest.split_first().ok_or_else(malformed)?;
            UriArgs {
                qualifiers: vec![Qualifier::AltGeometry(AltGeometry {
                    source: source.to_string(),
                    function: rest.first().map(|f| f.to_string()),
                    extras: rest.iter().skip(1).map(|e| e.to_string()).collect(),
                })],
            }
        }
        Some((label, rest)) => UriArgs {
            qualifiers: vec![Qualifier::Unrecognized {
                label: label.to_string(),
                tokens: rest.iter().map(|t| t.to_string()).collect(),
            }],
        },
    };

    Ok((id, args))
}

/// Derives the relative storage path for an identifier.
///
/// Deterministic: identical inputs always produce identical paths. The
/// result never escapes the repository root; every segment is built
/// from the identifier's digits or a validated qualifier token.
pub fn relative_path(id: RecordId, args: &UriArgs) -> Result<String> {
    Ok(format!("{}/{}", id.tree_path(), filename(id, args)?))
}

fn filename(id: RecordId, args: &UriArgs) -> Result<String> {
    let mut name = id.to_string();

    for qualifier in &args.qualifiers {
        match qualifier {
            Qualifier::AltGeometry(alt) => {
                name.push_str("-alt-");
                name.push_str(validate_token(&alt.source)?);

                if let Some(function) = &alt.function {
                    name.push('-');
                    name.push_str(validate_token(function)?);
                }

                for extra in &alt.extras {
                    name.push('-');
                    name.push_str(validate_token(extra)?);
                }
            }
            Qualifier::Unrecognized { label, .. } => {
                return Err(UriError::UnsupportedQualifier(label.clone()));
            }
        }
    }

    name.push('.');
    name.push_str(DATA_EXTENSION);
    Ok(name)
}

fn validate_token(token: &str) -> Result<&str> {
    let safe = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');

    if safe {
        Ok(token)
    } else {
        Err(UriError::UnsupportedQualifier(token.to_string()))
    }
}
