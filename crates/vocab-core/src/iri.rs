//! Resource identifiers used as property references.

use std::{cmp::Ordering, fmt, str::FromStr};

use url::Url;

use crate::error::VocabError;

/// An absolute IRI.
///
/// The text the IRI was parsed from is kept as-is so that encoding returns
/// exactly what was decoded; the parsed form is only used for inspection.
#[derive(Debug, Clone)]
pub struct Iri {
    text: String,
    parsed: Url,
}

impl Iri {
    /// Parses `text` as an IRI.
    ///
    /// Only absolute identifiers with a non-empty scheme are accepted:
    /// permissive parsers take almost any string, so the scheme is what
    /// tells a reference apart from free text.
    pub fn parse(text: &str) -> Result<Self, VocabError> {
        let parsed = Url::parse(text).map_err(|_| VocabError::InvalidIri(text.to_owned()))?;
        if parsed.scheme().is_empty() {
            return Err(VocabError::InvalidIri(text.to_owned()));
        }

        Ok(Self {
            text: text.to_owned(),
            parsed,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    pub fn as_url(&self) -> &Url {
        &self.parsed
    }
}

impl FromStr for Iri {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iri::parse(s)
    }
}

impl From<Url> for Iri {
    fn from(url: Url) -> Self {
        Self {
            text: url.to_string(),
            parsed: url,
        }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Iri {}

impl PartialOrd for Iri {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Iri {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}
