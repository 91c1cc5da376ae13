use thiserror::Error;
use url::Url;

/// The single placeholder a data URI template must carry.
const PLACEHOLDER: &str = "{repo}";

pub type Result<T> = std::result::Result<T, TemplateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template must contain exactly one '{{repo}}' placeholder: '{0}'")]
    Parse(String),
    #[error("template expansion failed: {0}")]
    Expansion(String),
}

/// A URI template locating a repository's data directory.
///
/// Validated at startup: exactly one `{repo}` placeholder, e.g.
/// `https://raw.githubusercontent.com/sfomuseum-data/{repo}/main/data`.
/// [`DataUriTemplate::compose`] binds a repository name and joins a
/// relative path without dropping or doubling separators.
#[derive(Debug, Clone)]
pub struct DataUriTemplate {
    prefix: String,
    suffix: String,
}

impl DataUriTemplate {
    /// Parses and validates a template string.
    pub fn parse(template: &str) -> Result<Self> {
        let Some((prefix, suffix)) = template.split_once(PLACEHOLDER) else {
            return Err(TemplateError::Parse(template.to_string()));
        };

        if suffix.contains(PLACEHOLDER) {
            return Err(TemplateError::Parse(template.to_string()));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Expands the placeholder with a repository name.
    pub fn expand(&self, repo: &str) -> Result<String> {
        let safe = !repo.is_empty()
            && repo
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if !safe {
            return Err(TemplateError::Expansion(format!(
                "repository name contains reserved characters: '{repo}'"
            )));
        }

        Ok(format!("{}{}{}", self.prefix, repo, self.suffix))
    }

    /// Expands the template and joins the relative path, producing the
    /// absolute URL to redirect to.
    ///
    /// The returned string is the parsed URL's serialized form, so
    /// anything the parser had to escape (a stray space in the
    /// template, say) comes back header-safe.
    pub fn compose(&self, repo: &str, relative_path: &str) -> Result<String> {
        let root = self.expand(repo)?;

        let url = format!(
            "{}/{}",
            root.trim_end_matches('/'),
            relative_path.trim_start_matches('/')
        );

        // Reachability is not our business, being a URL at all is.
        let url = Url::parse(&url)
            .map_err(|e| TemplateError::Expansion(format!("composed URL '{url}' is invalid: {e}")))?;

        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "https://raw.githubusercontent.com/sfomuseum-data/{repo}/main/data";

    #[test]
    fn parse_valid_template() {
        assert!(DataUriTemplate::parse(TEMPLATE).is_ok());
    }

    #[test]
    fn parse_rejects_missing_placeholder() {
        let err = DataUriTemplate::parse("https://example.com/data").unwrap_err();
        assert!(matches!(err, TemplateError::Parse(_)));
    }

    #[test]
    fn parse_rejects_repeated_placeholder() {
        let err = DataUriTemplate::parse("https://example.com/{repo}/{repo}").unwrap_err();
        assert!(matches!(err, TemplateError::Parse(_)));
    }

    #[test]
    fn compose_scenario() {
        let template = DataUriTemplate::parse(TEMPLATE).unwrap();
        let url = template
            .compose("sfomuseum-data-maps", "136/039/132/7/1360391327.geojson")
            .unwrap();
        assert_eq!(
            url,
            "https://raw.githubusercontent.com/sfomuseum-data/sfomuseum-data-maps/main/data/136/039/132/7/1360391327.geojson"
        );
    }

    #[test]
    fn compose_equals_expand_then_join() {
        let template = DataUriTemplate::parse(TEMPLATE).unwrap();
        let repo = "sfomuseum-data-maps";
        let rel = "136/039/132/7/1360391327.geojson";

        let composed = template.compose(repo, rel).unwrap();
        let joined = format!("{}/{}", template.expand(repo).unwrap(), rel);
        assert_eq!(composed, joined);
    }

    #[test]
    fn compose_never_doubles_separators() {
        let template =
            DataUriTemplate::parse("https://example.com/data/{repo}/").unwrap();
        let url = template.compose("some-repo", "/1/1.geojson").unwrap();
        assert_eq!(url, "https://example.com/data/some-repo/1/1.geojson");
    }

    #[test]
    fn compose_escapes_what_the_parser_escapes() {
        let template = DataUriTemplate::parse("https://example.com/data files/{repo}").unwrap();
        let url = template.compose("some-repo", "1/1.geojson").unwrap();
        assert_eq!(url, "https://example.com/data%20files/some-repo/1/1.geojson");
    }

    #[test]
    fn expand_rejects_reserved_characters() {
        let template = DataUriTemplate::parse(TEMPLATE).unwrap();
        for repo in ["", "a/b", "a b", "a?b", "a#b"] {
            let err = template.expand(repo).unwrap_err();
            assert!(
                matches!(err, TemplateError::Expansion(_)),
                "expected Expansion error for {repo:?}"
            );
        }
    }

    #[test]
    fn compose_rejects_relative_result() {
        let template = DataUriTemplate::parse("data/{repo}").unwrap();
        let err = template.compose("some-repo", "1/1.geojson").unwrap_err();
        assert!(matches!(err, TemplateError::Expansion(_)));
    }
}
