mod split;

pub use split::{split_url, UrlParts};

pub const NUM_FEATURES: usize = 9;

pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "length",
    "dot_count",
    "has_at",
    "host_has_hyphen",
    "is_https",
    "host_dot_count",
    "slash_count",
    "digit_count",
    "special_char_count",
];

const SPECIAL_CHARS: [char; 5] = ['?', '&', '=', '_', '$'];

/// Lexical features of a single URL, in classifier column order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureVector {
    pub length: f64,
    pub dot_count: f64,
    pub has_at: f64,
    pub host_has_hyphen: f64,
    pub is_https: f64,
    pub host_dot_count: f64,
    pub slash_count: f64,
    pub digit_count: f64,
    pub special_char_count: f64,
}

impl FeatureVector {
    pub fn from_url(url: &str) -> Self {
        let parts = split_url(url);
        let host = parts.authority.as_str();
        Self {
            length: url.chars().count() as f64,
            dot_count: count(url, |c| c == '.'),
            has_at: flag(url.contains('@')),
            host_has_hyphen: flag(host.contains('-')),
            is_https: flag(parts.scheme == "https"),
            host_dot_count: count(host, |c| c == '.'),
            slash_count: count(url, |c| c == '/'),
            digit_count: count(url, |c| c.is_ascii_digit()),
            special_char_count: count(url, |c| SPECIAL_CHARS.contains(&c)),
        }
    }

    pub fn as_row(&self) -> Vec<f64> {
        vec![
            self.length,
            self.dot_count,
            self.has_at,
            self.host_has_hyphen,
            self.is_https,
            self.host_dot_count,
            self.slash_count,
            self.digit_count,
            self.special_char_count,
        ]
    }

    /// Wraps the row in a one-row matrix for batch-style classifiers.
    pub fn into_matrix(self) -> Vec<Vec<f64>> {
        vec![self.as_row()]
    }
}

/// Extracts the feature matrix for one URL: exactly one row of
/// [`NUM_FEATURES`] values.
pub fn extract_features(url: &str) -> Vec<Vec<f64>> {
    FeatureVector::from_url(url).into_matrix()
}

fn count(haystack: &str, matches: impl Fn(char) -> bool) -> f64 {
    haystack.chars().filter(|&c| matches(c)).count() as f64
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "http://example.com/login",
        "https://secure.bank-login.example.co.uk/verify?acct=123&token=$abc_def",
        "http://bad-site.com/@verify?id=1&x=2",
        "not a url at all",
        "::::",
        "HTTPS://UPPER.example",
        "ftp://10.0.0.1:21/files",
        "https:opaque-path",
        "http://bücher.de/straße",
        "   ",
        "?&=_$",
    ];

    #[test]
    fn returns_single_row_of_nine_values() {
        for url in SAMPLES {
            let matrix = extract_features(url);
            assert_eq!(matrix.len(), 1, "{url}");
            assert_eq!(matrix[0].len(), NUM_FEATURES, "{url}");
            assert!(
                matrix[0].iter().all(|value| value.is_finite() && *value >= 0.0),
                "{url}: {:?}",
                matrix[0]
            );
        }
    }

    #[test]
    fn extraction_is_deterministic() {
        for url in SAMPLES {
            assert_eq!(extract_features(url), extract_features(url), "{url}");
        }
    }

    #[test]
    fn plain_login_url() {
        let row = &extract_features("http://example.com/login")[0];
        assert_eq!(row, &vec![24.0, 1.0, 0.0, 0.0, 0.0, 1.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn suspicious_url_flags() {
        let features = FeatureVector::from_url("http://bad-site.com/@verify?id=1&x=2");
        assert_eq!(features.length, 36.0);
        assert_eq!(features.dot_count, 1.0);
        assert_eq!(features.has_at, 1.0);
        assert_eq!(features.host_has_hyphen, 1.0);
        assert_eq!(features.is_https, 0.0);
        assert_eq!(features.host_dot_count, 1.0);
        assert_eq!(features.slash_count, 3.0);
        assert_eq!(features.digit_count, 2.0);
        // '?', '&' and both '='
        assert_eq!(features.special_char_count, 4.0);
    }

    #[test]
    fn is_https_follows_parsed_scheme() {
        assert_eq!(FeatureVector::from_url("https://example.com").is_https, 1.0);
        assert_eq!(FeatureVector::from_url("HTTPS://example.com").is_https, 1.0);
        assert_eq!(FeatureVector::from_url("https:opaque").is_https, 1.0);
        assert_eq!(FeatureVector::from_url("http://https.com").is_https, 0.0);
        assert_eq!(FeatureVector::from_url("httpss://example.com").is_https, 0.0);
        assert_eq!(FeatureVector::from_url("example.com/https").is_https, 0.0);
    }

    #[test]
    fn host_features_ignore_path() {
        let features = FeatureVector::from_url("http://example.com/some-path/a.b.c");
        assert_eq!(features.host_has_hyphen, 0.0);
        assert_eq!(features.host_dot_count, 1.0);
        assert_eq!(features.dot_count, 3.0);
    }

    #[test]
    fn host_features_include_userinfo_and_port() {
        let features = FeatureVector::from_url("http://my-user@a.b.example.com:8080/");
        assert_eq!(features.host_has_hyphen, 1.0);
        assert_eq!(features.host_dot_count, 3.0);
        assert_eq!(features.has_at, 1.0);
    }

    #[test]
    fn url_without_authority_has_zero_host_features() {
        let features = FeatureVector::from_url("bad-site.com/login");
        assert_eq!(features.host_has_hyphen, 0.0);
        assert_eq!(features.host_dot_count, 0.0);
        assert_eq!(features.dot_count, 1.0);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(FeatureVector::from_url("http://bücher.de").length, 16.0);
    }

    #[test]
    fn counts_every_special_char() {
        let features = FeatureVector::from_url("?&=_$?");
        assert_eq!(features.special_char_count, 6.0);
    }

    #[test]
    fn row_order_matches_feature_names() {
        let features = FeatureVector::from_url("https://a-b.c/1?x");
        let row = features.as_row();
        let by_name: Vec<(&str, f64)> = FEATURE_NAMES.iter().copied().zip(row).collect();
        assert_eq!(by_name[0], ("length", 17.0));
        assert_eq!(by_name[3], ("host_has_hyphen", 1.0));
        assert_eq!(by_name[4], ("is_https", 1.0));
        assert_eq!(by_name[7], ("digit_count", 1.0));
        assert_eq!(by_name[8], ("special_char_count", 1.0));
    }
}
