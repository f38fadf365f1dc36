// Domain module tests.

use super::*;
use strum::IntoEnumIterator;

fn test_extractor() -> Arc<TldExtractor> {
    Arc::clone(&PSL_EXTRACTOR)
}

#[test]
fn test_extract_domain_basic() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://www.example.com/path").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_with_port() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://www.example.com:8080/path").unwrap(),
        "example.com"
    );
}

#[test]
fn test_extract_domain_subdomain() {
    let extractor = test_extractor();
    assert_eq!(
        extract_domain(&extractor, "https://news.example.com").unwrap(),
        "example.com"
    );
    assert_eq!(
        extract_domain(&extractor, "http://gists.github.com").unwrap(),
        "github.com"
    );
}

#[test]
fn test_extract_domain_uk_domain() {
    let extractor = test_extractor();
    // Multi-label public suffix keeps one extra label
    assert_eq!(
        extract_domain(&extractor, "https://shop.example.co.uk").unwrap(),
        "example.co.uk"
    );
}

#[test]
fn test_extract_domain_invalid_url() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "not-a-url").is_err());
}

#[test]
fn test_extract_domain_ip_address() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "http://192.168.1.10/admin").is_err());
}

#[test]
fn test_extract_domain_url_without_host() {
    let extractor = test_extractor();
    assert!(extract_domain(&extractor, "file:///path/to/file").is_err());
}

#[test]
fn test_public_suffix_strategy_reduce() {
    let strategy = RegisteredDomainStrategy::PublicSuffix;
    assert_eq!(strategy.reduce("a.b.example.org"), Some("example.org".into()));
    assert_eq!(strategy.reduce("10.0.0.1"), None);
}

#[test]
fn test_last_two_labels() {
    assert_eq!(last_two_labels("news.example.com"), Some("example.com".into()));
    assert_eq!(last_two_labels("Example.COM."), Some("example.com".into()));
    // The heuristic does not know about multi-label suffixes
    assert_eq!(last_two_labels("shop.example.co.uk"), Some("co.uk".into()));
    assert_eq!(last_two_labels("localhost"), None);
    assert_eq!(last_two_labels("127.0.0.1"), None);
}

#[test]
fn test_strategy_names() {
    let names: Vec<String> = RegisteredDomainStrategy::iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(names, vec!["public-suffix", "last-two-labels"]);
    assert_eq!(
        RegisteredDomainStrategy::default(),
        RegisteredDomainStrategy::PublicSuffix
    );
}

#[test]
fn test_host_candidate() {
    assert_eq!(host_candidate("github.com"), "github.com");
    assert_eq!(
        host_candidate("https://example.com/test.html?test=1&test2=2"),
        "example.com"
    );
    assert_eq!(
        host_candidate("https://user:pw@news.example.com:8080/a"),
        "news.example.com"
    );
    assert_eq!(host_candidate("bob@example.org"), "example.org");
    assert_eq!(host_candidate("example.net?ref=1"), "example.net");
    assert_eq!(host_candidate("example.net#top"), "example.net");
}

#[test]
fn test_network_location() {
    assert_eq!(network_location("GitHub.com"), Some("github.com".into()));
    assert_eq!(
        network_location("https://news.example.com/path?q=1"),
        Some("news.example.com".into())
    );
    assert_eq!(
        network_location("example.com:8443/admin"),
        Some("example.com:8443".into())
    );
    assert_eq!(network_location("bob@example.org"), Some("example.org".into()));
    assert_eq!(network_location("http://"), None);
}

#[test]
fn test_network_location_keeps_written_idn_host() {
    assert_eq!(network_location("München.de"), Some("münchen.de".into()));
    assert_eq!(
        network_location("https://bücher.example.com/katalog"),
        Some("bücher.example.com".into())
    );
}

#[test]
fn test_has_tld_suffix() {
    assert!(has_tld_suffix("github.com", "com"));
    assert!(has_tld_suffix("GISTS.GITHUB.COM", "com"));
    assert!(!has_tld_suffix("com", "com"));
    assert!(!has_tld_suffix("example.community", "com"));
    assert!(!has_tld_suffix("examplecom", "com"));
    assert!(has_tld_suffix("example.co", "co"));
}
