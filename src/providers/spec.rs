//! The provider specification table.

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::EnumIter;

use super::parse::ParseRule;

/// Identifies one provider wire contract in the provider table.
///
/// TinyURL appears twice: the JSON API and the legacy plain-text endpoint
/// are distinct wire contracts with different request and response shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, ValueEnum)]
pub enum ProviderId {
    /// TinyURL JSON API (`api.tinyurl.com`).
    TinyUrl,
    /// TinyURL legacy plain-text endpoint (`api-create.php`).
    TinyUrlSimple,
    /// is.gd
    IsGd,
    /// v.gd
    VGd,
    /// clck.ru
    ClckRu,
    /// ulvis.net
    UlvisNet,
    /// ShortURL.at
    ShortUrlAt,
}

impl ProviderId {
    /// Returns the provider's display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::TinyUrl => "tinyurl",
            ProviderId::TinyUrlSimple => "tinyurl-simple",
            ProviderId::IsGd => "is.gd",
            ProviderId::VGd => "v.gd",
            ProviderId::ClckRu => "clck.ru",
            ProviderId::UlvisNet => "ulvis.net",
            ProviderId::ShortUrlAt => "shorturl.at",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP method used for a provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET with the destination URL in the query string.
    Get,
    /// POST with the destination URL in the body.
    Post,
}

/// How the destination URL is carried on the wire.
///
/// Query and form values are percent-encoded by the HTTP client's
/// serializers; no manual encoding happens anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestEncoding {
    /// Query-string parameter. `extra` pairs are fixed parameters appended
    /// before the URL parameter (e.g. `format=simple` for is.gd).
    Query {
        /// Name of the query parameter carrying the destination URL.
        param: &'static str,
        /// Fixed parameters sent with every request.
        extra: &'static [(&'static str, &'static str)],
    },
    /// URL-encoded form body with a single field.
    Form {
        /// Name of the form field carrying the destination URL.
        field: &'static str,
    },
    /// JSON body with a single string field.
    Json {
        /// Name of the JSON field carrying the destination URL.
        field: &'static str,
    },
}

/// One provider's complete wire contract.
#[derive(Debug, Clone)]
pub struct ProviderSpec {
    /// Which provider this entry describes.
    pub id: ProviderId,
    /// Endpoint the request is sent to. Owned so tests can point a table at
    /// a mock server.
    pub endpoint: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Request encoding.
    pub encoding: RequestEncoding,
    /// How a short link is extracted from a 2xx response.
    pub parse_rule: ParseRule,
}

/// Fixed priority order for the try-all modes.
///
/// The order is documented and deliberate, not derived from the table's
/// storage order.
pub const PRIORITY_ORDER: [ProviderId; 5] = [
    ProviderId::ShortUrlAt,
    ProviderId::IsGd,
    ProviderId::VGd,
    ProviderId::ClckRu,
    ProviderId::UlvisNet,
];

/// Read-only table of provider specifications.
///
/// Defined at startup and never mutated afterwards. [`ProviderTable::bundled`]
/// is the production table; tests build their own with mock endpoints.
#[derive(Debug, Clone)]
pub struct ProviderTable {
    specs: Vec<ProviderSpec>,
}

impl ProviderTable {
    /// Builds a table from explicit specs (used by tests).
    pub fn new(specs: Vec<ProviderSpec>) -> Self {
        Self { specs }
    }

    /// The production table with the real provider endpoints.
    pub fn bundled() -> Self {
        Self::new(vec![
            ProviderSpec {
                id: ProviderId::TinyUrl,
                endpoint: "https://api.tinyurl.com/create".to_string(),
                method: HttpMethod::Post,
                encoding: RequestEncoding::Json { field: "url" },
                parse_rule: ParseRule::TinyUrlJson,
            },
            ProviderSpec {
                id: ProviderId::TinyUrlSimple,
                endpoint: "https://tinyurl.com/api-create.php".to_string(),
                method: HttpMethod::Get,
                encoding: RequestEncoding::Query {
                    param: "url",
                    extra: &[],
                },
                parse_rule: ParseRule::PlainTextLink,
            },
            ProviderSpec {
                id: ProviderId::IsGd,
                endpoint: "https://is.gd/create.php".to_string(),
                method: HttpMethod::Get,
                encoding: RequestEncoding::Query {
                    param: "url",
                    extra: &[("format", "simple")],
                },
                parse_rule: ParseRule::PlainTextLink,
            },
            ProviderSpec {
                id: ProviderId::VGd,
                endpoint: "https://v.gd/create.php".to_string(),
                method: HttpMethod::Get,
                encoding: RequestEncoding::Query {
                    param: "url",
                    extra: &[("format", "simple")],
                },
                parse_rule: ParseRule::PlainTextLink,
            },
            ProviderSpec {
                id: ProviderId::ClckRu,
                endpoint: "https://clck.ru/--".to_string(),
                method: HttpMethod::Post,
                encoding: RequestEncoding::Form { field: "url" },
                parse_rule: ParseRule::PlainTextLink,
            },
            ProviderSpec {
                id: ProviderId::UlvisNet,
                endpoint: "https://ulvis.net/api.php".to_string(),
                method: HttpMethod::Get,
                encoding: RequestEncoding::Query {
                    param: "url",
                    extra: &[("type", "text")],
                },
                parse_rule: ParseRule::PlainTextLink,
            },
            ProviderSpec {
                id: ProviderId::ShortUrlAt,
                endpoint: "https://www.shorturl.at/shortener.php".to_string(),
                method: HttpMethod::Post,
                encoding: RequestEncoding::Form { field: "url" },
                parse_rule: ParseRule::PlainTextLink,
            },
        ])
    }

    /// Looks up the spec for a provider, if the table contains one.
    pub fn get(&self, id: ProviderId) -> Option<&ProviderSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }

    /// Specs in the fixed try-all priority order, skipping providers the
    /// table does not contain.
    pub fn priority_chain(&self) -> impl Iterator<Item = &ProviderSpec> {
        PRIORITY_ORDER.iter().filter_map(|id| self.get(*id))
    }

    /// Number of specs in the table.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_table_covers_all_providers() {
        let table = ProviderTable::bundled();
        assert_eq!(table.len(), 7);

        use strum::IntoEnumIterator;
        for id in ProviderId::iter() {
            assert!(table.get(id).is_some(), "{} missing from table", id);
        }
    }

    #[test]
    fn test_priority_chain_order() {
        let table = ProviderTable::bundled();
        let chain: Vec<ProviderId> = table.priority_chain().map(|spec| spec.id).collect();
        assert_eq!(
            chain,
            vec![
                ProviderId::ShortUrlAt,
                ProviderId::IsGd,
                ProviderId::VGd,
                ProviderId::ClckRu,
                ProviderId::UlvisNet,
            ]
        );
    }

    #[test]
    fn test_priority_chain_skips_absent_providers() {
        let bundled = ProviderTable::bundled();
        let table = ProviderTable::new(vec![
            bundled.get(ProviderId::VGd).unwrap().clone(),
            bundled.get(ProviderId::IsGd).unwrap().clone(),
        ]);

        // Priority order wins over table storage order.
        let chain: Vec<ProviderId> = table.priority_chain().map(|spec| spec.id).collect();
        assert_eq!(chain, vec![ProviderId::IsGd, ProviderId::VGd]);
    }

    #[test]
    fn test_tinyurl_is_not_in_the_try_all_chain() {
        // The TinyURL contracts are reachable by name only; the try-all
        // modes iterate the five plain providers.
        assert!(!PRIORITY_ORDER.contains(&ProviderId::TinyUrl));
        assert!(!PRIORITY_ORDER.contains(&ProviderId::TinyUrlSimple));
    }

    #[test]
    fn test_wire_shapes_match_provider_contracts() {
        let table = ProviderTable::bundled();

        let is_gd = table.get(ProviderId::IsGd).unwrap();
        assert_eq!(is_gd.method, HttpMethod::Get);
        assert_eq!(
            is_gd.encoding,
            RequestEncoding::Query {
                param: "url",
                extra: &[("format", "simple")],
            }
        );

        let clck = table.get(ProviderId::ClckRu).unwrap();
        assert_eq!(clck.method, HttpMethod::Post);
        assert_eq!(clck.encoding, RequestEncoding::Form { field: "url" });

        let tinyurl = table.get(ProviderId::TinyUrl).unwrap();
        assert_eq!(tinyurl.method, HttpMethod::Post);
        assert_eq!(tinyurl.encoding, RequestEncoding::Json { field: "url" });
        assert_eq!(tinyurl.parse_rule, ParseRule::TinyUrlJson);
    }

    #[test]
    fn test_provider_id_display() {
        assert_eq!(ProviderId::IsGd.to_string(), "is.gd");
        assert_eq!(ProviderId::ShortUrlAt.to_string(), "shorturl.at");
        assert_eq!(ProviderId::TinyUrl.to_string(), "tinyurl");
    }
}
