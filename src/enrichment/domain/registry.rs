use packageurl::PackageUrl;

/// RegistryKey - the ecosyste.ms lookup key derived from a purl
///
/// A key is the pair of registry domain and encoded package name that the
/// ecosyste.ms API addresses a package by. Derivation is deterministic and
/// version-independent: two purls sharing type, namespace and name always
/// map to the same key.
///
/// An empty registry domain means the purl type is not served by any known
/// registry. That is not an error; the key is simply unresolvable and a
/// lookup against it yields no metadata.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RegistryKey {
    registry: String,
    name: String,
}

impl RegistryKey {
    /// Derives the lookup key for a parsed purl.
    ///
    /// npm names in the ecosyste.ms API include the purl namespace
    /// followed by a `/` and are percent-encoded. Other package managers
    /// separate the purl namespace and name with a `:`.
    pub fn from_purl(purl: &PackageUrl) -> Self {
        let name = match (purl.ty(), purl.namespace()) {
            ("npm", Some(namespace)) => {
                urlencoding::encode(&format!("{}/{}", namespace, purl.name())).into_owned()
            }
            ("npm", None) => purl.name().to_string(),
            (_, Some(namespace)) => format!("{}:{}", namespace, purl.name()),
            (_, None) => purl.name().to_string(),
        };

        Self {
            registry: registry_for_type(purl.ty()).to_string(),
            name,
        }
    }

    /// The registry domain, e.g. "npmjs.org"; empty for unknown purl types
    pub fn registry(&self) -> &str {
        &self.registry
    }

    /// The ecosystem-specific encoded package name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether any registry serves this key
    pub fn is_resolvable(&self) -> bool {
        !self.registry.is_empty()
    }
}

/// Fixed purl-type to registry-domain table.
///
/// Built into the binary and never mutated, so concurrent tasks can
/// consult it without synchronization.
fn registry_for_type(purl_type: &str) -> &'static str {
    match purl_type {
        "npm" => "npmjs.org",
        "golang" => "proxy.golang.org",
        "nuget" => "nuget.org",
        "hex" => "hex.pm",
        "maven" => "repo1.maven.org",
        "pypi" => "pypi.org",
        "composer" => "packagist.org",
        "gem" => "rubygems.org",
        "cargo" => "crates.io",
        "cocoapods" => "cocoapod.org",
        "apk" => "alpine",
        _ => "",
    }
}
