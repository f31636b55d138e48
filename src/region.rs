/*!
 * Region data model shared by the pipeline stages.
 *
 * A region starts as raw text between a marker pair, gets rewritten into
 * chunks and parameters by the template stage if it carries placeholders,
 * and is finally replicated per language by the translator. The language
 * tag only exists from the translator stage onward, so pre-translation
 * and post-translation regions are distinct types.
 */

/// Body of a region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionBody {
    /// Raw content with no placeholders
    Plain(String),

    /// Content split on `{param}` placeholders.
    ///
    /// Invariant: `chunks.len() == params.len() + 1`. Boundary chunks may
    /// be empty strings but always exist, so the interleaving structure is
    /// positionally stable regardless of chunk content.
    Template {
        /// Literal segments between placeholders, in order
        chunks: Vec<String>,
        /// Placeholder names in source order, duplicates preserved
        params: Vec<String>,
    },
}

impl RegionBody {
    /// Iterate over the literal text segments of this body.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::Plain(content) => std::slice::from_ref(content).iter(),
            Self::Template { chunks, .. } => chunks.iter(),
        }
        .map(String::as_str)
    }
}

/// A named span of content extracted from between a matched marker pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Marker-pair name, unique within one language
    pub name: String,

    /// Region body
    pub body: RegionBody,
}

impl Region {
    /// Create a plain region from raw content.
    pub fn plain(name: impl Into<String>, content: impl Into<String>) -> Self {
        Region {
            name: name.into(),
            body: RegionBody::Plain(content.into()),
        }
    }
}

/// A region bound to one language, produced by the translator stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedRegion {
    /// Marker-pair name or injected fragment name
    pub name: String,

    /// Language code this copy was resolved for
    pub lang: String,

    /// Region body with phrases resolved for `lang`
    pub body: RegionBody,
}
