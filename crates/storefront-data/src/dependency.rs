//! Dependency tagging for outbound fetches.

/// Upstream a fetch belongs to, named in fetch and degradation logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyTag {
    /// Product catalog service.
    Catalog,
    /// Testimonials and blog posts.
    Content,
}

impl DependencyTag {
    /// Get the name of this dependency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Content => "content",
        }
    }
}

impl std::fmt::Display for DependencyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
