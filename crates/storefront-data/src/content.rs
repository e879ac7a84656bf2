//! Testimonial and blog content sources.

use async_trait::async_trait;
use storefront_core::content::{BlogPost, Testimonial};
use storefront_core::ids::{PostId, TestimonialId};
use storefront_observability::StructuredLogger;

use crate::client::FetchError;
use crate::dependency::DependencyTag;

/// A source of editorial content.
#[async_trait(?Send)]
pub trait ContentSource {
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, FetchError>;

    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>, FetchError>;
}

/// Built-in content bundled with the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContentSource;

impl StaticContentSource {
    pub fn testimonials() -> Vec<Testimonial> {
        vec![
            Testimonial {
                id: TestimonialId::new(1),
                name: "Sarah Johnson".into(),
                role: "Designer".into(),
                content: "Lumière products have transformed my daily routine. The quality and attention to detail is unmatched in the market.".into(),
                rating: 5.0,
                avatar: "https://randomuser.me/api/portraits/women/32.jpg".into(),
            },
            Testimonial {
                id: TestimonialId::new(2),
                name: "Michael Chen".into(),
                role: "Architect".into(),
                content: "I've been a loyal customer for 3 years now. Their customer service is exceptional and their products always exceed expectations.".into(),
                rating: 5.0,
                avatar: "https://randomuser.me/api/portraits/men/45.jpg".into(),
            },
            Testimonial {
                id: TestimonialId::new(3),
                name: "Amina Hassan".into(),
                role: "Entrepreneur".into(),
                content: "The craftsmanship and ethical approach of Lumière is exactly what I look for in a brand. Highly recommend their home collection.".into(),
                rating: 4.5,
                avatar: "https://randomuser.me/api/portraits/women/68.jpg".into(),
            },
        ]
    }

    pub fn blog_posts() -> Vec<BlogPost> {
        vec![
            BlogPost {
                id: PostId::new(1),
                title: "The Art of Slow Living".into(),
                excerpt: "Discover how intentionally designed products can help you create moments of calm in your busy life.".into(),
                image: "https://picsum.photos/seed/blog1/600/400".into(),
                date: "2023-10-15".into(),
                read_time: "5 min".into(),
            },
            BlogPost {
                id: PostId::new(2),
                title: "Sustainable Materials Guide".into(),
                excerpt: "Learn about the eco-friendly materials we use in our products and their environmental impact.".into(),
                image: "https://picsum.photos/seed/blog2/600/400".into(),
                date: "2023-10-05".into(),
                read_time: "8 min".into(),
            },
            BlogPost {
                id: PostId::new(3),
                title: "Home Styling Tips".into(),
                excerpt: "Professional tips on how to incorporate premium products into your living space for maximum impact.".into(),
                image: "https://picsum.photos/seed/blog3/600/400".into(),
                date: "2023-09-28".into(),
                read_time: "6 min".into(),
            },
        ]
    }
}

#[async_trait(?Send)]
impl ContentSource for StaticContentSource {
    async fn fetch_testimonials(&self) -> Result<Vec<Testimonial>, FetchError> {
        Ok(Self::testimonials())
    }

    async fn fetch_blog_posts(&self) -> Result<Vec<BlogPost>, FetchError> {
        Ok(Self::blog_posts())
    }
}

/// Fetch testimonials, degrading to an empty list on failure.
pub async fn load_testimonials<C: ContentSource + ?Sized>(
    source: &C,
    logger: &StructuredLogger,
) -> Vec<Testimonial> {
    source
        .fetch_testimonials()
        .await
        .unwrap_or_else(|e| degrade(logger, "testimonials", &e))
}

/// Fetch blog posts, degrading to an empty list on failure.
pub async fn load_blog_posts<C: ContentSource + ?Sized>(
    source: &C,
    logger: &StructuredLogger,
) -> Vec<BlogPost> {
    source
        .fetch_blog_posts()
        .await
        .unwrap_or_else(|e| degrade(logger, "blog posts", &e))
}

fn degrade<T>(logger: &StructuredLogger, what: &str, e: &FetchError) -> Vec<T> {
    logger
        .warn_builder(format!("{what} fetch failed, continuing without them"))
        .field("dependency", DependencyTag::Content.name())
        .error(e)
        .emit();
    Vec::new()
}
