//! Editorial content shown alongside the catalog.

use crate::ids::{PostId, TestimonialId};
use serde::{Deserialize, Serialize};

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: TestimonialId,
    pub name: String,
    pub role: String,
    pub content: String,
    /// Star rating in `[0, 5]`, halves allowed.
    pub rating: f64,
    /// Avatar image URL.
    pub avatar: String,
}

/// Filled state of one of the five rating star slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarSlot {
    Full,
    Half,
    Empty,
}

/// Number of star slots drawn per rating.
pub const STAR_SLOTS: usize = 5;

impl Testimonial {
    /// Star slots for this testimonial's rating.
    pub fn stars(&self) -> [StarSlot; STAR_SLOTS] {
        star_slots(self.rating)
    }
}

/// Full stars for the integer part, one half star when a fractional part
/// exists, empty for the rest.
pub fn star_slots(rating: f64) -> [StarSlot; STAR_SLOTS] {
    let rating = rating.clamp(0.0, STAR_SLOTS as f64);
    let full = rating.floor() as usize;
    let has_half = rating.fract() != 0.0;
    let mut slots = [StarSlot::Empty; STAR_SLOTS];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = if i < full {
            StarSlot::Full
        } else if i == full && has_half {
            StarSlot::Half
        } else {
            StarSlot::Empty
        };
    }
    slots
}

/// A blog post teaser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    /// Publication date, `yyyy-mm-dd`.
    pub date: String,
    #[serde(rename = "readTime", alias = "read_time")]
    pub read_time: String,
}

/// A statistic in the about strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutItem {
    pub value: &'static str,
    /// String table key for the caption.
    pub label_key: &'static str,
}

/// The about strip, in display order.
pub const ABOUT_ITEMS: [AboutItem; 3] = [
    AboutItem {
        value: "24+",
        label_key: "about.products",
    },
    AboutItem {
        value: "98%",
        label_key: "about.satisfaction",
    },
    AboutItem {
        value: "24/7",
        label_key: "about.support",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use StarSlot::*;

    #[test]
    fn test_star_slots() {
        assert_eq!(star_slots(5.0), [Full; 5]);
        assert_eq!(star_slots(4.5), [Full, Full, Full, Full, Half]);
        assert_eq!(star_slots(3.2), [Full, Full, Full, Half, Empty]);
        assert_eq!(star_slots(0.0), [Empty; 5]);
        assert_eq!(star_slots(7.0), [Full; 5]);
    }

    #[test]
    fn test_blog_post_accepts_camel_case() {
        let post: BlogPost = serde_json::from_str(
            r#"{"id":1,"title":"t","excerpt":"e","image":"i","date":"2023-10-15","readTime":"5 min"}"#,
        )
        .unwrap();
        assert_eq!(post.read_time, "5 min");
    }
}
