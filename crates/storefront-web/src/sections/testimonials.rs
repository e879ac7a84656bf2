//! Testimonials section.

use storefront_core::content::{StarSlot, Testimonial};

use super::html_escape;

const STAR_FULL: &str = r#"<svg class="w-4 h-4 text-amber-400" fill="currentColor" viewBox="0 0 20 20" data-star="full"><path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z"/></svg>"#;

const STAR_HALF: &str = r#"<svg class="w-4 h-4 text-amber-400 opacity-60" fill="currentColor" viewBox="0 0 20 20" data-star="half"><path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z"/></svg>"#;

const STAR_EMPTY: &str = r#"<svg class="w-4 h-4 text-slate-600" fill="none" stroke="currentColor" viewBox="0 0 24 24" data-star="empty"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11.049 2.927c.3-.921 1.603-.921 1.902 0l1.519 4.674a1 1 0 00.95.69h4.915c.969 0 1.371 1.24.588 1.81l-3.976 2.888a1 1 0 00-.363 1.118l1.518 4.674c.3.922-.755 1.688-1.538 1.118l-3.976-2.888a1 1 0 00-1.176 0l-3.976 2.888c-.783.57-1.838-.197-1.538-1.118l1.518-4.674a1 1 0 00-.363-1.118l-3.976-2.888c-.784-.57-.38-1.81.588-1.81h4.914a1 1 0 00.951-.69l1.519-4.674z"/></svg>"#;

/// Render the five star slots for a rating.
pub fn render_stars(slots: &[StarSlot]) -> String {
    slots
        .iter()
        .map(|slot| match slot {
            StarSlot::Full => STAR_FULL,
            StarSlot::Half => STAR_HALF,
            StarSlot::Empty => STAR_EMPTY,
        })
        .collect()
}

/// Render the testimonials grid.
pub fn render_testimonials(testimonials: &[Testimonial]) -> String {
    testimonials
        .iter()
        .map(|t| {
            format!(
                r#"<div class="card p-6">
    <div class="flex items-center gap-2 mb-3">
        <div class="w-10 h-10 rounded-full overflow-hidden border border-amber-200/20">
            <img src="{}" alt="{}" class="w-full h-full object-cover">
        </div>
        <div>
            <h4 class="font-medium text-primary">{}</h4>
            <div class="text-xs text-muted">{}</div>
        </div>
    </div>
    <div class="flex mb-2">{}</div>
    <p class="text-secondary italic">"{}"</p>
</div>"#,
                html_escape(&t.avatar),
                html_escape(&t.name),
                html_escape(&t.name),
                html_escape(&t.role),
                render_stars(&t.stars()),
                html_escape(&t.content)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
