//! Blog teasers.

use chrono::{Datelike, NaiveDate};
use storefront_core::content::BlogPost;
use storefront_core::Locale;

use super::html_escape;

/// Format a `yyyy-mm-dd` date for `locale`.
///
/// English reads "Oct 15, 2023", Arabic "15 أكتوبر 2023". Unparseable
/// dates are shown as given.
pub fn format_post_date(date: &str, locale: Locale) -> String {
    let Ok(parsed) = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") else {
        return date.to_string();
    };
    let month = locale.month_name(parsed.month());
    match locale {
        Locale::En => format!("{} {}, {}", month, parsed.day(), parsed.year()),
        Locale::Ar => format!("{} {} {}", parsed.day(), month, parsed.year()),
    }
}

/// Render the blog grid.
pub fn render_blog(posts: &[BlogPost], locale: Locale) -> String {
    posts
        .iter()
        .map(|post| {
            format!(
                r##"<div class="card overflow-hidden group" data-post="{id}">
    <div class="relative aspect-video overflow-hidden">
        <img src="{image}" alt="{title}" class="w-full h-full object-cover" loading="lazy">
    </div>
    <div class="p-5">
        <div class="flex items-center gap-2 text-sm text-muted mb-2">
            <span>{date}</span>
            <span>•</span>
            <span>{read_time}</span>
        </div>
        <h3 class="font-display font-medium text-primary text-lg mb-2">{title}</h3>
        <p class="text-secondary mb-4">{excerpt}</p>
        <a href="#" class="text-amber-400 hover:text-amber-300 font-medium">{read}</a>
    </div>
</div>"##,
                id = post.id,
                image = html_escape(&post.image),
                title = html_escape(&post.title),
                date = html_escape(&format_post_date(&post.date, locale)),
                read_time = html_escape(&post.read_time),
                excerpt = html_escape(&post.excerpt),
                read = html_escape(locale.t("blog.read")),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
