//! Locale string tables.
//!
//! Lookups never fail: a key missing from the active table resolves to the
//! key itself so a render is never blocked on a translation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// BCP 47 language code, as written to `<html lang>`.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Text direction for the document root.
    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Parse a language code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Look up a display string.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(*self, key)
    }

    /// Short month name, `month` is 1-based.
    pub fn month_name(&self, month: u32) -> &'static str {
        let table = match self {
            Locale::En => &EN_MONTHS,
            Locale::Ar => &AR_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Resolve `key` in the table for `locale`, falling back to the key.
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    let table: &[(&str, &str)] = match locale {
        Locale::En => EN,
        Locale::Ar => AR,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

const EN_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const AR_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const EN: &[(&str, &str)] = &[
    ("nav.products", "Products"),
    ("nav.categories", "Categories"),
    ("nav.about", "About"),
    ("nav.testimonials", "Testimonials"),
    ("nav.blog", "Blog"),
    ("search.placeholder", "Search products..."),
    ("hero.title", "Elevate Your Everyday"),
    (
        "hero.subtitle",
        "Discover curated premium products designed for quality, comfort, and timeless style.",
    ),
    ("hero.shop", "Shop Now"),
    ("hero.learn", "Learn More"),
    ("sections.new", "New Arrivals"),
    ("sections.featured", "Featured Products"),
    ("sections.categories", "Shop by Category"),
    ("sections.all", "All Products"),
    ("sections.testimonials", "Customer Reviews"),
    ("sections.blog", "Latest Articles"),
    ("filters.all", "All Categories"),
    ("sort.default", "Sort by"),
    ("sort.price-asc", "Price: Low to High"),
    ("sort.price-desc", "Price: High to Low"),
    ("sort.rating", "Top Rated"),
    ("loading", "Loading products..."),
    ("about.title", "Crafted for Quality"),
    (
        "about.desc",
        "Lumière partners with artisans and ethical manufacturers to bring you products that blend timeless design with everyday functionality. Every item is selected for its materials, craftsmanship, and attention to detail.",
    ),
    ("about.point1", "Ethically sourced materials"),
    ("about.point2", "Rigorous quality testing"),
    ("about.point3", "Customer-first support"),
    ("about.products", "Products"),
    ("about.satisfaction", "Satisfaction"),
    ("about.support", "Support"),
    ("newsletter.title", "Stay in the Loop"),
    (
        "newsletter.desc",
        "Subscribe for exclusive offers, early access to new collections, and style inspiration.",
    ),
    ("newsletter.placeholder", "your@email.com"),
    ("newsletter.subscribe", "Subscribe"),
    ("newsletter.thanks", "Thank you for subscribing!"),
    ("footer.rights", "All rights reserved."),
    ("cart.title", "Your Cart"),
    ("cart.empty", "Your cart is empty."),
    ("cart.total", "Total"),
    ("cart.checkout", "Proceed to Checkout"),
    ("cart.add", "Add to Cart"),
    ("cart.remove", "Remove"),
    ("checkout.title", "Checkout simulation:"),
    ("checkout.items", "Items"),
    ("checkout.total", "Total"),
    ("checkout.thanks", "Thank you for your order!"),
    ("modal.view", "View Details"),
    ("product.rating", "rating"),
    ("new.view", "View All"),
    ("blog.view", "View All"),
    ("product.new", "New"),
    ("blog.read", "Read More"),
];

const AR: &[(&str, &str)] = &[
    ("nav.products", "المنتجات"),
    ("nav.categories", "الفئات"),
    ("nav.about", "من نحن"),
    ("nav.testimonials", "الآراء"),
    ("nav.blog", "المدونة"),
    ("search.placeholder", "ابحث عن منتجات..."),
    ("hero.title", "ارفع مستوى يومك"),
    (
        "hero.subtitle",
        "اكتشف منتجات متميزة مختارة بعناية تجمع بين الجودة والراحة والأناقة الخالدة.",
    ),
    ("hero.shop", "تسوق الآن"),
    ("hero.learn", "اعرف المزيد"),
    ("sections.new", "الوافد الجديد"),
    ("sections.featured", "منتجات مميزة"),
    ("sections.categories", "تسوق حسب الفئة"),
    ("sections.all", "جميع المنتجات"),
    ("sections.testimonials", "آراء العملاء"),
    ("sections.blog", "أحدث المقالات"),
    ("filters.all", "جميع الفئات"),
    ("sort.default", "ترتيب حسب"),
    ("sort.price-asc", "السعر: من الأقل للأعلى"),
    ("sort.price-desc", "السعر: من الأعلى للأقل"),
    ("sort.rating", "الأعلى تقييماً"),
    ("loading", "جاري تحميل المنتجات..."),
    ("about.title", "صُنعت للجودة"),
    (
        "about.desc",
        "تتعاون لوميير مع الحرفيين والمصنعين الأخلاقيين لتقديم منتجات تجمع بين التصميم الخالد والوظائف اليومية. يتم اختيار كل عنصر لمواده وجودته وانتباهه للتفاصيل.",
    ),
    ("about.point1", "مواد مُوردة بشكل أخلاقي"),
    ("about.point2", "اختبار جودة صارم"),
    ("about.point3", "دعم يركز على العميل"),
    ("about.products", "منتج"),
    ("about.satisfaction", "رضا"),
    ("about.support", "دعم"),
    ("newsletter.title", "ابقَ على اطلاع"),
    (
        "newsletter.desc",
        "اشترك للحصول على عروض حصرية ووصول مبكر للمجموعات الجديدة وإلهام الأناقة.",
    ),
    ("newsletter.placeholder", "بريدك@الإيميل.com"),
    ("newsletter.subscribe", "اشترك"),
    ("newsletter.thanks", "شكراً لاشتراكك!"),
    ("footer.rights", "جميع الحقوق محفوظة."),
    ("cart.title", "سلة التسوق"),
    ("cart.empty", "سلتك فارغة."),
    ("cart.total", "المجموع"),
    ("cart.checkout", "إتمام الشراء"),
    ("cart.add", "أضف للسلة"),
    ("cart.remove", "إزالة"),
    ("checkout.title", "محاكاة الدفع:"),
    ("checkout.items", "العناصر"),
    ("checkout.total", "المجموع"),
    ("checkout.thanks", "شكراً لطلبك!"),
    ("modal.view", "عرض التفاصيل"),
    ("product.rating", "تقييم"),
    ("new.view", "عرض الكل"),
    ("blog.view", "عرض الكل"),
    ("product.new", "جديد"),
    ("blog.read", "اقرأ المزيد"),
];
