use crate::countdown::PromoWindow;

pub const APP_URL: &str = "https://app.getstorm.io";
pub const SCHEDULING_URL: &str = "https://calendly.com/andrew-getstorm";
pub const DEMO_VIDEO_URL: &str = "https://player.vimeo.com/video/1139431440?h=5aba4e318d";
pub const CONTACT_EMAIL: &str = "andrew@getstorm.io";

/// Everything the sale banner and the pricing badges say about the current
/// promotion. Sale copy rotates every campaign, so it lives here as data
/// rather than inside the components.
pub struct PromoConfig {
    pub code: &'static str,
    pub percent_off: u8,
    pub tagline: &'static str,
    pub headline: &'static str,
    pub window: PromoWindow,
}

/// Cyber Monday 2025 campaign: Dec 1st through Dec 5th, Pacific time.
pub const PROMO: PromoConfig = PromoConfig {
    code: "CYBER50",
    percent_off: 50,
    tagline: "Cyber Monday • Dec. 1st - 5th Only",
    headline: "Supercharge your SWPPP workflow & save 50% on any Storm plan",
    window: PromoWindow {
        starts_at: 1_764_576_000, // 2025-12-01 00:00 PST
        ends_at: 1_765_008_000,   // 2025-12-06 00:00 PST
    },
};
