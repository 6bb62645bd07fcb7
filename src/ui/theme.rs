//! Colors and global styling for the chat client.
//!
//! Panels share one semantic palette: a surface hierarchy for depth, an
//! accent for the selected chat, bubble fills that tell own messages from
//! incoming ones, and a deterministic per-user color for avatars.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

use crate::model::User;

/// Semantic palette (4-level surface hierarchy)
#[derive(Clone, Debug)]
pub struct ParleyTheme {
    pub name: String,
    /// App background, sidebar, list rows, hovered rows
    pub surface: [Color32; 4],
    pub accent: Color32,
    pub on_accent: Color32,
    pub error: Color32,
    pub info: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub border: Color32,
    /// Bubble behind the signed-in user's messages
    pub bubble_own: Color32,
    /// Bubble behind everyone else's messages
    pub bubble_other: Color32,
    /// Text drawn on bubbles (bubbles are light in both themes)
    pub bubble_text: Color32,
    pub skeleton: Color32,
}

impl ParleyTheme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(19, 19, 26),
                Color32::from_rgb(28, 28, 38),
                Color32::from_rgb(37, 37, 50),
                Color32::from_rgb(46, 46, 62),
            ],
            accent: Color32::from_rgb(56, 178, 172),
            on_accent: Color32::WHITE,
            error: Color32::from_rgb(240, 71, 71),
            info: Color32::from_rgb(0, 175, 244),
            text_primary: Color32::WHITE,
            text_muted: Color32::from_rgb(114, 118, 125),
            border: Color32::from_rgb(47, 49, 54),
            bubble_own: Color32::from_rgb(190, 227, 248),
            bubble_other: Color32::from_rgb(185, 245, 208),
            bubble_text: Color32::from_rgb(6, 6, 7),
            skeleton: Color32::from_rgb(56, 56, 74),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::WHITE,
                Color32::from_rgb(248, 248, 248),
                Color32::from_rgb(232, 232, 232),
                Color32::from_rgb(218, 218, 218),
            ],
            accent: Color32::from_rgb(56, 178, 172),
            on_accent: Color32::WHITE,
            error: Color32::from_rgb(229, 62, 62),
            info: Color32::from_rgb(49, 130, 206),
            text_primary: Color32::BLACK,
            text_muted: Color32::from_rgb(116, 127, 141),
            border: Color32::from_rgb(210, 213, 219),
            bubble_own: Color32::from_rgb(190, 227, 248),
            bubble_other: Color32::from_rgb(185, 245, 208),
            bubble_text: Color32::from_rgb(6, 6, 7),
            skeleton: Color32::from_rgb(226, 232, 240),
        }
    }

    /// Theme by settings name; anything but "light" is dark.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }
}

fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(11.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(26.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
    ]
    .into()
}

/// Apply spacing, typography and widget styling for `theme`.
pub fn apply_app_style(ctx: &egui::Context, theme: &ParleyTheme) {
    ctx.set_visuals(if theme.name == "Light" {
        egui::Visuals::light()
    } else {
        egui::Visuals::dark()
    });

    let mut style = (*ctx.style()).clone();
    style.text_styles = configure_text_styles();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(6);
    style.visuals.selection.bg_fill = theme.accent;
    ctx.set_style(style);
}

const AVATAR_COLORS: [Color32; 12] = [
    Color32::from_rgb(231, 76, 60),
    Color32::from_rgb(46, 204, 113),
    Color32::from_rgb(52, 152, 219),
    Color32::from_rgb(155, 89, 182),
    Color32::from_rgb(241, 196, 15),
    Color32::from_rgb(230, 126, 34),
    Color32::from_rgb(26, 188, 156),
    Color32::from_rgb(236, 100, 166),
    Color32::from_rgb(41, 128, 185),
    Color32::from_rgb(39, 174, 96),
    Color32::from_rgb(192, 57, 43),
    Color32::from_rgb(211, 84, 0),
];

/// Stable avatar color for a user id (FNV-1a over the id bytes).
pub fn user_color(user_id: &str) -> Color32 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in user_id.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    AVATAR_COLORS[(hash as usize) % AVATAR_COLORS.len()]
}

/// Up to two initials from a display name: "Jane Doe" -> "JD", "bob" -> "B".
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Profile picture URL worth fetching, if the user has one.
pub fn avatar_url(user: &User) -> Option<&str> {
    user.avatar
        .as_deref()
        .map(str::trim)
        .filter(|url| url.starts_with("https://") || url.starts_with("http://"))
}

/// Draw a circular avatar: the profile picture once loaded, initials otherwise.
pub fn render_avatar(ui: &mut egui::Ui, user: &User, size: f32) -> egui::Response {
    let extent = egui::vec2(size, size);

    if let Some(url) = avatar_url(user) {
        let image = egui::Image::new(url)
            .fit_to_exact_size(extent)
            .corner_radius(size / 2.0)
            .sense(egui::Sense::hover());
        if matches!(
            image.load_for_size(ui.ctx(), extent),
            Ok(egui::load::TexturePoll::Ready { .. })
        ) {
            return ui.add(image);
        }
    }

    let (rect, response) = ui.allocate_exact_size(extent, egui::Sense::hover());

    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, user_color(user.id.as_str()));
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials(&user.name),
        FontId::new(size * 0.42, FontFamily::Proportional),
        Color32::WHITE,
    );

    response
}
