use crate::core::models::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePalette {
    pub background: &'static str,
    pub text: &'static str,
    pub muted_text: &'static str,
    pub card_background: &'static str,
    pub primary: &'static str,
}

pub fn get_palette(mode: &ThemeMode) -> PagePalette {
    match mode {
        ThemeMode::Dark => PagePalette {
            background: "#000000",
            text: "#ffffff",
            muted_text: "#b3b3b3",
            card_background: "#1a1a1f",
            primary: "#6699ff",
        },
        ThemeMode::Light => PagePalette {
            background: "#f2f2f7",
            text: "#1a1a1a",
            muted_text: "#555555",
            card_background: "#ffffff",
            primary: "#3366e6",
        },
    }
}

pub fn results_page_stylesheet(mode: &ThemeMode) -> String {
    let palette = get_palette(mode);

    format!(
        r#"body {{ background: {background}; color: {text}; font-family: sans-serif; margin: 2rem; }}
.games-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }}
.game-card {{ background: {card}; border-radius: 12px; overflow: hidden; opacity: 0; transform: translateY(20px); animation: card-enter 0.6s ease forwards; }}
.game-card a {{ color: inherit; text-decoration: none; display: block; }}
.game-image {{ height: 140px; display: flex; align-items: center; justify-content: center; background: {primary}; }}
.game-image img {{ width: 100%; height: 100%; object-fit: cover; }}
.game-icon {{ font-size: 3rem; }}
.game-info {{ padding: 1rem; }}
.game-description {{ color: {muted}; }}
.game-meta {{ display: flex; justify-content: space-between; }}
.game-category {{ color: {primary}; }}
@keyframes card-enter {{ to {{ opacity: 1; transform: translateY(0); }} }}"#,
        background = palette.background,
        text = palette.text,
        card = palette.card_background,
        primary = palette.primary,
        muted = palette.muted_text,
    )
}
