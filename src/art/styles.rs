use serde::Serialize;

pub const DEFAULT_STYLE: &str = "minimalist";

#[derive(Debug, Serialize)]
pub struct StyleDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub suffix: &'static str,
}

// Suffixes are tuned for YandexART.
pub static STYLES: &[StyleDefinition] = &[
    StyleDefinition {
        key: "minimalist",
        label: "Minimalism",
        emoji: "◻",
        suffix: "minimalist logo design, clean vector style, flat design, \
                 simple geometric shapes, white background, professional branding, \
                 negative space composition, single color palette",
    },
    StyleDefinition {
        key: "3d_render",
        label: "3D / Volumetric",
        emoji: "◈",
        suffix: "3D rendered logo, glossy material, soft shadows, \
                 depth and volume, studio lighting, modern product design, \
                 white background, hyperrealistic render",
    },
    StyleDefinition {
        key: "gradient",
        label: "Gradient",
        emoji: "◑",
        suffix: "gradient logo design, vibrant color gradient, glassmorphism style, \
                 smooth color transitions, modern ui design, \
                 luminous glow effect, clean vector shapes",
    },
    StyleDefinition {
        key: "neon_cyber",
        label: "Neon / Cyber",
        emoji: "◉",
        suffix: "neon logo design, cyberpunk aesthetic, glowing neon lights, \
                 dark background, electric colors, futuristic tech brand, \
                 luminous outline effect, synthwave style",
    },
    StyleDefinition {
        key: "geometric",
        label: "Geometric",
        emoji: "△",
        suffix: "geometric logo design, abstract geometric shapes, \
                 symmetrical composition, bold lines and angles, \
                 modern abstract art, vector illustration, \
                 limited color palette, optical illusion",
    },
    StyleDefinition {
        key: "handcraft",
        label: "Lettering",
        emoji: "✦",
        suffix: "hand-lettered logo design, custom typography, \
                 calligraphy style, artisan branding, \
                 vintage-modern fusion, warm tones, \
                 detailed ornamental elements",
    },
    StyleDefinition {
        key: "illustration",
        label: "Illustration",
        emoji: "⬡",
        suffix: "illustrated logo design, detailed vector illustration, \
                 character mascot style, vibrant colors, \
                 playful and friendly brand, flat illustration, \
                 sticker-like design, white background",
    },
    StyleDefinition {
        key: "retro_badge",
        label: "Retro / Badge",
        emoji: "⬟",
        suffix: "retro badge logo design, vintage emblem style, \
                 distressed texture, shield or circle badge frame, \
                 classic americana aesthetic, aged colors, \
                 detailed ornamental border, old school branding",
    },
];

pub fn find(key: &str) -> Option<&'static StyleDefinition> {
    STYLES.iter().find(|style| style.key == key)
}

// Looks up a style, falling back to the default one for unknown keys.
pub fn lookup(key: &str) -> &'static StyleDefinition {
    find(key).unwrap_or(&STYLES[0])
}
