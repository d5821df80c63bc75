//! Curated color palettes and styling notes for each skin subtype.
//!
//! Pure data. Hex values are kept exactly as curated (uppercase).

use crate::recommend::{RecommendationEntry, SubtypeProfile};

const fn entry(
    name: &'static str,
    hex: &'static str,
    reason: &'static str,
) -> RecommendationEntry {
    RecommendationEntry { name, hex, reason }
}

pub(crate) const LIGHT_WARM_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Peach", "#FFDAB9", "Enhances warm glow"),
    entry("Coral", "#FF7F50", "Adds vibrance"),
    entry("Yellow", "#FFD700", "Matches undertone"),
    entry("Beige", "#F5F5DC", "Soft neutral"),
    entry("Light Brown", "#C4A484", "Balances warmth"),
    entry("Soft Pink", "#FFB6C1", "Adds freshness"),
    entry("Olive", "#808000", "Earthy balance"),
    entry("Amber", "#FFBF00", "Boosts warm undertone"),
    entry("Ivory", "#FFFFF0", "Brightens skin"),
    entry("Salmon", "#FA8072", "Complements tone"),
];

pub(crate) const LIGHT_COOL_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Sky Blue", "#87CEEB", "Brightens undertone"),
    entry("Lavender", "#E6E6FA", "Softens look"),
    entry("Mint", "#98FF98", "Fresh contrast"),
    entry("Silver", "#C0C0C0", "Cool metallic"),
    entry("Lilac", "#D8BFD8", "Gentle contrast"),
    entry("Turquoise", "#40E0D0", "Fresh vibrance"),
    entry("Ice Blue", "#AFEEEE", "Enhances radiance"),
    entry("Soft Gray", "#D3D3D3", "Neutral base"),
    entry("Rose Pink", "#FFC0CB", "Adds softness"),
    entry("Aqua", "#00FFFF", "Bright pop"),
];

pub(crate) const LIGHT_NEUTRAL_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Beige", "#F5F5DC", "Neutral match"),
    entry("Cream", "#FFFDD0", "Soft brightness"),
    entry("White", "#FFFFFF", "Classic neutral"),
    entry("Sand", "#C2B280", "Natural earthy tone"),
    entry("Soft Pink", "#FFD1DC", "Gentle contrast"),
    entry("Gray", "#D3D3D3", "Balances tone"),
    entry("Champagne", "#F7E7CE", "Elegant glow"),
    entry("Taupe", "#B38B6D", "Neutral earthy shade"),
    entry("Pale Peach", "#FFE5B4", "Adds warmth"),
    entry("Ivory", "#FFFFF0", "Clean, soft look"),
];

pub(crate) const DUSKY_WARM_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Orange", "#FFA500", "Highlights warmth"),
    entry("Mustard", "#FFDB58", "Bold and vibrant"),
    entry("Olive Green", "#808000", "Earthy complement"),
    entry("Coral", "#FF7F50", "Adds freshness"),
    entry("Brown", "#8B4513", "Balances undertone"),
    entry("Golden Yellow", "#FFD700", "Accentuates warmth"),
    entry("Rust", "#B7410E", "Earthy richness"),
    entry("Peach", "#FFDAB9", "Softens tone"),
    entry("Camel", "#C19A6B", "Neutral earthy look"),
    entry("Warm Beige", "#F5F5DC", "Complements tone"),
];

pub(crate) const DUSKY_COOL_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Navy Blue", "#000080", "Strong contrast"),
    entry("Burgundy", "#800020", "Adds richness"),
    entry("Emerald Green", "#50C878", "Bright balance"),
    entry("Purple", "#800080", "Enhances undertone"),
    entry("Teal", "#008080", "Balances coolness"),
    entry("Gray", "#808080", "Neutral grounding"),
    entry("Magenta", "#FF00FF", "Adds pop"),
    entry("Blue", "#0000FF", "Sharp, clean contrast"),
    entry("Lavender", "#E6E6FA", "Soft balance"),
    entry("Rose", "#FF007F", "Brightens complexion"),
];

pub(crate) const DUSKY_NEUTRAL_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Teal", "#008080", "Balances undertone"),
    entry("Olive", "#808000", "Earthy complement"),
    entry("Coral", "#FF7F50", "Adds vibrance"),
    entry("Navy", "#000080", "Strong contrast"),
    entry("Beige", "#F5F5DC", "Neutral grounding"),
    entry("Rose Pink", "#FFC0CB", "Soft pop"),
    entry("Gray", "#D3D3D3", "Balances tone"),
    entry("Brown", "#8B4513", "Adds richness"),
    entry("Soft Blue", "#87CEEB", "Light, fresh"),
    entry("Camel", "#C19A6B", "Earthy balance"),
];

pub(crate) const DARK_WARM_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Gold", "#FFD700", "Enhances richness"),
    entry("Orange", "#FFA500", "Bright, bold contrast"),
    entry("Yellow", "#FFFF00", "Accentuates warmth"),
    entry("Olive Green", "#808000", "Earthy balance"),
    entry("Copper", "#B87333", "Adds richness"),
    entry("Maroon", "#800000", "Deep, bold look"),
    entry("Rust", "#B7410E", "Earthy warmth"),
    entry("Camel", "#C19A6B", "Soft contrast"),
    entry("Coral", "#FF7F50", "Bright freshness"),
    entry("Amber", "#FFBF00", "Glowing richness"),
];

pub(crate) const DARK_COOL_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Emerald", "#50C878", "Vivid balance"),
    entry("Navy", "#000080", "Strong contrast"),
    entry("Burgundy", "#800020", "Adds richness"),
    entry("Plum", "#8E4585", "Enhances coolness"),
    entry("Teal", "#008080", "Cool grounding"),
    entry("Blue", "#0000FF", "Bright pop"),
    entry("Lavender", "#E6E6FA", "Soft contrast"),
    entry("Rose", "#FF007F", "Adds brightness"),
    entry("Silver", "#C0C0C0", "Neutral highlight"),
    entry("Gray", "#808080", "Balances skin"),
];

pub(crate) const DARK_NEUTRAL_RECOMMENDED: &[RecommendationEntry] = &[
    entry("Brown", "#8B4513", "Rich neutral match"),
    entry("Olive", "#808000", "Earthy balance"),
    entry("Beige", "#F5F5DC", "Neutral grounding"),
    entry("Camel", "#C19A6B", "Soft, earthy"),
    entry("Burgundy", "#800020", "Adds richness"),
    entry("Teal", "#008080", "Balances undertone"),
    entry("Navy", "#000080", "Bold contrast"),
    entry("Coral", "#FF7F50", "Adds pop"),
    entry("Gold", "#FFD700", "Enhances glow"),
    entry("Gray", "#A9A9A9", "Neutral highlight"),
];

pub(crate) const LIGHT_WARM_AVOID: &[RecommendationEntry] = &[
    entry("Neon Green", "#39FF14", "Too harsh"),
    entry("Black", "#000000", "Overpowers skin"),
    entry("Bright White", "#FFFFFF", "Too stark"),
    entry("Cool Gray", "#A9A9A9", "Washes out skin"),
    entry("Purple", "#800080", "Clashes with warmth"),
];

pub(crate) const LIGHT_COOL_AVOID: &[RecommendationEntry] = &[
    entry("Orange", "#FFA500", "Too warm"),
    entry("Mustard", "#FFDB58", "Overpowers cool skin"),
    entry("Golden Yellow", "#FFD700", "Too warm"),
    entry("Coral", "#FF7F50", "Too bright"),
    entry("Beige", "#F5F5DC", "Looks dull"),
];

pub(crate) const LIGHT_NEUTRAL_AVOID: &[RecommendationEntry] = &[
    entry("Neon Pink", "#FF6EC7", "Too bold"),
    entry("Lime Green", "#32CD32", "Overwhelms skin"),
    entry("Bright Red", "#FF0000", "Too harsh"),
    entry("Black", "#000000", "Strong contrast"),
    entry("Violet", "#8F00FF", "Too bold"),
];

pub(crate) const DUSKY_WARM_AVOID: &[RecommendationEntry] = &[
    entry("Neon Yellow", "#FFFF33", "Overly bright"),
    entry("Pink", "#FF69B4", "Too soft"),
    entry("Cool Blue", "#1E90FF", "Too sharp"),
    entry("Purple", "#800080", "Clashes with warmth"),
    entry("Silver", "#C0C0C0", "Too cold"),
];

pub(crate) const DUSKY_COOL_AVOID: &[RecommendationEntry] = &[
    entry("Orange", "#FFA500", "Too warm"),
    entry("Yellow", "#FFFF00", "Overpowers coolness"),
    entry("Beige", "#F5F5DC", "Looks flat"),
    entry("Brown", "#8B4513", "Too heavy"),
    entry("Gold", "#FFD700", "Too warm"),
];

pub(crate) const DUSKY_NEUTRAL_AVOID: &[RecommendationEntry] = &[
    entry("Neon Pink", "#FF69B4", "Too loud"),
    entry("Lime Green", "#32CD32", "Too sharp"),
    entry("Neon Yellow", "#FFFF33", "Overpowers balance"),
    entry("Bright Orange", "#FF4500", "Too strong"),
    entry("Silver Gray", "#C0C0C0", "Flattens tone"),
];

pub(crate) const DARK_WARM_AVOID: &[RecommendationEntry] = &[
    entry("Neon Blue", "#1F51FF", "Too artificial"),
    entry("Cool Pink", "#FFB6C1", "Clashes with warmth"),
    entry("Silver", "#C0C0C0", "Looks dull"),
    entry("Lavender", "#E6E6FA", "Too cool"),
    entry("Gray", "#808080", "Flattens complexion"),
];

pub(crate) const DARK_COOL_AVOID: &[RecommendationEntry] = &[
    entry("Mustard", "#FFDB58", "Too warm"),
    entry("Orange", "#FFA500", "Clashes with undertone"),
    entry("Beige", "#F5F5DC", "Washes out richness"),
    entry("Khaki", "#C3B091", "Looks flat"),
    entry("Peach", "#FFE5B4", "Too light"),
];

pub(crate) const DARK_NEUTRAL_AVOID: &[RecommendationEntry] = &[
    entry("Neon Green", "#39FF14", "Too harsh"),
    entry("Neon Orange", "#FF5F1F", "Overpowers depth"),
    entry("Hot Pink", "#FF69B4", "Too flashy"),
    entry("Bright Yellow", "#FFFF00", "Too strong"),
    entry("Pastel Blue", "#AEC6CF", "Too weak for depth"),
];

pub(crate) const LIGHT_WARM_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Light warm skin has a bright, soft complexion with golden or peach undertones. It reflects light easily and appears healthiest when warmth is maintained rather than contrasted.",
    suits: "Soft warm shades like peach, coral, warm beige, ivory, apricot, and light terracotta suit this skin because they echo its natural warmth, creating a smooth, glowing appearance.",
    avoid: "Icy blues, cool greys, stark white, and silver-heavy tones oppose the skin’s warmth, making the complexion appear washed out or dull.",
    jewelry: "Yellow gold and soft rose gold work best because warm metals reflect golden light back onto the skin, enhancing brightness and softness.",
    styling: "Light warm skin looks most radiant when gentle warmth is consistent — cool extremes disrupt its natural glow.",
};

pub(crate) const LIGHT_COOL_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Light cool skin has a fair appearance with pink, rosy, or bluish undertones. It looks fresh and clear when paired with cool, crisp tones.",
    suits: "Cool pastels, lavender, icy pinks, powder blue, mint, and jewel tones like sapphire or amethyst align with the skin’s undertone and maintain clarity.",
    avoid: "Mustard, orange, camel, and overly yellow shades clash with cool undertones, often making the skin look flushed or uneven.",
    jewelry: "Silver, platinum, and white gold complement the cool base and keep the overall look clean and refined.",
    styling: "Light cool skin thrives on clarity — cool tones sharpen features rather than overpowering them.",
};

pub(crate) const LIGHT_NEUTRAL_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Light neutral skin sits between warm and cool, with balanced undertones that don’t lean strongly in either direction. Its strength lies in subtle harmony.",
    suits: "Soft neutrals like blush, taupe, dusty lavender, muted peach, and creamy beige respect the skin’s balance without pulling warm or cool.",
    avoid: "Neon colors or very dark, high-contrast shades overpower the skin’s subtlety and disturb its equilibrium.",
    jewelry: "Both gold and silver work well, with rose gold being especially flattering due to its balanced tone.",
    styling: "Light neutral skin benefits from moderation — balance enhances elegance, extremes create imbalance.",
};

pub(crate) const DUSKY_WARM_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Dusky warm skin has medium depth with golden or olive undertones, giving it a naturally rich and earthy appearance.",
    suits: "Burnt orange, copper, mustard, olive, teal, and warm greens enhance the skin’s warmth and add depth and dimension.",
    avoid: "Icy pastels, cool greys, and pale lavenders dull the warmth and can make the skin appear flat or ashy.",
    jewelry: "Gold jewelry amplifies warmth by reflecting yellow light, intensifying natural richness.",
    styling: "Dusky warm skin shines when warmth and depth are emphasized — autumnal palettes feel instinctively harmonious.",
};

pub(crate) const DUSKY_COOL_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Dusky cool skin has medium depth with cool undertones, often appearing refined, deep, and slightly muted.",
    suits: "Jewel tones like emerald, plum, ruby, sapphire, berry, and deep navy enhance richness without adding unwanted warmth.",
    avoid: "Warm yellows, pumpkin orange, mustard, and golden browns overpower the cool base and disrupt balance.",
    jewelry: "Silver, platinum, and white gold reinforce the cool undertones and elevate sophistication.",
    styling: "Dusky cool skin benefits from depth without warmth — cool richness creates elegance.",
};

pub(crate) const DUSKY_NEUTRAL_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Dusky neutral skin combines depth with balanced undertones, allowing flexibility while still needing controlled harmony.",
    suits: "Muted jewel tones like burgundy, deep teal, olive, charcoal, and coffee brown respect both warm and cool elements.",
    avoid: "Extremely icy pastels or overly warm neon shades pull the skin too far in one direction.",
    jewelry: "Both silver and gold work well, with mixed metals reflecting the skin’s balanced nature.",
    styling: "Dusky neutral skin thrives on balance — richness paired with restraint creates polish.",
};

pub(crate) const DARK_WARM_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Dark warm skin has deep richness with golden or red undertones, giving it a powerful and luminous appearance.",
    suits: "Saturated warm shades like emerald, mustard, burnt orange, ruby red, forest green, and terracotta enhance depth and glow.",
    avoid: "Pale pastels and overly cool tones lack contrast and fail to complement the skin’s intensity.",
    jewelry: "Gold and bronze metals amplify warmth and make features appear more radiant.",
    styling: "Dark warm skin excels with intensity — warmth and richness bring out its strength.",
};

pub(crate) const DARK_COOL_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Dark cool skin has deep depth with cool undertones, often appearing bold, dramatic, and regal.",
    suits: "Royal blue, plum, magenta, fuchsia, amethyst, and jewel-inspired shades enhance contrast while staying cool.",
    avoid: "Golden yellows, orange-based browns, and mustard clash strongly with the cool base.",
    jewelry: "Silver, platinum, and white gold enhance cool undertones and maintain elegance.",
    styling: "Dark cool skin thrives on contrast — cool intensity highlights its regal quality.",
};

pub(crate) const DARK_NEUTRAL_PROFILE: SubtypeProfile = SubtypeProfile {
    skin: "Dark neutral skin has deep pigmentation with balanced undertones, allowing both warmth and coolness when handled carefully.",
    suits: "Espresso, mocha, burgundy, olive, teal, and sapphire balance richness without leaning too warm or too cool.",
    avoid: "Extremely warm oranges or icy blues push the skin out of balance.",
    jewelry: "Both gold and silver work equally well, offering maximum versatility.",
    styling: "Dark neutral skin is most powerful when balance meets richness — controlled contrast is key.",
};
