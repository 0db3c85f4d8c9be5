use std::fmt;

use serde::{Serialize, Serializer};

/// 最多返回的 vibe 数量
pub const MAX_VIBES: usize = 3;

/// 根据主调关键字推断出的风格标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Fresh,
    Woody,
    Sexy,
    Elegant,
    Bold,
}

/// 按优先级排列的关键字表
const KEYWORDS: [(Vibe, &[&str]); 5] = [
    (Vibe::Fresh, &["citrus", "fresh"]),
    (Vibe::Woody, &["woody"]),
    (Vibe::Sexy, &["sweet", "vanilla"]),
    (Vibe::Elegant, &["floral"]),
    (Vibe::Bold, &["spicy"]),
];

impl Vibe {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fresh => "Fresh 🍋",
            Self::Woody => "Woody 🌲",
            Self::Sexy => "Sexy 🔥",
            Self::Elegant => "Elegant 🌸",
            Self::Bold => "Bold 🌶️",
        }
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Vibe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// 根据主调推断 vibe
///
/// 各关键字独立判断，结果按固定优先级排列而不是按输入顺序，最多 3 个。
pub fn derive_vibes(main_accord: &str) -> Vec<Vibe> {
    let accord = main_accord.to_lowercase();
    KEYWORDS
        .iter()
        .filter(|(_, words)| words.iter().any(|w| accord.contains(w)))
        .map(|&(vibe, _)| vibe)
        .take(MAX_VIBES)
        .collect()
}
