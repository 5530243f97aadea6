use serde::Serialize;

use super::Color;

/// Syntax roles painted by a theme in the code preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxRole {
    Plain,
    Comment,
    Keyword,
    String,
    Function,
    Variable,
}

/// A named palette from the registry
#[derive(Debug, Clone, Serialize)]
pub struct Theme {
    pub key: &'static str,
    pub name: &'static str,

    pub background: Color,
    pub foreground: Color,

    pub comment: Color,
    pub keyword: Color,
    pub string: Color,
    pub function: Color,
    pub variable: Color,
}

impl Theme {
    pub fn color_for(&self, role: SyntaxRole) -> Color {
        match role {
            SyntaxRole::Plain => self.foreground,
            SyntaxRole::Comment => self.comment,
            SyntaxRole::Keyword => self.keyword,
            SyntaxRole::String => self.string,
            SyntaxRole::Function => self.function,
            SyntaxRole::Variable => self.variable,
        }
    }

    /// Swatch colors shown in the picker, left to right
    pub fn swatches(&self) -> [Color; 4] {
        [self.keyword, self.string, self.function, self.variable]
    }
}

/// Every theme the demo knows about, in declaration order.
/// Order matters: `:FkThemeList` prints it and `:FkThemeNext` cycles through it.
pub static THEMES: [Theme; 8] = [
    // Catppuccin Mocha
    Theme {
        key: "catppuccin",
        name: "Catppuccin",
        background: Color::hex(0x1e1e2e),
        foreground: Color::hex(0xcdd6f4),
        comment: Color::hex(0x6c7086),
        keyword: Color::hex(0xcba6f7),
        string: Color::hex(0xa6e3a1),
        function: Color::hex(0x89b4fa),
        variable: Color::hex(0xf9e2af),
    },
    Theme {
        key: "tokyonight",
        name: "Tokyo Night",
        background: Color::hex(0x1a1b26),
        foreground: Color::hex(0xc0caf5),
        comment: Color::hex(0x565f89),
        keyword: Color::hex(0xbb9af7),
        string: Color::hex(0x9ece6a),
        function: Color::hex(0x7aa2f7),
        variable: Color::hex(0xe0af68),
    },
    // Gruvbox dark, medium contrast
    Theme {
        key: "gruvbox",
        name: "Gruvbox",
        background: Color::hex(0x282828),
        foreground: Color::hex(0xebdbb2),
        comment: Color::hex(0x928374),
        keyword: Color::hex(0xfe8019),
        string: Color::hex(0xb8bb26),
        function: Color::hex(0xfabd2f),
        variable: Color::hex(0x83a598),
    },
    Theme {
        key: "rose-pine",
        name: "Rose Pine",
        background: Color::hex(0x191724),
        foreground: Color::hex(0xe0def4),
        comment: Color::hex(0x6e6a86),
        keyword: Color::hex(0xc4a7e7),
        string: Color::hex(0x9ccfd8),
        function: Color::hex(0xebbcba),
        variable: Color::hex(0xf6c177),
    },
    Theme {
        key: "moonlight",
        name: "Moonlight",
        background: Color::hex(0x222436),
        foreground: Color::hex(0xc8d3f5),
        comment: Color::hex(0x7a88cf),
        keyword: Color::hex(0xffc777),
        string: Color::hex(0xc3e88d),
        function: Color::hex(0x82aaff),
        variable: Color::hex(0xff966c),
    },
    Theme {
        key: "material",
        name: "Material",
        background: Color::hex(0x263238),
        foreground: Color::hex(0xeeffff),
        comment: Color::hex(0x546e7a),
        keyword: Color::hex(0xc792ea),
        string: Color::hex(0xc3e88d),
        function: Color::hex(0x82aaff),
        variable: Color::hex(0xffcb6b),
    },
    Theme {
        key: "dracula",
        name: "Dracula",
        background: Color::hex(0x282a36),
        foreground: Color::hex(0xf8f8f2),
        comment: Color::hex(0x6272a4),
        keyword: Color::hex(0xff79c6),
        string: Color::hex(0xf1fa8c),
        function: Color::hex(0x8be9fd),
        variable: Color::hex(0xffb86c),
    },
    // Nord - arctic, north-bluish
    Theme {
        key: "nord",
        name: "Nord",
        background: Color::hex(0x2e3440),
        foreground: Color::hex(0xd8dee9),
        comment: Color::hex(0x616e88),
        keyword: Color::hex(0x81a1c1),
        string: Color::hex(0xa3be8c),
        function: Color::hex(0x88c0d0),
        variable: Color::hex(0xebcb8b),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_lowercase() {
        for (i, theme) in THEMES.iter().enumerate() {
            assert_eq!(theme.key, theme.key.to_lowercase());
            assert!(THEMES[i + 1..].iter().all(|t| t.key != theme.key));
        }
    }

    #[test]
    fn plain_role_uses_foreground() {
        let theme = &THEMES[0];
        assert_eq!(theme.color_for(SyntaxRole::Plain), theme.foreground);
        assert_eq!(theme.color_for(SyntaxRole::Keyword), theme.keyword);
    }

    #[test]
    fn serializes_colors_as_hex() {
        let value = serde_json::to_value(&THEMES[1]).unwrap();
        assert_eq!(value["key"], "tokyonight");
        assert_eq!(value["name"], "Tokyo Night");
        assert_eq!(value["background"], "#1a1b26");
    }
}
