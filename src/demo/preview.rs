//! The `config.lua` sample shown next to the terminal, pre-split into
//! spans so it can be repainted in any theme.

use crate::theme::SyntaxRole::{self, Comment, Function, Keyword, Plain, String as Str, Variable};

pub const FILE_NAME: &str = "config.lua";

pub type Span = (SyntaxRole, &'static str);

pub const PREVIEW: &[&[Span]] = &[
    &[(Comment, "-- Configure awesome plugin")],
    &[(Keyword, "local function"), (Plain, " "), (Function, "setup"), (Plain, "()")],
    &[
        (Plain, "  "),
        (Function, "require"),
        (Plain, "("),
        (Str, "\"fkthemes\""),
        (Plain, ")."),
        (Function, "setup"),
        (Plain, "({"),
    ],
    &[
        (Plain, "    "),
        (Variable, "themes"),
        (Plain, " = { "),
        (Str, "\"catppuccin\""),
        (Plain, ", "),
        (Str, "\"tokyonight\""),
        (Plain, " },"),
    ],
    &[
        (Plain, "    "),
        (Variable, "default_theme"),
        (Plain, " = "),
        (Str, "\"catppuccin\""),
        (Plain, ","),
    ],
    &[
        (Plain, "    "),
        (Variable, "transparent_background"),
        (Plain, " = "),
        (Keyword, "true"),
        (Plain, ","),
    ],
    &[(Plain, "  })")],
    &[(Plain, "  ")],
    &[(Plain, "  "), (Comment, "-- Set custom keymaps")],
    &[
        (Plain, "  vim.keymap."),
        (Function, "set"),
        (Plain, "("),
        (Str, "\"n\""),
        (Plain, ", "),
        (Str, "\"<leader>tp\""),
        (Plain, ", "),
        (Str, "\":FkThemePicker<CR>\""),
        (Plain, ")"),
    ],
    &[(Keyword, "end")],
    &[],
    &[
        (Keyword, "return"),
        (Plain, " { "),
        (Variable, "setup"),
        (Plain, " = "),
        (Variable, "setup"),
        (Plain, " }"),
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(spans: &[Span]) -> String {
        spans.iter().map(|(_, text)| *text).collect()
    }

    #[test]
    fn preview_reads_as_lua() {
        let text: Vec<_> = PREVIEW.iter().map(|l| line_text(l)).collect();
        assert_eq!(text[0], "-- Configure awesome plugin");
        assert_eq!(text[1], "local function setup()");
        assert_eq!(text[2], "  require(\"fkthemes\").setup({");
        assert_eq!(text[9], "  vim.keymap.set(\"n\", \"<leader>tp\", \":FkThemePicker<CR>\")");
        assert_eq!(text.last().map(String::as_str), Some("return { setup = setup }"));
    }

    #[test]
    fn every_role_is_used() {
        let roles: Vec<SyntaxRole> = PREVIEW.iter().flat_map(|l| l.iter().map(|(r, _)| *r)).collect();
        for role in [Plain, Comment, Keyword, Str, Function, Variable] {
            assert!(roles.contains(&role), "{:?} unused", role);
        }
    }
}
