/// A one-click shortcut that fills the prompt with a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickCommand {
    pub label: &'static str,
    pub command: &'static str,
}

pub const QUICK_COMMANDS: [QuickCommand; 6] = [
    QuickCommand {
        label: "Catppuccin",
        command: ":FkTheme catppuccin",
    },
    QuickCommand {
        label: "Tokyo Night",
        command: ":FkTheme tokyonight",
    },
    QuickCommand {
        label: "Gruvbox",
        command: ":FkTheme gruvbox",
    },
    QuickCommand {
        label: "Rose Pine",
        command: ":FkTheme rose-pine",
    },
    QuickCommand {
        label: "Dracula",
        command: ":FkTheme dracula",
    },
    QuickCommand {
        label: "Nord",
        command: ":FkTheme nord",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::Command;
    use crate::theme;

    #[test]
    fn every_shortcut_names_a_registered_theme() {
        for quick in QUICK_COMMANDS {
            let Command::SetTheme(name) = Command::parse(quick.command) else {
                panic!("{} is not a theme switch", quick.command);
            };
            let found = theme::find(&name).expect("theme in registry");
            assert_eq!(found.name, quick.label);
        }
    }
}
