//! The fixed setup footer shown beneath revealed content.

use super::config::DisclosureConfig;
use super::content::{Block, Inline};

/// Language tag of the command block.
pub const COMMAND_LANGUAGE: &str = "bash";

/// The runnable command shown in the footer, `./<runner> <task>`.
///
/// Both tokens are inserted verbatim.
pub fn command_line(runner: &str, task: &str) -> String {
    format!("./{} {}", runner, task)
}

/// Build the footer: plugin sentence, command block, settings reminder.
pub fn setup_footer(module: &str, task: &str, config: &DisclosureConfig) -> Vec<Block> {
    vec![
        Block::Paragraph(vec![
            Inline::text("Preocúpate de que el plugin "),
            Inline::code(module),
            Inline::text(" esté aplicado en el archivo "),
            Inline::code(&config.build_file),
            Inline::text(" de tu proyecto."),
        ]),
        Block::code_block(COMMAND_LANGUAGE, command_line(&config.runner, task)),
        Block::Paragraph(vec![
            Inline::text("Recuerda agregar el nuevo módulo al archivo "),
            Inline::code(&config.settings_file),
            Inline::text("."),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_is_verbatim() {
        assert_eq!(command_line("gradlew", "build"), "./gradlew build");
        assert_eq!(command_line("mvnw", "a b<c>"), "./mvnw a b<c>");
    }
}
