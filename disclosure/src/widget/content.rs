//! Content blocks revealed by the disclosure panel.

use std::fmt;

/// Inline run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Inline code, rendered monospaced.
    Code(String),
}

impl Inline {
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    pub fn code(s: impl Into<String>) -> Self {
        Inline::Code(s.into())
    }
}

/// A block of revealed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    CodeBlock { language: String, code: String },
}

impl Block {
    /// A paragraph holding a single run of plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(vec![Inline::text(text)])
    }

    pub fn code_block(language: impl Into<String>, code: impl Into<String>) -> Self {
        Block::CodeBlock {
            language: language.into(),
            code: code.into(),
        }
    }

    /// Text content without markup.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(inlines) => inlines
                .iter()
                .map(|inline| match inline {
                    Inline::Text(s) | Inline::Code(s) => s.as_str(),
                })
                .collect(),
            Block::CodeBlock { code, .. } => code.clone(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Paragraph(inlines) => {
                for inline in inlines {
                    match inline {
                        Inline::Text(s) => write!(f, "{}", s)?,
                        Inline::Code(s) => write!(f, "`{}`", s)?,
                    }
                }
                Ok(())
            }
            Block::CodeBlock { language, code } => {
                write!(f, "```{}\n{}\n```", language, code)
            }
        }
    }
}
