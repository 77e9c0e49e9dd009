use super::{Document, Element};
use anyhow::{Context, Result};
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use std::fs;
use std::ops::Range;
use std::path::Path;

/// A Markdown file whose headings carry identifiers.
///
/// `## Release notes {#notes}` makes everything below that heading, up to the
/// next heading of the same or a higher level, addressable as `notes`.
/// Headings without an identifier are not addressable. When an identifier
/// appears twice the first section wins.
#[derive(Debug, Clone, Default)]
pub struct MarkdownDocument {
    elements: Vec<(String, Element)>,
}

struct Heading {
    level: u8,
    id: Option<String>,
    start: usize,
    end: usize,
}

fn parser_options() -> Options {
    Options::ENABLE_HEADING_ATTRIBUTES | Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

impl MarkdownDocument {
    /// Parses the whole document once so reference links resolve across
    /// sections.
    pub fn parse(source: &str) -> Self {
        let events: Vec<(Event<'_>, Range<usize>)> =
            Parser::new_ext(source, parser_options()).into_offset_iter().collect();
        let headings = collect_headings(&events);
        let mut elements: Vec<(String, Element)> = Vec::new();

        for (idx, heading) in headings.iter().enumerate() {
            let Some(id) = heading.id.as_deref() else {
                continue;
            };
            if elements.iter().any(|(existing, _)| existing == id) {
                continue;
            }

            let end = headings[idx + 1..]
                .iter()
                .find(|next| next.level <= heading.level)
                .map(|next| next.start)
                .unwrap_or(source.len());
            let section = events
                .iter()
                .filter(|(_, range)| range.start >= heading.end && range.end <= end)
                .map(|(event, _)| event);

            let (inner_text, text_content) = render_section(section);
            elements.push((
                id.to_string(),
                Element::new(Some(inner_text), Some(text_content)),
            ));
        }

        Self { elements }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))?;
        Ok(Self::parse(&content))
    }
}

impl Document for MarkdownDocument {
    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.elements
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, element)| element.clone())
    }

    fn ids(&self) -> Vec<String> {
        self.elements.iter().map(|(id, _)| id.clone()).collect()
    }
}

fn collect_headings(events: &[(Event<'_>, Range<usize>)]) -> Vec<Heading> {
    events
        .iter()
        .filter_map(|(event, range)| match event {
            Event::Start(Tag::Heading { level, id, .. }) => Some(Heading {
                level: *level as u8,
                id: id.as_ref().map(|id| id.to_string()),
                start: range.start,
                end: range.end,
            }),
            _ => None,
        })
        .collect()
}

/// Returns the section's rendered text (block layout kept, markup removed)
/// and its bare text nodes (line breaks only).
fn render_section<'a, 'e: 'a>(
    events: impl Iterator<Item = &'a Event<'e>>,
) -> (String, String) {
    let mut inner = String::new();
    let mut content = String::new();

    for event in events {
        match event {
            Event::Text(text) | Event::Code(text) => {
                inner.push_str(text);
                content.push_str(text);
            }
            Event::SoftBreak => {
                inner.push(' ');
                content.push('\n');
            }
            Event::HardBreak => {
                inner.push('\n');
                content.push('\n');
            }
            Event::Rule => push_break(&mut inner, 2),
            Event::End(TagEnd::Item) | Event::End(TagEnd::TableRow) => push_break(&mut inner, 1),
            Event::End(TagEnd::TableCell) => inner.push('\t'),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::CodeBlock
                | TagEnd::BlockQuote(_)
                | TagEnd::List(_)
                | TagEnd::TableHead,
            ) => push_break(&mut inner, 2),
            _ => {}
        }
    }

    (inner, content)
}

fn push_break(output: &mut String, newlines: usize) {
    if output.is_empty() {
        return;
    }
    let trailing = output.chars().rev().take_while(|c| *c == '\n').count();
    for _ in trailing..newlines {
        output.push('\n');
    }
}
