use crate::query::error::QueryError;
use crate::query::types::{QueryPath, ResultBatch};
use crate::resolvers::{Answer, ResultItem};
use crate::shared::response::html::{anchor, div, div_class, escape, search_link};
use crate::shared::response::types::{BlockKind, RenderedBlock};

/// Nesting deeper than this is refused rather than rendered.
pub const MAX_NESTING: usize = 16;

/// Turns a single result item into safe markup.
///
/// A failing renderer is treated like a failing resolver: the whole
/// sub-query becomes an error block.
pub trait Renderer: Send + Sync {
    fn render_item(&self, item: &ResultItem, out: &mut String) -> Result<(), QueryError>;
}

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_item(&self, item: &ResultItem, out: &mut String) -> Result<(), QueryError> {
        write_answer(item.answer(), out, 0)
    }
}

fn write_answer(answer: &Answer, out: &mut String, depth: usize) -> Result<(), QueryError> {
    if depth > MAX_NESTING {
        return Err(QueryError::Render(format!(
            "answer nesting exceeds {MAX_NESTING} levels"
        )));
    }

    match answer {
        Answer::Text(text) => out.push_str(&div(&escape(text))),
        Answer::Fixed(text) => out.push_str(&div_class(&escape(text), "fixed")),
        Answer::Pairs(rows) => {
            out.push_str("<table class=\"pairs\">");
            for (label, value) in rows {
                out.push_str("<tr><td class=\"label\">");
                out.push_str(&escape(label));
                out.push_str("</td><td>");
                out.push_str(&escape(value));
                out.push_str("</td></tr>");
            }
            out.push_str("</table>");
        }
        Answer::Link { text, url } => out.push_str(&div(&anchor(url, text))),
        Answer::QueryLink { query, caption } => out.push_str(&div(&format!(
            "{} {}",
            search_link(query, query),
            escape(caption)
        ))),
        Answer::List(items) => {
            out.push_str("<ul>");
            for item in items {
                out.push_str("<li>");
                write_answer(item, out, depth + 1)?;
                out.push_str("</li>");
            }
            out.push_str("</ul>");
        }
        Answer::Section { title, items } => {
            out.push_str("<div class=\"section\">");
            out.push_str(&div_class(&escape(title), "sectionHeader"));
            for item in items {
                write_answer(item, out, depth + 1)?;
            }
            out.push_str("</div>");
        }
    }
    Ok(())
}

/// Render a whole batch into one block.
///
/// Either every item lands in the block or none does: the first render
/// failure is returned and the partial output is discarded.
pub fn render_batch(
    batch: &ResultBatch,
    renderer: &dyn Renderer,
    path: QueryPath,
) -> Result<RenderedBlock, QueryError> {
    if batch.is_empty() {
        return Ok(RenderedBlock::no_results(path));
    }

    let mut html = String::new();
    for item in batch.items() {
        renderer.render_item(item, &mut html)?;
    }

    if batch.is_help() {
        Ok(RenderedBlock::new(
            BlockKind::Help,
            div_class(&html, "singleAnswerSection"),
        ))
    } else {
        Ok(RenderedBlock::new(BlockKind::Normal, html))
    }
}
