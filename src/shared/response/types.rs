use std::fmt;

use crate::query::types::QueryPath;
use crate::shared::response::html::{anchor, div, div_class, escape, search_link};

pub const NO_RESULTS: &str = "No results.";
pub const HELP_HINT: &str = "Enter ? for help.";
pub const HELP_QUERY: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Normal,
    Help,
    Error,
    NoResults,
    Empty,
}

/// Escaped, display-ready output for one sub-query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    kind: BlockKind,
    html: String,
}

impl RenderedBlock {
    pub fn new(kind: BlockKind, html: String) -> Self {
        Self { kind, html }
    }

    pub fn empty() -> Self {
        Self::new(BlockKind::Empty, div(""))
    }

    pub fn no_results(path: QueryPath) -> Self {
        let html = match path {
            QueryPath::Single => div_class(
                &format!("{NO_RESULTS} {}", search_link(HELP_HINT, HELP_QUERY)),
                "note",
            ),
            QueryPath::Multi => div_class(NO_RESULTS, "note"),
        };
        Self::new(BlockKind::NoResults, html)
    }

    /// Error block carrying the failure text and where to report it.
    pub fn diagnostic(detail: &str, issue_url: &str) -> Self {
        let mut html = div_class(&escape(detail), "exceptionStack");
        html.push_str(&div(&format!(
            "<br/>Please open a new issue at {} and paste the exception text above. \
             Thanks and sorry for the inconvenience!",
            anchor(issue_url, issue_url)
        )));
        Self::new(BlockKind::Error, div_class(&html, "exception"))
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

/// A rendered block and, on the multi-query path, the sub-query it answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubQueryBlock {
    pub header: Option<String>,
    pub block: RenderedBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Empty,
    Single,
    Multi,
    /// Transport-level failure: the diagnostic is returned unwrapped.
    Failure,
}

/// The full answer to one call, blocks in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeResponse {
    layout: Layout,
    blocks: Vec<SubQueryBlock>,
}

impl CompositeResponse {
    pub fn empty() -> Self {
        Self {
            layout: Layout::Empty,
            blocks: vec![SubQueryBlock {
                header: None,
                block: RenderedBlock::empty(),
            }],
        }
    }

    pub fn single(block: RenderedBlock) -> Self {
        Self {
            layout: Layout::Single,
            blocks: vec![SubQueryBlock {
                header: None,
                block,
            }],
        }
    }

    /// One boxed block per sub-query. An empty list collapses to a single
    /// plain "No results." note.
    pub fn multi(blocks: Vec<SubQueryBlock>) -> Self {
        let blocks = if blocks.is_empty() {
            vec![SubQueryBlock {
                header: None,
                block: RenderedBlock::no_results(QueryPath::Multi),
            }]
        } else {
            blocks
        };
        Self {
            layout: Layout::Multi,
            blocks,
        }
    }

    pub fn failure(block: RenderedBlock) -> Self {
        Self {
            layout: Layout::Failure,
            blocks: vec![SubQueryBlock {
                header: None,
                block,
            }],
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn blocks(&self) -> &[SubQueryBlock] {
        &self.blocks
    }

    pub fn kinds(&self) -> Vec<BlockKind> {
        self.blocks.iter().map(|b| b.block.kind()).collect()
    }

    pub fn into_html(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CompositeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout {
            Layout::Empty | Layout::Failure => {
                for sub in &self.blocks {
                    f.write_str(sub.block.html())?;
                }
                Ok(())
            }
            Layout::Single => {
                writeln!(f, "<div class=\"answersList\">")?;
                for sub in &self.blocks {
                    f.write_str(sub.block.html())?;
                }
                f.write_str("</div>")
            }
            Layout::Multi => {
                writeln!(f, "<div class=\"answersList\">")?;
                for sub in &self.blocks {
                    match &sub.header {
                        Some(header) => {
                            writeln!(f, "<div class=\"answerBlock\">")?;
                            writeln!(f, "{}", div_class(&escape(header), "answerBlockHeader"))?;
                            writeln!(f, "{}", div_class(sub.block.html(), "singleAnswerSection"))?;
                            writeln!(f, "</div>")?;
                        }
                        None => writeln!(f, "{}", sub.block.html())?,
                    }
                }
                writeln!(f, "</div>")
            }
        }
    }
}
