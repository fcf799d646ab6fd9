pub mod html;
pub mod render;
pub mod types;

pub use render::{HtmlRenderer, Renderer, render_batch};
pub use types::{BlockKind, CompositeResponse, Layout, RenderedBlock, SubQueryBlock};
