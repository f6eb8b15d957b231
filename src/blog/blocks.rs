//! Structured blog-post content.
//!
//! Long-form posts are an ordered list of typed blocks rather than one big
//! markup blob, so the page renders them with a single match and the post
//! data stays readable.

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    /// Inset, centered at a reduced width.
    Normal,
    /// Full content width, for featured screenshots.
    Large,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Paragraph { text: String },
    Heading { text: String },
    List { items: Vec<String> },
    Image {
        src: String,
        alt: String,
        size: ImageSize,
    },
}

impl ContentBlock {
    pub fn paragraph(text: &str) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn heading(text: &str) -> Self {
        Self::Heading { text: text.into() }
    }

    pub fn list(items: &[&str]) -> Self {
        Self::List {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn image(src: &str, alt: &str, size: ImageSize) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
            size,
        }
    }

    /// An image block with no source has nothing to show and is dropped
    /// without a placeholder. Every other block always renders.
    pub fn is_renderable(&self) -> bool {
        match self {
            Self::Image { src, .. } => !src.is_empty(),
            _ => true,
        }
    }
}

/// Renders blocks in order, one element per renderable block.
pub fn render_blocks(blocks: &[ContentBlock]) -> Vec<Html> {
    blocks
        .iter()
        .filter(|block| block.is_renderable())
        .map(|block| match block {
            ContentBlock::Paragraph { text } => html! {
                <p class="post-paragraph">{ text.clone() }</p>
            },
            ContentBlock::Heading { text } => html! {
                <h2 class="post-heading">{ text.clone() }</h2>
            },
            ContentBlock::List { items } => html! {
                <ul class="post-list">
                    { for items.iter().map(|item| html! { <li>{ item.clone() }</li> }) }
                </ul>
            },
            ContentBlock::Image { src, alt, size } => {
                let class = match size {
                    ImageSize::Large => "post-image post-image-large",
                    ImageSize::Normal => "post-image",
                };
                html! {
                    <div class={class}>
                        <img src={src.clone()} alt={alt.clone()} loading="lazy" />
                    </div>
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_element_per_block_in_order() {
        let blocks = vec![
            ContentBlock::paragraph("a"),
            ContentBlock::heading("b"),
            ContentBlock::list(&["x", "y"]),
        ];
        let rendered = render_blocks(&blocks);
        assert_eq!(rendered.len(), 3);

        // The list block keeps its items in order.
        match &blocks[2] {
            ContentBlock::List { items } => {
                assert_eq!(items, &["x".to_string(), "y".to_string()]);
            }
            other => panic!("expected a list block, got {other:?}"),
        }
    }

    #[test]
    fn empty_src_image_is_skipped() {
        let blocks = vec![ContentBlock::image("", "a", ImageSize::Normal)];
        assert!(render_blocks(&blocks).is_empty());
    }

    #[test]
    fn image_with_src_renders() {
        let blocks = vec![
            ContentBlock::image("/shot.png", "screenshot", ImageSize::Large),
            ContentBlock::image("", "missing", ImageSize::Normal),
            ContentBlock::paragraph("after"),
        ];
        assert_eq!(render_blocks(&blocks).len(), 2);
    }

    #[test]
    fn renderable_predicate_matches_render_output() {
        let blocks = vec![
            ContentBlock::paragraph(""),
            ContentBlock::heading(""),
            ContentBlock::list(&[]),
            ContentBlock::image("", "", ImageSize::Normal),
        ];
        let expected = blocks.iter().filter(|b| b.is_renderable()).count();
        assert_eq!(render_blocks(&blocks).len(), expected);
        assert_eq!(expected, 3);
    }
}
