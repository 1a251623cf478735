//! Long-form article rendering and image source resolution.

mod blocks;
mod image;

pub use blocks::{
    layout, quick_links, ArticleLayout, Block, QuickLink, SectionKind, SectionLayout,
    TABLE_CELL_KEYS,
};
pub use image::{ImageResolver, FALLBACK_IMAGE};
