// Outreach preview: the multi-candidate email preview and its contract cards.
// Pipeline: stored blob -> normaliser -> formatter -> carousel -> view/render.

pub mod carousel;
pub mod contract;
pub mod formatter;
pub mod handoff;
pub mod normaliser;
pub mod render;
pub mod view;

pub use carousel::CarouselSnapshot;
pub use view::OutreachPreview;
