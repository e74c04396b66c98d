pub mod accordion;
pub mod carousel;
pub mod layout;
pub mod modal;
pub mod pipeline;
pub mod post_view;
pub mod tooltip;
pub mod waitlist_modal;

pub use accordion::{Accordion, AccordionItem};
pub use carousel::{Carousel, Slide};
pub use modal::Modal;
pub use pipeline::{Pipeline, PipelineStep};
pub use post_view::{PostDetail, PostList, PostPane};
pub use tooltip::Tooltip;
pub use waitlist_modal::WaitlistModal;
