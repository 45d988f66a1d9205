/// Email composition and dispatch
pub mod attachment;
pub mod composer;
pub mod dispatch;
pub mod mime;
pub mod template;

pub use attachment::AttachmentFetcher;
pub use composer::{Composition, EmailComposer, validate};
pub use dispatch::DispatchGateway;
pub use template::TemplateRenderer;
