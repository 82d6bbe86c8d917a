mod lightbox;
mod media_url;

pub use lightbox::lightbox_url;
pub use media_url::resolve_media_url;
