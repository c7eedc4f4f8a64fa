//! kode-ui: presentation primitives for the KODE_OS terminal and the page
//! around it.
//!
//! Everything here is driven by explicit `tick(dt_ms)` or per-frame `step`
//! calls from the host frame loop. Nothing sleeps or owns a timer.

pub mod animation;
pub mod loader;
pub mod particles;
pub mod pointer;
pub mod scroll_view;
pub mod typing;

pub use animation::Tween;
pub use loader::{Loader, LoaderStage};
pub use particles::ShardField;
pub use pointer::CursorTrail;
pub use scroll_view::ScrollView;
pub use typing::BrandLogo;
