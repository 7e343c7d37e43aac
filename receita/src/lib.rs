//! Receita: interaction logic for a static recipe showcase page.
//!
//! Everything here is browser-free. The page adapters implement
//! [`DialogSurface`], [`FocusHost`], [`RecipeSource`] and the clipboard and
//! share capability traits; the controllers decide what happens.
//!
//! # Opening a recipe
//!
//! ```no_run
//! # use receita::*;
//! # fn demo<S, F>(surface: &S, focus: &F, catalog: &RecipeCatalog)
//! # where S: DialogSurface<Handle = u32, Content = ModalView>, F: FocusHost<Handle = u32> {
//! let mut modal = ModalController::new(SiteConfig::default());
//! let request = OpenRequest {
//!     recipe_id: "bolo-chocolate",
//!     card_title: "Bolo de Chocolate",
//!     image_src: "img/bolo.jpg",
//! };
//! modal.open(request, catalog, surface, focus);
//! // ... later
//! modal.close(surface, focus);
//! # }
//! ```

mod error;

pub mod capability;
pub mod config;
pub mod dialog;
pub mod feedback;
pub mod focus;
pub mod hero;
pub mod markup;
pub mod modal;
pub mod nav;
pub mod recipe;
pub mod scroll_spy;
pub mod share_panel;

pub use capability::{
    Capability, ClipboardWriter, CopyOutcome, LegacyCopy, ShareOutcome, SharePayload, ShareTarget,
};
pub use config::{Labels, SiteConfig};
pub use dialog::{DialogSurface, KeyAction};
pub use error::{ReceitaError, Result};
pub use feedback::{Feedback, TransientNotice};
pub use focus::{
    DeferredFocus, FocusCandidate, FocusHost, FocusTrap, TabMove, FOCUSABLE_SELECTOR,
};
pub use hero::HeroSlider;
pub use modal::{ModalController, ModalView, OpenRequest};
pub use nav::NavMenu;
pub use recipe::{RecipeCatalog, RecipeRecord, RecipeSource};
pub use scroll_spy::{ScrollSpy, SectionOffset};
pub use share_panel::{ShareFallbackPanel, ShareFallbackState};
