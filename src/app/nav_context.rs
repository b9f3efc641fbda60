//! Sidebar state shared via context.
//!
//! One `NavUiState` for the whole app, read by every nav item and written by
//! the header button, the drawer backdrop and leaf clicks. The
//! `expanded_by_default` flag follows the wide-screen media query.

use dioxus::prelude::*;

use crate::nav::NavUiState;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Viewport width at which the sidebar shows labels without user action.
pub const WIDE_SCREEN_QUERY: &str = "(min-width: 1280px)";

#[derive(Clone, Copy)]
pub struct NavContext {
    state: Signal<NavUiState>,
}

impl NavContext {
    pub fn get(&self) -> NavUiState {
        (self.state)()
    }

    pub fn toggle_user_expanded(&self) {
        let mut state = self.state;
        state.write().toggle_user_expanded();
    }

    pub fn set_panel_open(&self, open: bool) {
        let mut state = self.state;
        state.write().set_panel_open(open);
    }

    pub fn set_default_expanded(&self, expanded: bool) {
        let mut state = self.state;
        state.write().set_default_expanded(expanded);
    }

    pub fn on_leaf_activated(&self) {
        let mut state = self.state;
        state.write().on_leaf_activated();
    }
}

/// Detaches the media query listener on drop
#[cfg(target_arch = "wasm32")]
struct MediaQueryGuard {
    mql: web_sys::MediaQueryList,
    _onchange: Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for MediaQueryGuard {
    fn drop(&mut self) {
        self.mql.set_onchange(None);
    }
}

/// Initialize nav context provider - call once at app root
pub fn use_nav_provider() {
    let state = use_signal(NavUiState::default);
    let ctx = NavContext { state };

    use_context_provider(|| ctx);

    #[cfg(target_arch = "wasm32")]
    {
        let guard: Rc<RefCell<Option<MediaQueryGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }

            let mql = match web_sys::window().map(|w| w.match_media(WIDE_SCREEN_QUERY)) {
                Some(Ok(Some(mql))) => mql,
                _ => {
                    tracing::warn!("matchMedia unavailable, sidebar stays collapsed by default");
                    return;
                }
            };

            ctx.set_default_expanded(mql.matches());

            let onchange = Closure::wrap(Box::new(move |e: web_sys::MediaQueryListEvent| {
                tracing::debug!("Viewport breakpoint changed, wide = {}", e.matches());
                ctx.set_default_expanded(e.matches());
            }) as Box<dyn FnMut(_)>);
            mql.set_onchange(Some(onchange.as_ref().unchecked_ref()));

            *guard.borrow_mut() = Some(MediaQueryGuard {
                mql,
                _onchange: onchange,
            });
        });
    }
}

pub fn use_nav() -> NavContext {
    use_context::<NavContext>()
}
