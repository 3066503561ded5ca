use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;

/// The host's "run this before the next repaint" primitive.
pub trait FrameHost {
    /// Dropping the handle cancels a frame that hasn't run yet.
    type Handle;

    /// `None` when no frame could be scheduled. The job is dropped.
    fn next_frame(&self, job: Box<dyn FnOnce()>) -> Option<Self::Handle>;
}

/// `window.requestAnimationFrame` through `gloo_render`.
#[derive(Clone, Copy, Default)]
pub struct BrowserFrames;

impl FrameHost for BrowserFrames {
    type Handle = AnimationFrame;

    fn next_frame(&self, job: Box<dyn FnOnce()>) -> Option<AnimationFrame> {
        web_sys::window()?;
        Some(request_animation_frame(move |_| job()))
    }
}

/// Collapses bursts of triggers into one run per frame. Triggers that
/// arrive while a frame is pending are dropped. Dropping the last clone
/// cancels the pending frame.
pub struct FrameCoalescer<H: FrameHost = BrowserFrames> {
    host: H,
    pending: Rc<Cell<bool>>,
    frame: Rc<RefCell<Option<H::Handle>>>,
}

// Not derived: a derive would also demand `H::Handle: Clone`.
impl<H: FrameHost + Clone> Clone for FrameCoalescer<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            pending: self.pending.clone(),
            frame: self.frame.clone(),
        }
    }
}

impl<H: FrameHost> FrameCoalescer<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            pending: Rc::new(Cell::new(false)),
            frame: Rc::new(RefCell::new(None)),
        }
    }

    /// Returns false when nothing new was scheduled, either because a frame
    /// is already pending or because the host had no frame to give.
    pub fn request<F>(&self, job: F) -> bool
    where
        F: FnOnce() + 'static,
        H::Handle: 'static,
    {
        if self.pending.replace(true) {
            return false;
        }

        let pending = self.pending.clone();
        // Weak, or the handle would own the closure that owns the handle.
        let frame: Weak<RefCell<Option<H::Handle>>> = Rc::downgrade(&self.frame);
        let scheduled = self.host.next_frame(Box::new(move || {
            pending.set(false);
            if let Some(frame) = frame.upgrade() {
                frame.borrow_mut().take();
            }
            job();
        }));

        match scheduled {
            Some(handle) => {
                if self.pending.get() {
                    *self.frame.borrow_mut() = Some(handle);
                }
                true
            }
            None => {
                warn!("No animation frame available, dropping job");
                self.pending.set(false);
                false
            }
        }
    }
}
