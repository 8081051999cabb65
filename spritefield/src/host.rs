// Copyright 2025 the Spritefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host platform seen from the canvas.
//!
//! A [`Host`] provides the three things a canvas cannot do by itself:
//! schedule a callback before the next repaint, attach input listeners, and
//! resolve an image URL to a decoded image. [`HostBinding`] wraps a host for
//! the lifetime of one canvas: it attaches listeners on creation and, on every
//! exit path, detaches them and cancels the pending frame when dropped.

use core::marker::PhantomData;

use crate::loader::LoadRequest;
use crate::scheduler::FrameCoalescer;

/// Handle to a frame callback requested from the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

bitflags::bitflags! {
    /// Input and window listeners a canvas needs.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerSet: u8 {
        /// Window resize.
        const RESIZE       = 0b0000_0001;
        /// Pointer press on the surface.
        const POINTER_DOWN = 0b0000_0010;
        /// Pointer motion anywhere in the window.
        const POINTER_MOVE = 0b0000_0100;
        /// Pointer release anywhere in the window.
        const POINTER_UP   = 0b0000_1000;
        /// Wheel over the surface.
        const WHEEL        = 0b0001_0000;
        /// Touch start on the surface.
        const TOUCH_START  = 0b0010_0000;
        /// Touch motion on the surface.
        const TOUCH_MOVE   = 0b0100_0000;
        /// Touch end on the surface.
        const TOUCH_END    = 0b1000_0000;
        /// Every listener above.
        const ALL          = 0b1111_1111;
    }
}

/// Services the embedding platform provides to a canvas.
///
/// Calls never block. Results of [`Host::resolve_image`] are delivered later
/// through [`Canvas::image_loaded`](crate::Canvas::image_loaded) or
/// [`Canvas::image_failed`](crate::Canvas::image_failed), and frame callbacks
/// through [`Canvas::frame`](crate::Canvas::frame).
pub trait Host {
    /// Decoded image handle produced by this host.
    type Image;

    /// Asks for a callback before the next repaint.
    fn request_frame(&mut self) -> FrameId;

    /// Cancels a frame callback that has not fired yet.
    fn cancel_frame(&mut self, id: FrameId);

    /// Starts delivering the given listeners.
    fn attach_listeners(&mut self, listeners: ListenerSet);

    /// Stops delivering the given listeners.
    fn detach_listeners(&mut self, listeners: ListenerSet);

    /// Starts resolving `request.url` to an image.
    fn resolve_image(&mut self, request: LoadRequest);
}

impl<H: Host + ?Sized> Host for &mut H {
    type Image = H::Image;

    fn request_frame(&mut self) -> FrameId {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        (**self).cancel_frame(id);
    }

    fn attach_listeners(&mut self, listeners: ListenerSet) {
        (**self).attach_listeners(listeners);
    }

    fn detach_listeners(&mut self, listeners: ListenerSet) {
        (**self).detach_listeners(listeners);
    }

    fn resolve_image(&mut self, request: LoadRequest) {
        (**self).resolve_image(request);
    }
}

/// A host bound to one canvas.
///
/// Owns the listener registration and the single pending frame request.
#[derive(Debug)]
pub struct HostBinding<H: Host> {
    host: H,
    listeners: ListenerSet,
    frames: FrameCoalescer,
}

impl<H: Host> HostBinding<H> {
    /// Binds `host`, attaching [`ListenerSet::ALL`].
    pub fn new(host: H) -> Self {
        Self::with_listeners(host, ListenerSet::ALL)
    }

    /// Binds `host`, attaching only `listeners`.
    pub fn with_listeners(mut host: H, listeners: ListenerSet) -> Self {
        host.attach_listeners(listeners);
        Self {
            host,
            listeners,
            frames: FrameCoalescer::default(),
        }
    }

    /// Requests a frame unless one is already pending. Returns whether the
    /// host was asked.
    pub fn request_frame(&mut self) -> bool {
        let host = &mut self.host;
        self.frames.request(|| host.request_frame())
    }

    /// Marks the pending frame as delivered.
    pub fn frame_fired(&mut self) {
        self.frames.on_frame();
    }

    /// The frame request in flight, if any.
    pub fn pending_frame(&self) -> Option<FrameId> {
        self.frames.pending()
    }

    /// Forwards an image request to the host.
    pub fn resolve_image(&mut self, request: LoadRequest) {
        self.host.resolve_image(request);
    }

    /// Listeners attached by this binding.
    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    /// Shared access to the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Exclusive access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<H: Host> Drop for HostBinding<H> {
    fn drop(&mut self) {
        if let Some(id) = self.frames.cancel() {
            self.host.cancel_frame(id);
        }
        self.host.detach_listeners(self.listeners);
    }
}

/// A [`Host`] that records every call.
///
/// Frames are never delivered on their own and images never resolve; the
/// owner drives both by calling into the canvas. Used by tests, benchmarks,
/// and headless runs.
#[derive(Debug)]
pub struct RecordingHost<I> {
    next_frame: u64,
    requested: Vec<FrameId>,
    cancelled: Vec<FrameId>,
    listeners: ListenerSet,
    requests: Vec<LoadRequest>,
    _image: PhantomData<fn() -> I>,
}

impl<I> Default for RecordingHost<I> {
    fn default() -> Self {
        Self {
            next_frame: 0,
            requested: Vec::new(),
            cancelled: Vec::new(),
            listeners: ListenerSet::empty(),
            requests: Vec::new(),
            _image: PhantomData,
        }
    }
}

impl<I> RecordingHost<I> {
    /// Creates a host with nothing attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame requested so far, in order.
    pub fn frames_requested(&self) -> &[FrameId] {
        &self.requested
    }

    /// Every frame cancelled so far, in order.
    pub fn frames_cancelled(&self) -> &[FrameId] {
        &self.cancelled
    }

    /// Listeners currently attached.
    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    /// Image requests received and not yet taken.
    pub fn requests(&self) -> &[LoadRequest] {
        &self.requests
    }

    /// Removes and returns the pending image requests.
    pub fn take_requests(&mut self) -> Vec<LoadRequest> {
        core::mem::take(&mut self.requests)
    }
}

impl<I> Host for RecordingHost<I> {
    type Image = I;

    fn request_frame(&mut self) -> FrameId {
        self.next_frame += 1;
        let id = FrameId(self.next_frame);
        self.requested.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.cancelled.push(id);
    }

    fn attach_listeners(&mut self, listeners: ListenerSet) {
        self.listeners |= listeners;
    }

    fn detach_listeners(&mut self, listeners: ListenerSet) {
        self.listeners -= listeners;
    }

    fn resolve_image(&mut self, request: LoadRequest) {
        self.requests.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_listener() {
        assert_eq!(ListenerSet::ALL, ListenerSet::all());
        assert!(ListenerSet::ALL.contains(ListenerSet::WHEEL | ListenerSet::TOUCH_END));
    }

    #[test]
    fn binding_attaches_and_detaches() {
        let mut host = RecordingHost::<()>::new();
        {
            let binding = HostBinding::new(&mut host);
            assert_eq!(binding.listeners(), ListenerSet::ALL);
            assert_eq!(binding.host().listeners(), ListenerSet::ALL);
        }
        assert!(host.listeners().is_empty());
        assert!(host.frames_cancelled().is_empty());
    }

    #[test]
    fn frame_requests_coalesce() {
        let mut host = RecordingHost::<()>::new();
        let mut binding = HostBinding::new(&mut host);
        assert!(binding.request_frame());
        assert!(!binding.request_frame());
        assert_eq!(binding.pending_frame(), Some(FrameId(1)));

        binding.frame_fired();
        assert_eq!(binding.pending_frame(), None);
        assert!(binding.request_frame());
        drop(binding);

        assert_eq!(host.frames_requested(), &[FrameId(1), FrameId(2)]);
        assert_eq!(host.frames_cancelled(), &[FrameId(2)]);
    }

    #[test]
    fn partial_listener_sets() {
        let mut host = RecordingHost::<()>::new();
        host.attach_listeners(ListenerSet::RESIZE);
        {
            let _binding = HostBinding::with_listeners(&mut host, ListenerSet::WHEEL);
        }
        assert_eq!(host.listeners(), ListenerSet::RESIZE);
    }
}
